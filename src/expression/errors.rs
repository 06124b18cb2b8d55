use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Complex result from negative base with fractional exponent")]
    ComplexResult,
}

/// Errors produced while parsing an infix expression
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Expression is empty")]
    Empty,
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },
    #[error("Unexpected '{found}' at position {position}")]
    UnexpectedToken { found: String, position: usize },
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Unclosed parenthesis opened at position {0}")]
    UnclosedParenthesis(usize),
    #[error("Expression nests too deeply at position {position}")]
    TooDeep { position: usize },
    #[error("Expression has {0} tokens, more than the parser accepts")]
    TooLong(usize),
}
