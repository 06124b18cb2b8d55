//! Recursive-descent parser for `+ - * / ^`, unary minus and parentheses.
//!
//! Precedence from loosest to tightest: `+ -`, `* /`, unary `-`, `^`.
//! `^` is right-associative and its exponent may itself carry a unary minus,
//! so `-2 ^ 2` is `-(2 ^ 2)` and `2 ^ -1` is `0.5`.

use log::debug;

use crate::expression::ast::{BinaryOp, Expression};
use crate::expression::errors::ParseError;

// Bounds on recursion and tree height for untrusted input
pub const MAX_NESTING: usize = 256;
pub const MAX_TOKENS: usize = 1024;

#[derive(Debug, Clone, PartialEq)]
enum TokenKind {
    Number(f64),
    Op(BinaryOp),
    LParen,
    RParen,
}

#[derive(Debug, Clone)]
struct Token {
    kind: TokenKind,
    position: usize,
    text: String,
}

fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((position, ch)) = chars.next() {
        let kind = match ch {
            c if c.is_whitespace() => continue,
            c if c.is_ascii_digit() => {
                let mut text = String::from(c);
                while let Some(&(_, next)) = chars.peek() {
                    if !next.is_ascii_digit() {
                        break;
                    }
                    text.push(next);
                    chars.next();
                }
                let value = text.parse::<f64>().map_err(|_| ParseError::UnexpectedToken {
                    found: text.clone(),
                    position,
                })?;
                tokens.push(Token {
                    kind: TokenKind::Number(value),
                    position,
                    text,
                });
                continue;
            }
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            other => match BinaryOp::ALL.iter().find(|op| op.symbol() == other) {
                Some(op) => TokenKind::Op(*op),
                None => return Err(ParseError::UnexpectedCharacter { ch: other, position }),
            },
        };
        tokens.push(Token {
            kind,
            position,
            text: ch.to_string(),
        });
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    fn peek_op(&self, accepted: &[BinaryOp]) -> Option<BinaryOp> {
        match self.peek().map(|t| &t.kind) {
            Some(TokenKind::Op(op)) if accepted.contains(op) => Some(*op),
            _ => None,
        }
    }

    fn descend(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            let position = self.peek().map_or(0, |t| t.position);
            return Err(ParseError::TooDeep { position });
        }
        Ok(())
    }

    fn unexpected(token: &Token) -> ParseError {
        ParseError::UnexpectedToken {
            found: token.text.clone(),
            position: token.position,
        }
    }

    fn parse_sum(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_product()?;
        while let Some(op) = self.peek_op(&[BinaryOp::Add, BinaryOp::Sub]) {
            self.cursor += 1;
            let right = self.parse_product()?;
            left = Expression::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_product(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_unary()?;
        while let Some(op) = self.peek_op(&[BinaryOp::Mul, BinaryOp::Div]) {
            self.cursor += 1;
            let right = self.parse_unary()?;
            left = Expression::binary(op, left, right);
        }
        Ok(left)
    }

    // Parentheses, unary minus and exponents all recurse through here
    fn parse_unary(&mut self) -> Result<Expression, ParseError> {
        self.descend()?;
        let result = if self.peek_op(&[BinaryOp::Sub]).is_some() {
            self.cursor += 1;
            self.parse_unary().map(|operand| Expression::Neg(Box::new(operand)))
        } else {
            self.parse_power()
        };
        self.depth -= 1;
        result
    }

    fn parse_power(&mut self) -> Result<Expression, ParseError> {
        let base = self.parse_primary()?;
        if self.peek_op(&[BinaryOp::Pow]).is_some() {
            self.cursor += 1;
            let exponent = self.parse_unary()?;
            return Ok(Expression::binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn parse_primary(&mut self) -> Result<Expression, ParseError> {
        let token = self.next().ok_or(ParseError::UnexpectedEnd)?;
        match token.kind {
            TokenKind::Number(value) => Ok(Expression::Number(value)),
            TokenKind::LParen => {
                let inner = self.parse_sum()?;
                match self.next() {
                    Some(Token {
                        kind: TokenKind::RParen,
                        ..
                    }) => Ok(inner),
                    Some(other) => Err(Self::unexpected(&other)),
                    None => Err(ParseError::UnclosedParenthesis(token.position)),
                }
            }
            TokenKind::Op(_) | TokenKind::RParen => Err(Self::unexpected(&token)),
        }
    }
}

/// Parse an infix arithmetic expression
///
/// # Errors
///
/// Returns an error if the input is empty, contains characters outside the
/// grammar, or is not a well-formed expression.
pub fn parse(input: &str) -> Result<Expression, ParseError> {
    debug!("Parsing expression: '{}'", input);

    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }
    // Binary chains are built in loops, so the token count bounds tree height
    if tokens.len() > MAX_TOKENS {
        return Err(ParseError::TooLong(tokens.len()));
    }

    let mut parser = Parser {
        tokens,
        cursor: 0,
        depth: 0,
    };
    let expr = parser.parse_sum()?;

    if let Some(trailing) = parser.peek() {
        return Err(Parser::unexpected(trailing));
    }

    debug!("Parsed expression: {}", expr);
    Ok(expr)
}
