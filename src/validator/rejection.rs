use thiserror::Error;

/// Why a submitted answer was not accepted; `Display` is the player-facing reason
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Rejection {
    #[error("Only use +, -, *, /, ^ operators or parentheses ()")]
    ForbiddenCharacters,
    #[error("Your answer is using these numbers: {used}, while the problem requires {required}")]
    WrongNumbers { used: String, required: String },
    #[error("{answer} is not a valid math expression")]
    InvalidExpression { answer: String },
    #[error("{answer} evaluates to {value}, target = {target}")]
    WrongValue {
        answer: String,
        value: f64,
        target: i64,
    },
}
