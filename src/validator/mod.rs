//! Answer checking for submitted expressions

mod core;
mod rejection;

pub use self::core::{AnswerValidator, CheckResult};
pub use rejection::Rejection;
