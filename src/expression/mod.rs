//! Expression grammar: AST, display, parsing and evaluation

mod ast;
mod display;
mod errors;
mod eval;
mod parser;

pub use ast::{BinaryOp, Expression, OperatorClass};
pub use errors::{ExpressionError, ParseError};
pub use parser::parse;
