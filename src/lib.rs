//! Twentyfour - reachability solver and problem catalog for the 24 game
//!
//! Given a few small numbers and the operators `+ - * / ^`, this library finds
//! every positive integer the numbers can be combined into, builds a catalog
//! of solvable problems per target, and checks players' answers.

pub mod catalog;
pub mod expression;
pub mod service;
pub mod solver;
pub mod utils;
pub mod validator;

// Re-export the main public API
pub use catalog::{CatalogConfig, CatalogError, SolutionCatalog};
pub use expression::{Expression, ExpressionError, ParseError, parse};
pub use service::{Problem, ProblemService, ServiceError};
pub use solver::{Candidate, ExpressionEnumerator};
pub use utils::{Multiset, UtilsError};
pub use validator::{AnswerValidator, CheckResult, Rejection};

/// Find an expression using every number exactly once that equals `target`
///
/// This is a convenience function that runs the enumerator directly, with no
/// catalog involved.
///
/// # Examples
///
/// ```
/// use twentyfour::find_expression;
///
/// match find_expression(&[5, 4, 3, 2], 24) {
///     Some(expr) => println!("Found: {}", expr),
///     None => println!("No solution found"),
/// }
/// ```
pub fn find_expression(numbers: &[u64], target: i64) -> Option<String> {
    ExpressionEnumerator::new().find_expression(numbers, target)
}

/// Check `answer` against the numbers of a problem and its target
///
/// # Examples
///
/// ```
/// use twentyfour::check;
///
/// assert!(check("4*(5+3-2)", "5 4 3 2", 24).valid);
/// assert!(!check("1+2+3+4", "1 2 3 4", 24).valid);
/// ```
pub fn check(answer: &str, required: &str, target: i64) -> CheckResult {
    AnswerValidator::new().check(answer, &Multiset::from_text(required), target)
}
