//! Subset dynamic program over the input numbers

mod candidate;
pub mod constants;
mod core;

pub use candidate::Candidate;
pub use self::core::ExpressionEnumerator;
