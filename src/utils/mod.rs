//! Utils module split into submodules

mod errors;
mod multiset;
mod sequences;
mod validation;

pub use errors::UtilsError;
pub use multiset::{Multiset, literal_numbers};
pub use sequences::generate_multisets;
pub use validation::validate_answer_charset;
