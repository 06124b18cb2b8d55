use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Forbidden character '{ch}' at position {position}")]
    ForbiddenCharacter { ch: char, position: usize },
}
