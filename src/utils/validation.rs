use log::{debug, warn};

use crate::utils::errors::UtilsError;

fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace() || matches!(c, '+' | '-' | '*' | '/' | '^' | '(' | ')')
}

/// # Errors
///
/// Returns an error naming the first character that is not an ASCII digit,
/// whitespace, one of `+ - * / ^` or a parenthesis.
pub fn validate_answer_charset(answer: &str) -> Result<(), UtilsError> {
    debug!("Validating answer characters: '{}'", answer);

    if let Some((position, ch)) = answer.char_indices().find(|&(_, c)| !is_allowed(c)) {
        warn!("Answer contains forbidden character '{}': '{}'", ch, answer);
        return Err(UtilsError::ForbiddenCharacter { ch, position });
    }

    debug!("Answer character validation successful");
    Ok(())
}
