use log::debug;
use serde::Serialize;

use crate::expression::parse;
use crate::solver::constants::EPSILON;
use crate::utils::{Multiset, validate_answer_charset};
use crate::validator::rejection::Rejection;

/// Verdict in the shape the session layer consumes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub valid: bool,
    pub reason: String,
}

impl From<Result<f64, Rejection>> for CheckResult {
    fn from(result: Result<f64, Rejection>) -> Self {
        match result {
            Ok(_) => Self {
                valid: true,
                reason: String::new(),
            },
            Err(rejection) => Self {
                valid: false,
                reason: rejection.to_string(),
            },
        }
    }
}

/// Checks answers in order: characters, numbers, syntax, value
#[derive(Debug, Clone)]
pub struct AnswerValidator {
    epsilon: f64,
}

impl AnswerValidator {
    pub fn new() -> Self {
        Self { epsilon: EPSILON }
    }

    /// Evaluate `answer` if it is a correct solution
    ///
    /// # Errors
    ///
    /// Returns the first `Rejection` the answer runs into.
    pub fn validate(
        &self,
        answer: &str,
        required: &Multiset,
        target: i64,
    ) -> Result<f64, Rejection> {
        debug!("Checking answer '{}' for {} -> {}", answer, required, target);

        validate_answer_charset(answer).map_err(|err| {
            debug!("Character check failed: {}", err);
            Rejection::ForbiddenCharacters
        })?;

        let used = Multiset::from_text(answer);
        if used != *required {
            return Err(Rejection::WrongNumbers {
                used: used.to_string(),
                required: required.to_string(),
            });
        }

        let invalid = || Rejection::InvalidExpression {
            answer: answer.to_string(),
        };
        let value = parse(answer)
            .map_err(|err| {
                debug!("Parse failed: {}", err);
                invalid()
            })?
            .evaluate()
            .map_err(|err| {
                debug!("Evaluation failed: {}", err);
                invalid()
            })?;

        // NaN fails the comparison and is rejected
        let on_target = (value - target as f64).abs() <= self.epsilon;
        if !on_target {
            return Err(Rejection::WrongValue {
                answer: answer.to_string(),
                value,
                target,
            });
        }

        Ok(value)
    }

    pub fn check(&self, answer: &str, required: &Multiset, target: i64) -> CheckResult {
        self.validate(answer, required, target).into()
    }
}

impl Default for AnswerValidator {
    fn default() -> Self {
        Self::new()
    }
}
