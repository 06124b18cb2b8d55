use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

#[inline]
fn is_zero(value: f64) -> bool {
    value.abs() < f64::EPSILON
}

// Exponents are compared loosely: re-associating `3 * 2 / 3` may leave 2.0000000000000004
const INTEGER_TOLERANCE: f64 = 1e-9;

#[inline]
fn is_integer(value: f64) -> bool {
    if value.abs() > 2_f64.powi(52) {
        true
    } else {
        (value - value.round()).abs() <= INTEGER_TOLERANCE
    }
}

impl Expression {
    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division by zero
    /// - Raising a negative base to a fractional exponent (complex result)
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        debug!("Evaluating expression: {}", self);

        let result = match self {
            Expression::Number(n) => Ok(*n),
            Expression::Add(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                Ok(left + right)
            }
            Expression::Sub(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                Ok(left - right)
            }
            Expression::Mul(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                Ok(left * right)
            }
            Expression::Div(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if is_zero(right) {
                    debug!("Division by zero attempted");
                    Err(ExpressionError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
            Expression::Pow(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if left >= 0.0 {
                    Ok(left.powf(right))
                } else if is_integer(right) {
                    Ok(left.powf(right.round()))
                } else {
                    debug!(
                        "Complex result from negative base with fractional exponent: {}^{}",
                        left, right
                    );
                    Err(ExpressionError::ComplexResult)
                }
            }
            Expression::Neg(e) => {
                let val = e.evaluate()?;
                Ok(-val)
            }
        };

        match &result {
            Ok(value) => debug!("Expression evaluated to: {}", value),
            Err(e) => debug!("Expression evaluation failed: {}", e),
        }

        result
    }
}
