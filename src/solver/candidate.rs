use std::cmp::Ordering;
use std::fmt;

use crate::expression::{BinaryOp, OperatorClass};
use crate::solver::constants::{EPSILON, POWER_LIMIT};

/// One representation of a value reachable from a subset of the input
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub value: f64,
    pub expr: String,
    pub class: OperatorClass,
    pub brackets: usize,
}

struct Operand<'a> {
    expr: &'a str,
    wrapped: bool,
}

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.wrapped {
            write!(f, "({})", self.expr)
        } else {
            write!(f, "{}", self.expr)
        }
    }
}

fn apply_value(op: BinaryOp, left: f64, right: f64) -> Option<f64> {
    let value = match op {
        BinaryOp::Add => left + right,
        BinaryOp::Sub => left - right,
        BinaryOp::Mul => left * right,
        BinaryOp::Div => {
            if right.abs() <= EPSILON {
                return None;
            }
            left / right
        }
        BinaryOp::Pow => {
            if left.abs() < EPSILON && right.abs() < EPSILON {
                return None;
            }
            let value = left.powf(right);
            // NaN fails both comparisons and is dropped with the rest
            if !(value.abs() < POWER_LIMIT && value.abs() > EPSILON) {
                return None;
            }
            value
        }
    };
    value.is_finite().then_some(value)
}

impl Candidate {
    pub fn literal(number: u64) -> Self {
        Self {
            value: number as f64,
            expr: number.to_string(),
            class: OperatorClass::Atom,
            brackets: 0,
        }
    }

    /// Canonical preference: fewer parenthesis pairs, then the
    /// lexicographically smaller expression text.
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.brackets
            .cmp(&other.brackets)
            .then_with(|| self.expr.cmp(&other.expr))
    }

    pub fn is_better_than(&self, other: &Self) -> bool {
        self.canonical_cmp(other) == Ordering::Less
    }

    /// Combine two candidates with `op`, or `None` for a degenerate application
    pub fn apply(op: BinaryOp, left: &Candidate, right: &Candidate) -> Option<Candidate> {
        let value = apply_value(op, left.value, right.value)?;
        let wrap_left = op.wraps_left(left.class);
        let wrap_right = op.wraps_right(right.class);

        let expr = format!(
            "{} {} {}",
            Operand {
                expr: &left.expr,
                wrapped: wrap_left,
            },
            op.symbol(),
            Operand {
                expr: &right.expr,
                wrapped: wrap_right,
            }
        );

        Some(Candidate {
            value,
            expr,
            class: op.class(),
            brackets: left.brackets
                + right.brackets
                + usize::from(wrap_left)
                + usize::from(wrap_right),
        })
    }

    /// Every non-degenerate way to join `a` and `b` with one operator.
    /// The non-commutative operators are tried in both directions.
    pub fn combinations<'a>(
        a: &'a Candidate,
        b: &'a Candidate,
    ) -> impl Iterator<Item = Candidate> + 'a {
        [
            (BinaryOp::Add, a, b),
            (BinaryOp::Sub, a, b),
            (BinaryOp::Sub, b, a),
            (BinaryOp::Mul, a, b),
            (BinaryOp::Div, b, a),
            (BinaryOp::Div, a, b),
            (BinaryOp::Pow, a, b),
            (BinaryOp::Pow, b, a),
        ]
        .into_iter()
        .filter_map(|(op, left, right)| Self::apply(op, left, right))
    }
}
