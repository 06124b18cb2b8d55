use std::fmt;

use crate::expression::ast::{Expression, OperatorClass};

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Number(n) => write!(f, "{}", n),
                Expression::Neg(e) => {
                    write!(f, "-")?;
                    write_with_parens(f, e, e.class() != OperatorClass::Atom)
                }
                other => match other.as_binary() {
                    Some((op, l, r)) => {
                        write_with_parens(f, l, op.wraps_left(l.class()))?;
                        write!(f, " {} ", op.symbol())?;
                        write_with_parens(f, r, op.wraps_right(r.class()))
                    }
                    None => Ok(()),
                },
            }
        }

        fmt_expression(f, self)
    }
}
