/// Represents arithmetic expressions over non-negative integer literals
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
    Pow(Box<Expression>, Box<Expression>),
    Neg(Box<Expression>),
}

/// Precedence tier of the outermost operator of an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperatorClass {
    Atom,
    Additive,
    Multiplicative,
    Power,
}

/// The five binary operators of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Pow,
    ];

    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
            BinaryOp::Pow => '^',
        }
    }

    pub fn class(self) -> OperatorClass {
        match self {
            BinaryOp::Add | BinaryOp::Sub => OperatorClass::Additive,
            BinaryOp::Mul | BinaryOp::Div => OperatorClass::Multiplicative,
            BinaryOp::Pow => OperatorClass::Power,
        }
    }

    /// Whether a left operand of the given class must be parenthesized
    pub fn wraps_left(self, operand: OperatorClass) -> bool {
        match self {
            BinaryOp::Add | BinaryOp::Sub => false,
            BinaryOp::Mul | BinaryOp::Div => operand == OperatorClass::Additive,
            BinaryOp::Pow => operand != OperatorClass::Atom,
        }
    }

    /// Whether a right operand of the given class must be parenthesized
    pub fn wraps_right(self, operand: OperatorClass) -> bool {
        match self {
            BinaryOp::Add => false,
            BinaryOp::Sub | BinaryOp::Mul => operand == OperatorClass::Additive,
            BinaryOp::Div | BinaryOp::Pow => operand != OperatorClass::Atom,
        }
    }
}

impl Expression {
    pub fn binary(op: BinaryOp, left: Expression, right: Expression) -> Self {
        let (l, r) = (Box::new(left), Box::new(right));
        match op {
            BinaryOp::Add => Expression::Add(l, r),
            BinaryOp::Sub => Expression::Sub(l, r),
            BinaryOp::Mul => Expression::Mul(l, r),
            BinaryOp::Div => Expression::Div(l, r),
            BinaryOp::Pow => Expression::Pow(l, r),
        }
    }

    /// Split a binary node into its operator and operands
    pub fn as_binary(&self) -> Option<(BinaryOp, &Expression, &Expression)> {
        match self {
            Expression::Add(l, r) => Some((BinaryOp::Add, l, r)),
            Expression::Sub(l, r) => Some((BinaryOp::Sub, l, r)),
            Expression::Mul(l, r) => Some((BinaryOp::Mul, l, r)),
            Expression::Div(l, r) => Some((BinaryOp::Div, l, r)),
            Expression::Pow(l, r) => Some((BinaryOp::Pow, l, r)),
            Expression::Number(_) | Expression::Neg(_) => None,
        }
    }

    /// Unary minus sits with the additive tier so it is wrapped wherever a sum would be.
    pub fn class(&self) -> OperatorClass {
        match self {
            Expression::Number(_) => OperatorClass::Atom,
            Expression::Neg(_) => OperatorClass::Additive,
            other => other
                .as_binary()
                .map_or(OperatorClass::Atom, |(op, _, _)| op.class()),
        }
    }
}
