use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Eq,
    Ne,
    Ge,
    Gt,
    Le,
    Lt,

    /// Full text search match (`@@`)
    Match,
}

impl BinaryOp {
    pub fn is_eq(self) -> bool {
        matches!(self, Self::Eq)
    }

    pub fn is_ne(self) -> bool {
        matches!(self, Self::Ne)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOp::Eq => f.write_str("="),
            BinaryOp::Ne => f.write_str("!="),
            BinaryOp::Ge => f.write_str(">="),
            BinaryOp::Gt => f.write_str(">"),
            BinaryOp::Le => f.write_str("<="),
            BinaryOp::Lt => f.write_str("<"),
            BinaryOp::Match => f.write_str(" @@ "),
        }
    }
}

impl fmt::Debug for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
