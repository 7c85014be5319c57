use super::Expr;

/// A `target=value` pair of an `UPDATE ... SET` list.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: Expr,
    pub value: Expr,
}

impl Assignment {
    pub fn new(target: impl Into<Expr>, value: impl Into<Expr>) -> Assignment {
        Assignment {
            target: target.into(),
            value: value.into(),
        }
    }
}
