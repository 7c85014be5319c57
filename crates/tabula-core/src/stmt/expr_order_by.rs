use super::{Direction, Expr};

/// An `ORDER BY` item with an explicit direction.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprOrderBy {
    pub expr: Box<Expr>,
    pub direction: Direction,
}

impl Expr {
    pub fn desc(expr: impl Into<Self>) -> Self {
        ExprOrderBy {
            expr: Box::new(expr.into()),
            direction: Direction::Desc,
        }
        .into()
    }

    pub fn asc(expr: impl Into<Self>) -> Self {
        ExprOrderBy {
            expr: Box::new(expr.into()),
            direction: Direction::Asc,
        }
        .into()
    }
}

impl From<ExprOrderBy> for Expr {
    fn from(value: ExprOrderBy) -> Self {
        Self::OrderBy(value)
    }
}
