use super::{Expr, TableRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// `JOIN`
    Inner,

    /// `LEFT JOIN`
    Left,
}

/// A join clause of a select: `JOIN table ON constraint`.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub kind: JoinKind,
    pub table: TableRef,
    pub on: Expr,
}

impl Join {
    pub fn inner(table: TableRef, on: impl Into<Expr>) -> Join {
        Join {
            kind: JoinKind::Inner,
            table,
            on: on.into(),
        }
    }

    pub fn left(table: TableRef, on: impl Into<Expr>) -> Join {
        Join {
            kind: JoinKind::Left,
            table,
            on: on.into(),
        }
    }
}
