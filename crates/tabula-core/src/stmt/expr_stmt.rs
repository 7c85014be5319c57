use super::{Expr, Statement};

/// A nested statement, rendered in parentheses.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub stmt: Box<Statement>,
}

impl Expr {
    pub fn stmt(stmt: impl Into<Statement>) -> Self {
        ExprStmt {
            stmt: Box::new(stmt.into()),
        }
        .into()
    }
}

impl From<ExprStmt> for Expr {
    fn from(value: ExprStmt) -> Self {
        Self::Stmt(value)
    }
}
