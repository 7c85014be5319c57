use super::{Expr, Statement, TableRef};

/// A `DELETE` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub from: TableRef,
    pub filter: Option<Expr>,
}

impl Delete {
    pub fn new(from: TableRef) -> Delete {
        Delete { from, filter: None }
    }

    pub fn filter(mut self, filter: impl Into<Expr>) -> Delete {
        self.filter = Some(filter.into());
        self
    }

    /// Returns `true` when the delete has no filter and removes every row of
    /// its table.
    pub fn is_unfiltered(&self) -> bool {
        self.filter.is_none()
    }
}

impl From<Delete> for Statement {
    fn from(src: Delete) -> Self {
        Self::Delete(src)
    }
}
