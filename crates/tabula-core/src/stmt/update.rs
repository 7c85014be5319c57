use super::{Assignment, Expr, Statement, TableRef};

/// An `UPDATE` statement.
///
/// Rendering an update without assignments is an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub target: TableRef,
    pub assignments: Vec<Assignment>,
    pub filter: Option<Expr>,
}

impl Update {
    pub fn new(target: TableRef) -> Update {
        Update {
            target,
            assignments: vec![],
            filter: None,
        }
    }

    pub fn set(mut self, target: impl Into<Expr>, value: impl Into<Expr>) -> Update {
        self.assignments.push(Assignment::new(target, value));
        self
    }

    pub fn filter(mut self, filter: impl Into<Expr>) -> Update {
        self.filter = Some(filter.into());
        self
    }
}

impl From<Update> for Statement {
    fn from(src: Update) -> Self {
        Self::Update(src)
    }
}
