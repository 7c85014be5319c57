use super::{Expr, Statement, TableRef};

/// An `INSERT` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub target: TableRef,

    /// Target columns, as field references
    pub columns: Vec<Expr>,

    /// Values for the columns. When empty, one parameter per column is
    /// rendered, numbered from 1.
    pub values: Vec<Expr>,

    /// Fields to return once the row is inserted
    pub returning: Vec<Expr>,
}

impl Insert {
    pub fn new(target: TableRef, columns: impl IntoIterator<Item = Expr>) -> Insert {
        Insert {
            target,
            columns: columns.into_iter().collect(),
            values: vec![],
            returning: vec![],
        }
    }

    pub fn values(mut self, values: impl IntoIterator<Item = Expr>) -> Insert {
        self.values.extend(values);
        self
    }

    pub fn returning(mut self, returning: impl IntoIterator<Item = Expr>) -> Insert {
        self.returning.extend(returning);
        self
    }

    /// One parameter per column, `$1..$n`, standing in for omitted values.
    pub fn synthesized_values(&self) -> Vec<Expr> {
        (1..=self.columns.len()).map(Expr::arg).collect()
    }

    /// Number of positional parameters the rendered statement consumes when
    /// values are synthesized.
    pub fn synthesized_params(&self) -> usize {
        if self.values.is_empty() {
            self.columns.len()
        } else {
            0
        }
    }
}

impl From<Insert> for Statement {
    fn from(src: Insert) -> Self {
        Self::Insert(src)
    }
}
