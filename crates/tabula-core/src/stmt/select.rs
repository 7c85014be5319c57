use super::{Expr, Join, Statement, TableRef};

/// A `SELECT` statement.
///
/// Empty clauses are omitted when rendered. An empty projection renders as
/// `*`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Select {
    /// Expressions to return
    pub projection: Vec<Expr>,

    /// The table to select from
    pub from: Option<TableRef>,

    pub joins: Vec<Join>,

    /// Row filter
    pub filter: Option<Expr>,

    pub group_by: Vec<Expr>,

    pub having: Option<Expr>,

    pub order_by: Vec<Expr>,

    pub limit: Option<u64>,

    pub offset: Option<u64>,
}

impl Select {
    pub fn new(projection: impl IntoIterator<Item = Expr>) -> Select {
        Select {
            projection: projection.into_iter().collect(),
            ..Select::default()
        }
    }

    /// Selects fields by source name. The fields are bound to the table
    /// passed to [`Select::from`].
    pub fn fields<'a>(names: impl IntoIterator<Item = &'a str>) -> Select {
        Select::new(names.into_iter().map(Expr::field_named))
    }

    /// Sets the `FROM` table and binds every unbound field reference of the
    /// projection to it.
    pub fn from(mut self, table: TableRef) -> Select {
        for expr in &mut self.projection {
            if let Expr::Field(field) = expr {
                if field.table.is_none() {
                    field.table = Some(table.clone());
                }
            }
        }

        self.from = Some(table);
        self
    }

    pub fn join(mut self, table: TableRef, on: impl Into<Expr>) -> Select {
        self.joins.push(Join::inner(table, on));
        self
    }

    pub fn left_join(mut self, table: TableRef, on: impl Into<Expr>) -> Select {
        self.joins.push(Join::left(table, on));
        self
    }

    pub fn filter(mut self, filter: impl Into<Expr>) -> Select {
        self.filter = Some(filter.into());
        self
    }

    pub fn group_by(mut self, exprs: impl IntoIterator<Item = Expr>) -> Select {
        self.group_by.extend(exprs);
        self
    }

    pub fn having(mut self, having: impl Into<Expr>) -> Select {
        self.having = Some(having.into());
        self
    }

    pub fn order_by(mut self, exprs: impl IntoIterator<Item = Expr>) -> Select {
        self.order_by.extend(exprs);
        self
    }

    pub fn limit(mut self, limit: u64) -> Select {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Select {
        self.offset = Some(offset);
        self
    }
}

impl From<Select> for Statement {
    fn from(src: Select) -> Self {
        Self::Select(src)
    }
}
