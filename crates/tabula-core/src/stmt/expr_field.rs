use super::{Expr, TableRef};
use crate::Result;

use std::cell::OnceCell;

/// References a field of a mapped table by its source name.
///
/// The column name is resolved through the environment on first render
/// unless the reference was built from a field descriptor, in which case it
/// is known up front.
#[derive(Debug, Clone)]
pub struct ExprField {
    /// Table the field belongs to. Unbound references get their table from
    /// the `FROM` clause of the enclosing select.
    pub table: Option<TableRef>,

    /// Source (struct) name of the field
    pub name: String,

    column: OnceCell<String>,
}

impl ExprField {
    pub fn new(table: TableRef, name: impl Into<String>) -> ExprField {
        ExprField {
            table: Some(table),
            name: name.into(),
            column: OnceCell::new(),
        }
    }

    /// A field reference whose column name is already known.
    pub fn with_column(
        table: TableRef,
        name: impl Into<String>,
        column: impl Into<String>,
    ) -> ExprField {
        ExprField {
            table: Some(table),
            name: name.into(),
            column: OnceCell::from(column.into()),
        }
    }

    /// A field reference not yet bound to a table.
    pub fn unbound(name: impl Into<String>) -> ExprField {
        ExprField {
            table: None,
            name: name.into(),
            column: OnceCell::new(),
        }
    }

    pub fn is_bound(&self) -> bool {
        self.table.is_some()
    }

    /// The column name, if it has been resolved already.
    pub fn column(&self) -> Option<&str> {
        self.column.get().map(String::as_str)
    }

    /// Returns the column name, resolving it with `resolve` on first use.
    pub fn resolve_column(&self, resolve: impl FnOnce(&str) -> Result<String>) -> Result<&str> {
        if let Some(column) = self.column.get() {
            return Ok(column);
        }

        let column = resolve(&self.name)?;
        Ok(self.column.get_or_init(|| column))
    }
}

impl Expr {
    /// A field reference that is bound to its table later by
    /// [`Select::from`](super::Select::from).
    pub fn field_named(name: impl Into<String>) -> Self {
        ExprField::unbound(name).into()
    }

    pub fn as_field(&self) -> Option<&ExprField> {
        match self {
            Self::Field(field) => Some(field),
            _ => None,
        }
    }
}

impl PartialEq for ExprField {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table && self.name == other.name
    }
}

impl From<ExprField> for Expr {
    fn from(value: ExprField) -> Self {
        Self::Field(value)
    }
}
