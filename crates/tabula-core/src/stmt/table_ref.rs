use super::{Expr, ExprField};
use crate::Result;

use std::cell::OnceCell;

/// References a mapped table by the name of the type it is registered for.
///
/// The table name is resolved lazily the first time the reference is
/// rendered and kept on the node; later renders reuse it.
#[derive(Debug, Clone)]
pub struct TableRef {
    /// Name of the mapped type
    ty: String,

    /// Table name, once known
    name: OnceCell<String>,

    /// Optional `AS` alias
    alias: Option<String>,
}

impl TableRef {
    /// References the table registered for the type named `ty`.
    pub fn new(ty: impl Into<String>) -> TableRef {
        TableRef {
            ty: ty.into(),
            name: OnceCell::new(),
            alias: None,
        }
    }

    /// References a table whose name is already known.
    pub fn with_name(ty: impl Into<String>, name: impl Into<String>) -> TableRef {
        TableRef {
            ty: ty.into(),
            name: OnceCell::from(name.into()),
            alias: None,
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> TableRef {
        self.alias = Some(alias.into());
        self
    }

    pub fn type_name(&self) -> &str {
        &self.ty
    }

    pub fn alias_name(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// The table name, if it has been resolved already.
    pub fn name(&self) -> Option<&str> {
        self.name.get().map(String::as_str)
    }

    /// Returns the table name, resolving it with `resolve` on first use.
    pub fn resolve_name(&self, resolve: impl FnOnce(&str) -> Result<String>) -> Result<&str> {
        if let Some(name) = self.name.get() {
            return Ok(name);
        }

        let name = resolve(&self.ty)?;
        Ok(self.name.get_or_init(|| name))
    }

    /// References a field of this table by its source name.
    pub fn field(&self, name: impl Into<String>) -> Expr {
        ExprField::new(self.clone(), name).into()
    }

    /// References several fields from a comma separated list of source names.
    pub fn fields(&self, names: &str) -> Vec<Expr> {
        names
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| self.field(name))
            .collect()
    }
}

impl PartialEq for TableRef {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty && self.alias == other.alias
    }
}

impl From<TableRef> for Expr {
    fn from(value: TableRef) -> Self {
        Self::Table(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_memoized() {
        let table = TableRef::new("app::User");
        let mut calls = 0;

        let name = table
            .resolve_name(|ty| {
                calls += 1;
                assert_eq!(ty, "app::User");
                Ok("users".to_string())
            })
            .unwrap()
            .to_string();
        assert_eq!(name, "users");

        let again = table
            .resolve_name(|_| {
                calls += 1;
                Ok("other".to_string())
            })
            .unwrap();
        assert_eq!(again, "users");
        assert_eq!(calls, 1);
    }

    #[test]
    fn failed_resolution_is_not_memoized() {
        let table = TableRef::new("app::User");
        assert!(table
            .resolve_name(|ty| Err(crate::Error::unresolved_type(ty)))
            .is_err());
        assert_eq!(table.name(), None);
    }

    #[test]
    fn fields_from_list() {
        let table = TableRef::with_name("app::User", "users");
        let fields = table.fields("name, email,, age ");
        assert_eq!(fields.len(), 3);
    }
}
