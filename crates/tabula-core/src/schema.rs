mod builder;
pub use builder::Builder;

mod field;
pub use field::{Field, FieldDecl};

mod field_set;
pub use field_set::FieldSet;

mod table;
pub use table::{Derived, Extracted, Table, TableDecl};

use crate::{Error, Result};
use indexmap::IndexMap;
use std::sync::Arc;

/// The set of registered tables, keyed by the name of the mapped type.
///
/// Used to resolve type names into table names and source field names into
/// column names when statements are rendered.
#[derive(Debug, Default, Clone)]
pub struct Schema {
    tables: IndexMap<String, Arc<Table>>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Adds a table, replacing any table previously registered for the same
    /// type.
    pub fn insert(&mut self, table: Arc<Table>) {
        self.tables.insert(table.type_name().to_string(), table);
    }

    pub fn table(&self, ty: &str) -> Result<&Arc<Table>> {
        self.tables.get(ty).ok_or_else(|| Error::unresolved_type(ty))
    }

    pub fn table_name(&self, ty: &str) -> Result<&str> {
        Ok(self.table(ty)?.name())
    }

    pub fn column_name(&self, ty: &str, field: &str) -> Result<&str> {
        let table = self.table(ty)?;
        table
            .fields()
            .get(field)
            .map(Field::column)
            .ok_or_else(|| Error::unresolved_field(ty, field))
    }

    pub fn tables(&self) -> impl ExactSizeIterator<Item = &Arc<Table>> {
        self.tables.values()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
