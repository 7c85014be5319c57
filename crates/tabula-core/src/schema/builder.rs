use super::{Field, Schema, Table, TableDecl};
use crate::Result;
use std::sync::Arc;

#[derive(Debug, Default, Clone)]
pub struct Builder {
    /// If set, prefix all table names with this string
    table_name_prefix: Option<String>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            table_name_prefix: None,
        }
    }

    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    /// Builds the descriptor for one declared table.
    ///
    /// Every field is checked here, so a bad declaration fails before any
    /// statement is rendered.
    pub fn build_table(&self, decl: TableDecl) -> Result<Table> {
        let TableDecl { ty, name, fields } = decl;

        let fields = fields
            .into_iter()
            .map(Field::from_decl)
            .collect::<Result<Vec<_>>>()
            .map_err(|err| err.context(crate::err!("model `{ty}`")))?;

        let name = match &self.table_name_prefix {
            Some(prefix) => format!("{prefix}{name}"),
            None => name,
        };

        let table = Table::new(ty, name, fields)?;
        tracing::debug!(ty = table.type_name(), table = table.name(), "built table descriptor");
        Ok(table)
    }

    pub fn build(&self, decls: impl IntoIterator<Item = TableDecl>) -> Result<Schema> {
        let mut schema = Schema::default();
        for decl in decls {
            schema.insert(Arc::new(self.build_table(decl)?));
        }
        Ok(schema)
    }
}
