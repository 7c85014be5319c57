use crate::{Binding, Model, RowMapper};

use indexmap::IndexMap;
use std::sync::Arc;
use tabula_core::{
    schema::{Builder, Derived, Table},
    stmt::{Expr, TableRef, Value},
    Error, Result,
};

/// A registered model: its table descriptor, field bindings and the row
/// mappers compiled for each partition.
#[derive(Debug)]
pub struct ModelTable<M> {
    table: Arc<Table>,
    bindings: IndexMap<String, Binding<M>>,
    all: RowMapper<M>,
    primary_key: RowMapper<M>,
    non_primary_key: RowMapper<M>,
    db_generated: RowMapper<M>,
}

impl<M: Model> ModelTable<M> {
    pub(crate) fn build(builder: &Builder) -> Result<ModelTable<M>> {
        let (decl, bindings) = M::schema().into_parts();
        let table = Arc::new(builder.build_table(decl)?);

        let bindings: IndexMap<_, _> = bindings
            .into_iter()
            .map(|binding| (binding.name().to_string(), binding))
            .collect();

        Ok(ModelTable {
            all: RowMapper::compile(&table, table.fields(), &bindings)?,
            primary_key: RowMapper::compile(&table, table.primary_key(), &bindings)?,
            non_primary_key: RowMapper::compile(&table, table.non_primary_key(), &bindings)?,
            db_generated: RowMapper::compile(&table, table.db_generated(), &bindings)?,
            bindings,
            table,
        })
    }
}

impl<M> ModelTable<M> {
    pub fn table(&self) -> &Arc<Table> {
        &self.table
    }

    pub fn table_ref(&self) -> TableRef {
        self.table.table_ref()
    }

    /// References a field by source name, with its column resolved.
    pub fn field(&self, name: &str) -> Result<Expr> {
        let field = self
            .table
            .fields()
            .get(name)
            .ok_or_else(|| Error::unresolved_field(self.table.type_name(), name))?;
        Ok(self.table.field_expr(field))
    }

    /// Maps every field.
    pub fn all(&self) -> &RowMapper<M> {
        &self.all
    }

    /// Maps the primary key fields.
    pub fn pk(&self) -> &RowMapper<M> {
        &self.primary_key
    }

    /// Maps the fields outside the primary key, as read by a fetch.
    pub fn npk(&self) -> &RowMapper<M> {
        &self.non_primary_key
    }

    /// Maps the database-generated fields, as returned by a merge insert.
    pub fn returning(&self) -> &RowMapper<M> {
        &self.db_generated
    }

    /// Reads the arguments of `derived` from `model`, aligned with the
    /// statement's parameters.
    pub fn bind(&self, derived: &Derived, model: &M) -> Result<Vec<Value>> {
        derived
            .params
            .iter()
            .map(|name| {
                let binding = self
                    .bindings
                    .get(name)
                    .ok_or_else(|| Error::unresolved_field(self.table.type_name(), name))?;
                binding
                    .store(model)
                    .map_err(|e| e.context(tabula_core::err!("field `{name}`")))
            })
            .collect()
    }
}
