use crate::{Assign, Binding};

use indexmap::IndexMap;
use tabula_core::{
    driver::Row,
    err,
    schema::{FieldSet, Table},
    Extractor, Result,
};

/// Reads result rows into a model, for one partition of its fields.
///
/// The extractor for every field is resolved when the mapper is compiled.
/// Columns of a row that the partition does not map are skipped.
#[derive(Debug)]
pub struct RowMapper<M> {
    /// Slots keyed by column name
    slots: IndexMap<String, Slot<M>>,
}

#[derive(Debug)]
struct Slot<M> {
    column: String,
    extractor: Extractor,
    binding: Binding<M>,
}

impl<M> RowMapper<M> {
    pub(crate) fn compile(
        table: &Table,
        fields: &FieldSet,
        bindings: &IndexMap<String, Binding<M>>,
    ) -> Result<RowMapper<M>> {
        let mut slots = IndexMap::with_capacity(fields.len());

        for field in fields {
            let binding = bindings.get(field.name()).ok_or_else(|| {
                tabula_core::Error::unresolved_field(table.type_name(), field.name())
            })?;

            slots.insert(
                field.column().to_string(),
                Slot {
                    column: field.column().to_string(),
                    extractor: field.extractor(),
                    binding: binding.clone(),
                },
            );
        }

        Ok(RowMapper { slots })
    }

    /// Column names the mapper reads, in declaration order.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Maps `row` onto `dest`.
    ///
    /// Every mapped column is extracted and converted to its field type
    /// before any field is written, so a failure leaves `dest` untouched.
    pub fn apply(&self, row: &Row, dest: &mut M) -> Result<()> {
        let mut staged: Vec<Assign<M>> = Vec::with_capacity(row.len());

        for (column, raw) in row.iter() {
            let Some(slot) = self.slots.get(column) else {
                continue;
            };

            let assign = (slot.extractor)(raw.clone())
                .and_then(|value| slot.binding.decode(value))
                .map_err(|e| e.context(err!("column `{}`", slot.column)))?;
            staged.push(assign);
        }

        for assign in staged {
            assign(dest);
        }

        Ok(())
    }

    /// Builds a new model from `row`.
    pub fn load(&self, row: &Row) -> Result<M>
    where
        M: Default,
    {
        let mut dest = M::default();
        self.apply(row, &mut dest)?;
        Ok(dest)
    }

    /// Builds one model per row.
    pub fn load_all<'a>(&self, rows: impl IntoIterator<Item = &'a Row>) -> Result<Vec<M>>
    where
        M: Default,
    {
        rows.into_iter().map(|row| self.load(row)).collect()
    }
}
