//! Types exchanged with the query-execution collaborator.

use crate::{bail, stmt::Value, Error, Result};

/// One fetched row: the result column names and the raw value of each.
///
/// Columns and values always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<String>,
    values: Vec<Value>,
}

impl Row {
    pub fn new(columns: Vec<String>, values: Vec<Value>) -> Result<Row> {
        if columns.len() != values.len() {
            bail!(
                "row has {} columns but {} values",
                columns.len(),
                values.len()
            );
        }
        Ok(Row { columns, values })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the raw value of the named column.
    pub fn get(&self, column: &str) -> Option<&Value> {
        let index = self.columns.iter().position(|name| name == column)?;
        self.values.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let (columns, values) = iter.into_iter().unzip();
        Row { columns, values }
    }
}

/// Number of rows affected by an `UPDATE` or `DELETE`.
///
/// The mapper does not enforce cardinality; callers that expect exactly one
/// row check it with [`RowCount::ensure_single`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCount(pub u64);

impl RowCount {
    pub fn get(self) -> u64 {
        self.0
    }

    pub fn is_single(self) -> bool {
        self.0 == 1
    }

    pub fn ensure_single(self) -> Result<()> {
        if self.is_single() {
            Ok(())
        } else {
            Err(Error::invalid_record_count(format!(
                "expected 1 row affected, got {}",
                self.0
            )))
        }
    }
}

impl From<u64> for RowCount {
    fn from(value: u64) -> Self {
        RowCount(value)
    }
}
