use super::Field;
use indexmap::IndexMap;

/// An ordered set of fields, addressable by source name or by column name.
///
/// Iteration follows declaration order.
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    by_name: IndexMap<String, Field>,

    /// Column name to index in `by_name`
    by_column: IndexMap<String, usize>,
}

impl FieldSet {
    pub(crate) fn from_fields<'a>(fields: impl IntoIterator<Item = &'a Field>) -> FieldSet {
        let mut set = FieldSet::default();
        for field in fields {
            set.push(field.clone());
        }
        set
    }

    /// Adds a field. Returns `false` without modifying the set when either
    /// name is already taken.
    pub(crate) fn push(&mut self, field: Field) -> bool {
        if self.by_name.contains_key(field.name()) || self.by_column.contains_key(field.column())
        {
            return false;
        }

        self.by_column
            .insert(field.column().to_string(), self.by_name.len());
        self.by_name.insert(field.name().to_string(), field);
        true
    }

    /// Looks up a field by source name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.by_name.get(name)
    }

    /// Looks up a field by column name.
    pub fn get_by_column(&self, column: &str) -> Option<&Field> {
        let index = *self.by_column.get(column)?;
        self.by_name.get_index(index).map(|(_, field)| field)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Field> {
        self.by_name.values()
    }

    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    pub fn columns(&self) -> impl ExactSizeIterator<Item = &str> {
        self.by_column.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a Field;
    type IntoIter = indexmap::map::Values<'a, String, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.by_name.values()
    }
}
