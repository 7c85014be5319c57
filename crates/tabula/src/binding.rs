use crate::{Model, Primitive};

use std::sync::Arc;
use tabula_core::{
    schema::{FieldDecl, TableDecl},
    stmt::Value,
    Result,
};

type Store<M> = Arc<dyn Fn(&M, bool) -> Result<Value> + Send + Sync>;
type Decode<M> = Arc<dyn Fn(Value, bool) -> Result<Assign<M>> + Send + Sync>;

/// A decoded field value, ready to be written into a model.
pub type Assign<M> = Box<dyn FnOnce(&mut M)>;

/// Binds a struct field to its column declaration.
///
/// The accessors are monomorphized for the field type when the binding is
/// created; the JSON flag picks between plain conversion and JSON encoding.
pub struct Binding<M> {
    decl: FieldDecl,
    store: Store<M>,
    decode: Decode<M>,
}

impl<M: 'static> Binding<M> {
    pub fn new<T: Primitive + 'static>(
        name: &str,
        get: fn(&M) -> &T,
        get_mut: fn(&mut M) -> &mut T,
    ) -> Binding<M> {
        let mut decl = FieldDecl::new(name, T::TYPE);
        decl.nullable = T::NULLABLE;

        Binding {
            decl,
            store: Arc::new(move |model: &M, json: bool| {
                if json {
                    get(model).to_json()
                } else {
                    get(model).to_value()
                }
            }),
            decode: Arc::new(move |value: Value, json: bool| -> Result<Assign<M>> {
                let field = if json {
                    T::from_json(value)?
                } else {
                    T::load(value)?
                };
                Ok(Box::new(move |model: &mut M| *get_mut(model) = field))
            }),
        }
    }
}

impl<M> Binding<M> {
    pub fn column(mut self, column: &str) -> Self {
        self.decl.column = Some(column.to_string());
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.decl.primary_key = true;
        self
    }

    pub fn db_generated(mut self) -> Self {
        self.decl.db_generated = true;
        self
    }

    pub fn json(mut self) -> Self {
        self.decl.json = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.decl.name
    }

    pub fn decl(&self) -> &FieldDecl {
        &self.decl
    }

    /// Reads the field as a statement argument. JSON fields are encoded to
    /// bytes.
    pub fn store(&self, model: &M) -> Result<Value> {
        (self.store)(model, self.decl.json)
    }

    /// Converts an extracted value to the field type without touching any
    /// model. The returned closure performs the write.
    pub fn decode(&self, value: Value) -> Result<Assign<M>> {
        (self.decode)(value, self.decl.json)
    }
}

impl<M> Clone for Binding<M> {
    fn clone(&self) -> Self {
        Binding {
            decl: self.decl.clone(),
            store: self.store.clone(),
            decode: self.decode.clone(),
        }
    }
}

impl<M> std::fmt::Debug for Binding<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding").field("decl", &self.decl).finish()
    }
}

/// The declared mapping of a model: its table name and field bindings, in
/// declaration order.
#[derive(Debug)]
pub struct ModelSchema<M> {
    table: String,
    fields: Vec<Binding<M>>,
}

impl<M: Model> ModelSchema<M> {
    pub fn new(table: &str) -> Self {
        ModelSchema {
            table: table.to_string(),
            fields: vec![],
        }
    }

    pub fn field(mut self, binding: Binding<M>) -> Self {
        self.fields.push(binding);
        self
    }

    pub fn fields(&self) -> &[Binding<M>] {
        &self.fields
    }

    pub(crate) fn into_parts(self) -> (TableDecl, Vec<Binding<M>>) {
        let decl = TableDecl {
            ty: M::type_name().to_string(),
            name: self.table,
            fields: self.fields.iter().map(|binding| binding.decl.clone()).collect(),
        };
        (decl, self.fields)
    }
}
