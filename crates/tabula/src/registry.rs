use crate::{Model, ModelTable};

use std::{
    any::{Any, TypeId},
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};
use tabula_core::{
    schema::{self, Schema},
    Result,
};
use tabula_sql::Resolve;

/// Caches one [`ModelTable`] per model type.
///
/// Registration is guarded by a lock: the first registration of a type
/// builds its descriptor exactly once, even when several threads race.
#[derive(Debug, Default)]
pub struct Registry {
    builder: schema::Builder,
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    models: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,

    /// Every registered table, for name resolution
    schema: Schema,
}

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    builder: schema::Builder,
}

impl RegistryBuilder {
    /// Prefix every table name with `prefix`.
    pub fn table_name_prefix(mut self, prefix: &str) -> Self {
        self.builder.table_name_prefix(prefix);
        self
    }

    pub fn build(self) -> Registry {
        Registry {
            builder: self.builder,
            state: RwLock::default(),
        }
    }
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Returns the table for `M`, registering the model on first use.
    pub fn register<M>(&self) -> Result<Arc<ModelTable<M>>>
    where
        M: Model,
    {
        if let Some(table) = self.get::<M>() {
            return Ok(table);
        }

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        // Another thread may have registered the model while we waited
        if let Some(table) = state.get::<M>() {
            return Ok(table);
        }

        let table = Arc::new(ModelTable::<M>::build(&self.builder)?);
        state.schema.insert(table.table().clone());
        state.models.insert(TypeId::of::<M>(), table.clone());

        tracing::debug!(
            ty = M::type_name(),
            table = table.table().name(),
            "registered model"
        );
        Ok(table)
    }

    /// Returns the table for `M` if the model is registered.
    pub fn get<M>(&self) -> Option<Arc<ModelTable<M>>>
    where
        M: Model,
    {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get::<M>()
    }

    pub fn len(&self) -> usize {
        self.read_state().models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl State {
    fn get<M>(&self) -> Option<Arc<ModelTable<M>>>
    where
        M: Model,
    {
        let table = self.models.get(&TypeId::of::<M>())?.clone();
        table.downcast::<ModelTable<M>>().ok()
    }
}

impl Resolve for Registry {
    fn table_name(&self, ty: &str) -> Result<String> {
        Resolve::table_name(&self.read_state().schema, ty)
    }

    fn column_name(&self, ty: &str, field: &str) -> Result<String> {
        Resolve::column_name(&self.read_state().schema, ty, field)
    }
}
