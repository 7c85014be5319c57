mod binding;
pub use binding::{Assign, Binding, ModelSchema};

mod model;
pub use model::Model;

mod primitive;
pub use primitive::{Json, Primitive};

mod registry;
pub use registry::{Registry, RegistryBuilder};

mod row_mapper;
pub use row_mapper::RowMapper;

mod table;
pub use table::ModelTable;

pub use tabula_core::{
    driver::{Row, RowCount},
    schema::Derived,
    stmt, Error, Result,
};
pub use tabula_sql::{Resolve, Serializer};
