use tabula_core::{Result, Schema};

/// Name resolution used while rendering.
///
/// Table references carry the name of the mapped type; field references
/// carry the source field name. The resolver maps both to database names.
pub trait Resolve {
    fn table_name(&self, ty: &str) -> Result<String>;

    fn column_name(&self, ty: &str, field: &str) -> Result<String>;
}

impl Resolve for Schema {
    fn table_name(&self, ty: &str) -> Result<String> {
        Schema::table_name(self, ty).map(str::to_string)
    }

    fn column_name(&self, ty: &str, field: &str) -> Result<String> {
        Schema::column_name(self, ty, field).map(str::to_string)
    }
}

impl<R: Resolve + ?Sized> Resolve for &R {
    fn table_name(&self, ty: &str) -> Result<String> {
        (**self).table_name(ty)
    }

    fn column_name(&self, ty: &str, field: &str) -> Result<String> {
        (**self).column_name(ty, field)
    }
}
