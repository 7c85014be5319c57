use crate::ModelSchema;

/// A struct mapped to a table.
///
/// ```ignore
/// impl Model for User {
///     fn schema() -> ModelSchema<Self> {
///         ModelSchema::new("users")
///             .field(Binding::new("id", |u: &User| &u.id, |u| &mut u.id).column("id").primary_key())
///             .field(Binding::new("name", |u: &User| &u.name, |u| &mut u.name).column("name"))
///     }
/// }
/// ```
pub trait Model: Sized + 'static {
    /// Declares the table and the field mapping. Called once, when the model
    /// is registered.
    fn schema() -> ModelSchema<Self>;

    /// Name used to reference the model's table in statements.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}
