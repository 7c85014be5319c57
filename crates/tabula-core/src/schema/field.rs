use crate::{
    extract::{self, Extractor},
    stmt::Type,
    Error, Result,
};

/// Declares how a struct field maps to a column.
///
/// The column name is mandatory. Primary key, database-generated and JSON
/// encoding are off unless declared.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    /// Source (struct) field name
    pub name: String,

    /// Column name
    pub column: Option<String>,

    /// Declared type of the field, with any `Option` removed
    pub ty: Type,

    /// True when the field is declared as `Option<T>`
    pub nullable: bool,

    pub primary_key: bool,

    /// The column value is assigned by the database
    pub db_generated: bool,

    /// Encode the value as JSON on write and decode it on read
    pub json: bool,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, ty: Type) -> FieldDecl {
        FieldDecl {
            name: name.into(),
            column: None,
            ty,
            nullable: false,
            primary_key: false,
            db_generated: false,
            json: false,
        }
    }

    pub fn column(mut self, column: impl Into<String>) -> FieldDecl {
        self.column = Some(column.into());
        self
    }

    pub fn nullable(mut self) -> FieldDecl {
        self.nullable = true;
        self
    }

    pub fn primary_key(mut self) -> FieldDecl {
        self.primary_key = true;
        self
    }

    pub fn db_generated(mut self) -> FieldDecl {
        self.db_generated = true;
        self
    }

    pub fn json(mut self) -> FieldDecl {
        self.json = true;
        self
    }
}

/// Describes a struct field mapped to a column. Immutable once built.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    column: String,
    primary_key: bool,
    db_generated: bool,
    not_null: bool,
    json: bool,
    ty: Type,
    extractor: Extractor,
}

impl Field {
    /// Builds the descriptor for a declared field and selects its extractor.
    pub fn from_decl(decl: FieldDecl) -> Result<Field> {
        let FieldDecl {
            name,
            column,
            ty,
            nullable,
            primary_key,
            db_generated,
            json,
        } = decl;

        let column = match column {
            Some(column) if !column.is_empty() => column,
            _ => {
                return Err(Error::invalid_schema(format!(
                    "field `{name}` does not declare a column name"
                )))
            }
        };

        if ty.requires_json() && !json {
            return Err(Error::invalid_schema(format!(
                "field `{name}` of type {ty:?} must be JSON encoded"
            )));
        }

        let not_null = !nullable && !ty.is_dynamic();
        let extractor = extract::select_extractor(&ty, !not_null, json)
            .map_err(|err| err.context(crate::err!("field `{name}`")))?;

        Ok(Field {
            name,
            column,
            primary_key,
            db_generated,
            not_null,
            json,
            ty,
            extractor,
        })
    }

    /// Source (struct) field name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    pub fn is_db_generated(&self) -> bool {
        self.db_generated
    }

    pub fn is_not_null(&self) -> bool {
        self.not_null
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn extractor(&self) -> Extractor {
        self.extractor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stmt::Value;

    #[test]
    fn option_is_nullable() {
        let field =
            Field::from_decl(FieldDecl::new("nickname", Type::String).column("u_nick").nullable())
                .unwrap();
        assert!(!field.is_not_null());
        assert_eq!((field.extractor())(Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn plain_field_is_not_null() {
        let field = Field::from_decl(FieldDecl::new("id", Type::I64).column("u_id")).unwrap();
        assert!(field.is_not_null());
        assert!(!field.is_primary_key());
        assert!(!field.is_db_generated());
    }

    #[test]
    fn dynamic_json_is_nullable() {
        let field =
            Field::from_decl(FieldDecl::new("extra", Type::Any).column("u_extra").json()).unwrap();
        assert!(!field.is_not_null());
    }

    #[test]
    fn missing_column_fails() {
        let err = Field::from_decl(FieldDecl::new("id", Type::I64)).unwrap_err();
        assert!(err.is_invalid_schema());

        let err = Field::from_decl(FieldDecl::new("id", Type::I64).column("")).unwrap_err();
        assert!(err.is_invalid_schema());
    }

    #[test]
    fn map_without_json_fails() {
        let err =
            Field::from_decl(FieldDecl::new("tags", Type::Map).column("u_tags")).unwrap_err();
        assert!(err.is_invalid_schema());
    }
}
