use super::{Field, FieldDecl, FieldSet};
use crate::{
    stmt::{Delete, Expr, ExprField, Insert, Select, Statement, TableRef, Update},
    Error, Result,
};

/// Declares a mapped type: its name, its table and its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDecl {
    /// Name of the mapped type
    pub ty: String,

    /// Table name, before any configured prefix is applied
    pub name: String,

    /// Fields in declaration order
    pub fields: Vec<FieldDecl>,
}

impl TableDecl {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> TableDecl {
        TableDecl {
            ty: ty.into(),
            name: name.into(),
            fields: vec![],
        }
    }

    pub fn field(mut self, field: FieldDecl) -> TableDecl {
        self.fields.push(field);
        self
    }
}

/// Describes a mapped type and the table that stores it.
///
/// Fields are partitioned five ways. Every partition keeps declaration
/// order, which fixes column order and parameter numbering in the derived
/// statements.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    ty: String,
    fields: FieldSet,
    primary_key: FieldSet,
    non_primary_key: FieldSet,
    db_generated: FieldSet,
    non_db_generated: FieldSet,
}

/// Expression nodes for a table, ready to compose into statements.
#[derive(Debug, Clone)]
pub struct Extracted {
    pub table: TableRef,

    /// Primary key fields
    pub primary_key: Vec<Expr>,

    /// Every other field
    pub other: Vec<Expr>,

    /// Conjunction of `key=$N` for every primary key, numbered from 1
    pub condition: Expr,
}

/// A derived statement and the source fields whose values fill its
/// parameters, in parameter order.
#[derive(Debug, Clone, PartialEq)]
pub struct Derived {
    pub statement: Statement,
    pub params: Vec<String>,
}

impl Table {
    pub(super) fn new(ty: String, name: String, fields: Vec<Field>) -> Result<Table> {
        let mut all = FieldSet::default();
        for field in fields {
            let (field_name, column) = (field.name().to_string(), field.column().to_string());
            if !all.push(field) {
                return Err(Error::invalid_schema(format!(
                    "`{ty}` declares field `{field_name}` or column `{column}` more than once"
                )));
            }
        }

        let primary_key = FieldSet::from_fields(all.iter().filter(|f| f.is_primary_key()));
        if primary_key.is_empty() {
            return Err(Error::invalid_schema(format!(
                "`{ty}` does not declare a primary key"
            )));
        }

        Ok(Table {
            non_primary_key: FieldSet::from_fields(all.iter().filter(|f| !f.is_primary_key())),
            db_generated: FieldSet::from_fields(all.iter().filter(|f| f.is_db_generated())),
            non_db_generated: FieldSet::from_fields(all.iter().filter(|f| !f.is_db_generated())),
            primary_key,
            fields: all,
            name,
            ty,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the mapped type
    pub fn type_name(&self) -> &str {
        &self.ty
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn primary_key(&self) -> &FieldSet {
        &self.primary_key
    }

    pub fn non_primary_key(&self) -> &FieldSet {
        &self.non_primary_key
    }

    pub fn db_generated(&self) -> &FieldSet {
        &self.db_generated
    }

    pub fn non_db_generated(&self) -> &FieldSet {
        &self.non_db_generated
    }

    /// A reference to this table with its name already resolved.
    pub fn table_ref(&self) -> TableRef {
        TableRef::with_name(&self.ty, &self.name)
    }

    /// A reference to `field` with its column already resolved.
    pub fn field_expr(&self, field: &Field) -> Expr {
        ExprField::with_column(self.table_ref(), field.name(), field.column()).into()
    }

    fn field_exprs(&self, fields: &FieldSet) -> Vec<Expr> {
        fields.iter().map(|field| self.field_expr(field)).collect()
    }

    /// The primary key condition, `$1` for the first key.
    ///
    /// Keys `[a, b, c]` give `(c=$3) and ((b=$2) and (a=$1))`.
    pub fn pk_condition(&self) -> Expr {
        let eqs = self
            .primary_key
            .iter()
            .enumerate()
            .map(|(i, field)| Expr::eq(self.field_expr(field), Expr::arg(i + 1)));

        // Construction rejects tables without a primary key
        Expr::and_chain(eqs).unwrap_or_default()
    }

    pub fn extract(&self) -> Extracted {
        Extracted {
            table: self.table_ref(),
            primary_key: self.field_exprs(&self.primary_key),
            other: self.field_exprs(&self.non_primary_key),
            condition: self.pk_condition(),
        }
    }

    fn pk_params(&self) -> Vec<String> {
        self.primary_key.names().map(str::to_string).collect()
    }

    /// Selects the non-key fields of the row with the given primary key.
    pub fn fetch(&self) -> Derived {
        let Extracted {
            table,
            other,
            condition,
            ..
        } = self.extract();

        Derived {
            statement: Select::new(other).from(table).filter(condition).into(),
            params: self.pk_params(),
        }
    }

    /// Inserts every field the database does not generate and returns the
    /// generated ones.
    pub fn merge_insert(&self) -> Derived {
        let insert = Insert::new(self.table_ref(), self.field_exprs(&self.non_db_generated))
            .returning(self.field_exprs(&self.db_generated));

        Derived {
            statement: insert.into(),
            params: self.non_db_generated.names().map(str::to_string).collect(),
        }
    }

    /// Inserts every field, including the generated ones.
    pub fn all_insert(&self) -> Derived {
        Derived {
            statement: Insert::new(self.table_ref(), self.field_exprs(&self.fields)).into(),
            params: self.fields.names().map(str::to_string).collect(),
        }
    }

    /// Updates the named fields of the row with the given primary key.
    ///
    /// The assignments take `$1..$k`; the key condition continues at `$k+1`.
    /// Each field may be named once.
    pub fn update(&self, names: &[&str]) -> Result<Derived> {
        if names.is_empty() {
            return Err(Error::invalid_statement(format!(
                "update of `{}` names no fields",
                self.ty
            )));
        }

        let mut update = Update::new(self.table_ref());
        let mut params = Vec::with_capacity(names.len() + self.primary_key.len());

        for (i, name) in names.iter().enumerate() {
            let field = self
                .fields
                .get(name)
                .ok_or_else(|| Error::unresolved_field(&self.ty, *name))?;
            if names[..i].contains(name) {
                return Err(Error::invalid_statement(format!(
                    "update of `{}` sets field `{name}` more than once",
                    self.ty
                )));
            }
            update = update.set(self.field_expr(field), Expr::arg(i + 1));
            params.push(field.name().to_string());
        }

        let mut condition = self.pk_condition();
        condition.inc_order(names.len());
        params.extend(self.pk_params());

        Ok(Derived {
            statement: update.filter(condition).into(),
            params,
        })
    }

    /// Updates every non-key field.
    pub fn update_all(&self) -> Result<Derived> {
        let names: Vec<&str> = self.non_primary_key.names().collect();
        self.update(&names)
    }

    /// Deletes the row with the given primary key.
    pub fn delete(&self) -> Derived {
        Derived {
            statement: Delete::new(self.table_ref())
                .filter(self.pk_condition())
                .into(),
            params: self.pk_params(),
        }
    }
}
