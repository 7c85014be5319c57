#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod flavor;
use flavor::Flavor;

mod params;
pub use params::Placeholder;

mod resolve;
pub use resolve::Resolve;

// Fragment serializers
mod expr;
mod statement;
mod value;

use std::mem;

use tabula_core::{
    stmt::{Expr, Statement},
    Result,
};

/// Serialize a statement to a SQL string
pub struct Serializer<'a> {
    /// Resolves type and field names into table and column names
    resolver: &'a dyn Resolve,

    /// The database flavor handles the differences between SQL dialects.
    flavor: Flavor,
}

/// The statement currently being rendered. Field references are qualified
/// with their table only inside a `SELECT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    None,
    Select,
    Insert,
    Update,
    Delete,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Innermost enclosing statement
    scope: Scope,
}

impl<'a> Serializer<'a> {
    pub fn serialize(&self, stmt: &Statement) -> Result<String> {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            scope: Scope::None,
        };

        stmt.to_sql(&mut fmt)?;

        tracing::debug!(sql = %ret, "serialized statement");
        Ok(ret)
    }

    /// Serialize a standalone expression. Field references render
    /// unqualified.
    pub fn serialize_expr(&self, expr: &Expr) -> Result<String> {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            scope: Scope::None,
        };

        expr.to_sql(&mut fmt)?;
        Ok(ret)
    }

    pub fn is_sqlite(&self) -> bool {
        matches!(self.flavor, Flavor::Sqlite)
    }

    pub fn is_postgresql(&self) -> bool {
        matches!(self.flavor, Flavor::Postgresql)
    }
}

impl Formatter<'_> {
    /// Renders `f` with `scope` as the current scope, restoring the previous
    /// scope afterwards whether or not rendering succeeded.
    fn scoped(&mut self, scope: Scope, f: impl FnOnce(&mut Self) -> Result<()>) -> Result<()> {
        let prev = mem::replace(&mut self.scope, scope);
        let ret = f(self);
        self.scope = prev;
        ret
    }
}
