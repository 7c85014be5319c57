use super::{Flavor, Formatter, ToSql};
use tabula_core::{stmt::ExprArg, Error, Result};

/// A positional parameter, rendered `$N` for PostgreSQL and `?N` for SQLite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl ToSql for Placeholder {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        use std::fmt::Write;

        if self.0 == 0 {
            return Err(Error::invalid_statement("parameter positions start at 1"));
        }

        let ret = match f.serializer.flavor {
            Flavor::Postgresql => write!(f.dst, "${}", self.0),
            Flavor::Sqlite => write!(f.dst, "?{}", self.0),
        };
        ret.map_err(|err| tabula_core::err!("{err}"))
    }
}

impl ToSql for &ExprArg {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        Placeholder(self.position).to_sql(f)
    }
}
