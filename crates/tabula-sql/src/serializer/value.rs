use super::{Flavor, Formatter, ToSql};

use tabula_core::{stmt, Error, Result};

impl ToSql for &stmt::Value {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        use stmt::Value::*;

        match self {
            Bool(true) => fmt!(f, "TRUE"),
            Bool(false) => fmt!(f, "FALSE"),
            Null => fmt!(f, "NULL"),
            I64(v) => f.dst.push_str(&v.to_string()),
            U64(v) => f.dst.push_str(&v.to_string()),
            F64(v) if !v.is_finite() => {
                return Err(Error::invalid_statement(format!(
                    "float `{v}` has no literal form; pass it as a parameter"
                )))
            }
            F64(v) => f.dst.push_str(&v.to_string()),
            String(v) => fmt!(f, Quoted(v)),
            Timestamp(v) => {
                let text = v.to_string();
                fmt!(f, Quoted(&text));
                if matches!(f.serializer.flavor, Flavor::Postgresql) {
                    fmt!(f, "::timestamp");
                }
            }
            Bytes(_) | Json(_) => {
                return Err(Error::invalid_statement(format!(
                    "{} values cannot be written inline; pass them as parameters",
                    self.kind_name()
                )))
            }
        }

        Ok(())
    }
}

/// A single-quoted string literal
struct Quoted<'a>(&'a str);

impl ToSql for Quoted<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        f.dst.push('\'');
        for ch in self.0.chars() {
            if ch == '\'' {
                f.dst.push('\'');
            }
            f.dst.push(ch);
        }
        f.dst.push('\'');
        Ok(())
    }
}
