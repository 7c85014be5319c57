use super::{Comma, Formatter, Scope, ToSql};

use tabula_core::{
    stmt::{self, Direction},
    Error, Result,
};

impl ToSql for &stmt::Expr {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        use stmt::Expr::*;

        match self {
            And(expr) => {
                fmt!(f, "(" expr.lhs ") and (" expr.rhs ")");
            }
            Arg(expr) => {
                fmt!(f, expr);
            }
            BinaryOp(expr) => {
                let op = expr.op.to_string();
                fmt!(f, expr.lhs op.as_str() expr.rhs);
            }
            Bracket(expr) => {
                fmt!(f, "(" expr ")");
            }
            Count(func) => match &func.arg {
                None => fmt!(f, "COUNT(*)"),
                Some(arg) => fmt!(f, "COUNT(" arg ")"),
            },
            Field(expr) => {
                fmt!(f, expr);
            }
            Func(func) => {
                fmt!(f, func.name.as_str() "(" Comma(&func.args) ")");
            }
            IsNull(expr) => {
                if expr.negate {
                    fmt!(f, expr.expr " IS NOT NULL");
                } else {
                    fmt!(f, expr.expr " IS NULL");
                }
            }
            Not(expr) => {
                fmt!(f, "not (" expr.expr ")");
            }
            Or(expr) => {
                fmt!(f, "(" expr.lhs ") or (" expr.rhs ")");
            }
            OrderBy(expr) => {
                let direction = match expr.direction {
                    Direction::Asc => " ASC",
                    Direction::Desc => " DESC",
                };
                fmt!(f, expr.expr direction);
            }
            Snippet(sql) => {
                fmt!(f, sql);
            }
            Stmt(expr) => {
                fmt!(f, "(" expr.stmt ")");
            }
            Table(table) => {
                fmt!(f, table);
            }
            Value(value) => {
                fmt!(f, value);
            }
        }

        Ok(())
    }
}

impl ToSql for &stmt::TableRef {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let resolver = f.serializer.resolver;
        let name = self.resolve_name(|ty| resolver.table_name(ty))?;

        fmt!(f, name);

        if let Some(alias) = self.alias_name() {
            fmt!(f, " AS " alias);
        }

        Ok(())
    }
}

impl ToSql for &stmt::ExprField {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let Some(table) = &self.table else {
            return Err(Error::invalid_statement(format!(
                "field `{}` is not bound to a table",
                self.name
            )));
        };

        let resolver = f.serializer.resolver;
        let column = self.resolve_column(|name| resolver.column_name(table.type_name(), name))?;

        if f.scope == Scope::Select {
            let qualifier = match table.alias_name() {
                Some(alias) => alias,
                None => table.resolve_name(|ty| resolver.table_name(ty))?,
            };
            fmt!(f, qualifier "." column);
        } else {
            fmt!(f, column);
        }

        Ok(())
    }
}
