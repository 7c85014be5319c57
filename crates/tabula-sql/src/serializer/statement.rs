use super::{Comma, Formatter, Scope, ToSql};

use tabula_core::{
    stmt::{self, JoinKind},
    Error, Result,
};

impl ToSql for &stmt::Statement {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        match self {
            stmt::Statement::Delete(stmt) => stmt.to_sql(f),
            stmt::Statement::Insert(stmt) => stmt.to_sql(f),
            stmt::Statement::Select(stmt) => stmt.to_sql(f),
            stmt::Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        f.scoped(Scope::Select, |f| {
            fmt!(f, "SELECT ");

            if self.projection.is_empty() {
                fmt!(f, "*");
            } else {
                fmt!(f, Comma(&self.projection));
            }

            if let Some(from) = &self.from {
                fmt!(f, " FROM " from);
            }

            for join in &self.joins {
                fmt!(f, " " join);
            }

            if let Some(filter) = &self.filter {
                fmt!(f, " WHERE " filter);
            }

            if !self.group_by.is_empty() {
                fmt!(f, " GROUP BY " Comma(&self.group_by));
            }

            if let Some(having) = &self.having {
                fmt!(f, " HAVING " having);
            }

            if !self.order_by.is_empty() {
                fmt!(f, " ORDER BY " Comma(&self.order_by));
            }

            if let Some(limit) = self.limit {
                fmt!(f, " LIMIT " limit);
            }

            if let Some(offset) = self.offset {
                fmt!(f, " OFFSET " offset);
            }

            Ok(())
        })
    }
}

impl ToSql for &stmt::Join {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let keyword = match self.kind {
            JoinKind::Inner => "JOIN ",
            JoinKind::Left => "LEFT JOIN ",
        };

        fmt!(f, keyword self.table " ON " self.on);
        Ok(())
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        f.scoped(Scope::Insert, |f| {
            fmt!(f, "INSERT INTO " self.target " (" Comma(&self.columns) ") VALUES (");

            if self.values.is_empty() {
                let params = self.synthesized_values();
                fmt!(f, Comma(&params));
            } else {
                fmt!(f, Comma(&self.values));
            }

            fmt!(f, ")");

            if !self.returning.is_empty() {
                fmt!(f, " RETURNING " Comma(&self.returning));
            }

            Ok(())
        })
    }
}

impl ToSql for &stmt::Update {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        if self.assignments.is_empty() {
            return Err(Error::invalid_statement(format!(
                "UPDATE of `{}` has an empty SET list",
                self.target.type_name()
            )));
        }

        f.scoped(Scope::Update, |f| {
            fmt!(f, "UPDATE " self.target " SET " Comma(&self.assignments));

            if let Some(filter) = &self.filter {
                fmt!(f, " WHERE " filter);
            }

            Ok(())
        })
    }
}

impl ToSql for &stmt::Assignment {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        fmt!(f, self.target "=" self.value);
        Ok(())
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        f.scoped(Scope::Delete, |f| {
            fmt!(f, "DELETE FROM " self.from);

            match &self.filter {
                Some(filter) => fmt!(f, " WHERE " filter),
                None => tracing::warn!(
                    ty = self.from.type_name(),
                    "rendering DELETE without a filter; every row of the table will be removed"
                ),
            }

            Ok(())
        })
    }
}
