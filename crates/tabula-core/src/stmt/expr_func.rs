use super::{Expr, FuncCount};

/// A call to a SQL function by name, rendered `name(arg, ...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprFunc {
    pub name: String,
    pub args: Vec<Expr>,
}

impl Expr {
    pub fn func(name: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Self {
        ExprFunc {
            name: name.into(),
            args: args.into_iter().collect(),
        }
        .into()
    }

    /// `nullif(expr, value)`
    pub fn null_if(expr: impl Into<Self>, value: impl Into<Self>) -> Self {
        Expr::func("nullif", [expr.into(), value.into()])
    }

    /// `coalesce(expr, fallback)`
    pub fn coalesce(expr: impl Into<Self>, fallback: impl Into<Self>) -> Self {
        Expr::func("coalesce", [expr.into(), fallback.into()])
    }
}

impl From<ExprFunc> for Expr {
    fn from(value: ExprFunc) -> Self {
        Self::Func(value)
    }
}

impl From<FuncCount> for Expr {
    fn from(value: FuncCount) -> Self {
        Self::Count(value)
    }
}
