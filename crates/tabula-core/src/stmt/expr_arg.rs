use super::{visit_mut, Expr};

/// A positional statement parameter.
///
/// Positions are 1-based and render as `$1`, `$2`, ... (or `?1`, ... for
/// SQLite).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct ExprArg {
    pub position: usize,
}

impl Expr {
    pub fn arg(expr_arg: impl Into<ExprArg>) -> Self {
        Self::Arg(expr_arg.into())
    }

    pub fn is_arg(&self) -> bool {
        matches!(self, Self::Arg(_))
    }

    /// Adds `step` to the position of every parameter in the expression.
    ///
    /// Used when a condition built on its own is composed into a statement
    /// whose earlier clauses already consume the first positions.
    pub fn inc_order(&mut self, step: usize) {
        visit_mut::inc_order(self, step);
    }
}

impl ExprArg {
    pub fn new(position: usize) -> ExprArg {
        ExprArg { position }
    }
}

impl From<usize> for ExprArg {
    fn from(value: usize) -> Self {
        Self { position: value }
    }
}

impl From<ExprArg> for Expr {
    fn from(value: ExprArg) -> Self {
        Self::Arg(value)
    }
}
