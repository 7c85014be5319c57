use super::Expr;

/// Conjunction of two expressions, rendered `(lhs) and (rhs)`.
///
/// The node is strictly binary so the parenthesization of a chain is exactly
/// the order in which it was built.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprAnd {
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

impl Expr {
    pub fn and(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        ExprAnd {
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
        }
        .into()
    }

    /// Folds the operands so that each later operand wraps the chain built so
    /// far: `[a, b, c]` becomes `and(c, and(b, a))`.
    ///
    /// Returns `None` when there are no operands.
    pub fn and_chain(operands: impl IntoIterator<Item = Expr>) -> Option<Self> {
        let mut operands = operands.into_iter();
        let first = operands.next()?;
        Some(operands.fold(first, |cond, operand| Expr::and(operand, cond)))
    }
}

impl From<ExprAnd> for Expr {
    fn from(value: ExprAnd) -> Self {
        Self::And(value)
    }
}
