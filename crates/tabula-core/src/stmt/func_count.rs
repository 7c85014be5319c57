use super::Expr;

/// The `COUNT` aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncCount {
    /// What to count. `None` counts rows (`COUNT(*)`).
    pub arg: Option<Box<Expr>>,
}

impl Expr {
    pub fn count_star() -> Self {
        FuncCount { arg: None }.into()
    }

    pub fn count(arg: impl Into<Self>) -> Self {
        FuncCount {
            arg: Some(Box::new(arg.into())),
        }
        .into()
    }
}
