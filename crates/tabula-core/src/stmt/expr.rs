use super::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND two expressions
    And(ExprAnd),

    /// A positional statement parameter
    Arg(ExprArg),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// Parenthesized expression
    Bracket(Box<Expr>),

    /// The `COUNT` aggregate
    Count(FuncCount),

    /// References a field of a mapped table
    Field(ExprField),

    /// Function call
    Func(ExprFunc),

    /// Whether an expression is (or is not) null. This is different from a
    /// binary expression because of how databases treat null comparisons.
    IsNull(ExprIsNull),

    /// Negates a boolean expression
    Not(ExprNot),

    /// OR two expressions
    Or(ExprOr),

    /// An `ORDER BY` item with a direction
    OrderBy(ExprOrderBy),

    /// Raw SQL, rendered verbatim
    Snippet(String),

    /// Evaluate a sub-statement
    Stmt(ExprStmt),

    /// References a mapped table
    Table(TableRef),

    /// Evaluates to a constant value
    Value(Value),
}

impl Expr {
    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    /// A text literal.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Value(Value::String(value.into()))
    }

    /// An integer literal.
    pub fn integer(value: i64) -> Self {
        Self::Value(Value::I64(value))
    }

    /// A timestamp literal.
    pub fn timestamp(value: jiff::Timestamp) -> Self {
        Self::Value(Value::Timestamp(value))
    }

    pub fn bracket(expr: impl Into<Self>) -> Self {
        Self::Bracket(Box::new(expr.into()))
    }

    /// Raw SQL text, rendered as-is.
    pub fn snippet(sql: impl Into<String>) -> Self {
        Self::Snippet(sql.into())
    }

    /// Is a value that evaluates to null
    pub fn is_value_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    /// Returns true if the expression is a constant value.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(..))
    }

    pub fn is_stmt(&self) -> bool {
        matches!(self, Self::Stmt(..))
    }

    pub fn is_binary_op(&self) -> bool {
        matches!(self, Self::BinaryOp(..))
    }

    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::Value(Value::Null))
    }
}

impl Default for Expr {
    fn default() -> Self {
        Self::Value(Value::default())
    }
}

// === Conversions ===

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<jiff::Timestamp> for Expr {
    fn from(value: jiff::Timestamp) -> Self {
        Self::Value(Value::from(value))
    }
}
