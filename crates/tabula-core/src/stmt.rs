mod assignment;
pub use assignment::Assignment;

mod delete;
pub use delete::Delete;

mod direction;
pub use direction::Direction;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_arg;
pub use expr_arg::ExprArg;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_field;
pub use expr_field::ExprField;

mod expr_func;
pub use expr_func::ExprFunc;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_not;
pub use expr_not::ExprNot;

mod expr_or;
pub use expr_or::ExprOr;

mod expr_order_by;
pub use expr_order_by::ExprOrderBy;

mod expr_stmt;
pub use expr_stmt::ExprStmt;

mod func_count;
pub use func_count::FuncCount;

mod insert;
pub use insert::Insert;

mod join;
pub use join::{Join, JoinKind};

mod op_binary;
pub use op_binary::BinaryOp;

mod select;
pub use select::Select;

mod table_ref;
pub use table_ref::TableRef;

mod ty;
pub use ty::Type;

mod update;
pub use update::Update;

mod value;
pub use value::Value;

pub mod visit_mut;
pub use visit_mut::{Node, VisitMut};

/// A complete SQL statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Delete(Delete),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    /// Shifts every positional parameter in the statement by `step`.
    pub fn inc_order(&mut self, step: usize) {
        visit_mut::inc_order(self, step);
    }

    pub fn is_select(&self) -> bool {
        matches!(self, Statement::Select(_))
    }

    /// Returns `true` if the statement is a `DELETE` without a filter, which
    /// removes every row of its table.
    pub fn is_unfiltered_delete(&self) -> bool {
        matches!(self, Statement::Delete(delete) if delete.is_unfiltered())
    }
}
