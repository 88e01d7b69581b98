use crate::lexer::tokens::{LiteralValue, Token};

use super::ast::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr {
    pub name: Token,
    pub value: Expr,
}

/// Covers both arithmetic and comparison operators; `operator` keeps the
/// original token for line information.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Expr,
    pub operator: Token,
    pub right: Expr,
}

/// `paren` is the closing parenthesis, kept so runtime errors can point at
/// the call site.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Expr,
    pub paren: Token,
    pub arguments: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupingExpr {
    pub expression: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: LiteralValue,
}

/// `and` / `or`. Separate from `BinaryExpr` because evaluation of these
/// short-circuits.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalExpr {
    pub left: Expr,
    pub operator: Token,
    pub right: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThisExpr {
    pub keyword: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: Token,
    pub expression: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: Token,
}
