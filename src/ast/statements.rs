use crate::lexer::tokens::Token;

use super::ast::{Expr, Stmt};

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
}

/// The then-branch is always a block; an else-branch can be any statement,
/// which is how `else if` chains nest.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_branch: Stmt,
    pub else_branch: Option<Stmt>,
}

/// Immutable binding. Declarations always carry an initialiser; a missing
/// one is a parse error, not an empty slot.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub name: Token,
    pub initializer: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub expression: Expr,
}

/// Body-first loop: `body` runs once before `condition` is first tested.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatWhileStmt {
    pub condition: Expr,
    pub body: Stmt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarStmt {
    pub name: Token,
    pub initializer: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Stmt,
}
