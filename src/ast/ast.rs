use super::expressions::{
    AssignExpr, BinaryExpr, CallExpr, GroupingExpr, LiteralExpr, LogicalExpr, ThisExpr, UnaryExpr,
    VariableExpr,
};
use super::statements::{
    BlockStmt, ExpressionStmt, IfStmt, LetStmt, PrintStmt, RepeatWhileStmt, VarStmt, WhileStmt,
};

/// Expression nodes. Each variant boxes its payload struct so the enum
/// stays one word plus discriminant regardless of tree depth.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Assign(Box<AssignExpr>),
    Binary(Box<BinaryExpr>),
    Call(Box<CallExpr>),
    Grouping(Box<GroupingExpr>),
    Literal(Box<LiteralExpr>),
    Logical(Box<LogicalExpr>),
    This(Box<ThisExpr>),
    Unary(Box<UnaryExpr>),
    Variable(Box<VariableExpr>),
}

/// Statement nodes. `for` loops have no variant of their own; they lower
/// to `While` during parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(Box<BlockStmt>),
    Expression(Box<ExpressionStmt>),
    If(Box<IfStmt>),
    Let(Box<LetStmt>),
    Print(Box<PrintStmt>),
    RepeatWhile(Box<RepeatWhileStmt>),
    Var(Box<VarStmt>),
    While(Box<WhileStmt>),
}
