//! Syntax tree produced by the parser.
//!
//! `ast` holds the two closed node enums, [`ast::Expr`] and [`ast::Stmt`];
//! the payload structs live in `expressions` and `statements`. Nodes own
//! their tokens outright, so a tree stays usable after the token stream is
//! gone.
pub mod ast;
pub mod expressions;
pub mod statements;
