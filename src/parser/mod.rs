//! Parsing: token stream to syntax tree.
//!
//! A recursive-descent parser with precedence climbing. Statement rules in
//! `stmt` dispatch on the leading keyword; expression tiers in `expr` run
//! from assignment down through `or`, `and`, equality, comparison (which
//! also owns ranges), addition, multiplication, unary, and call to
//! primary. Lower tiers bind tighter.
//!
//! Error handling is recover-and-continue: a broken statement raises a
//! [`crate::errors::errors::ParseError`], which is caught at the statement
//! entry, reported, and followed by a skip to the next statement boundary.
pub mod parser;

mod expr;
mod stmt;
