#![allow(clippy::module_inception)]

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod parser;

use crate::ast::ast::Stmt;
use crate::errors::errors::Reporter;

/// Run both front-end stages over one source buffer. Diagnostics from
/// either stage land in `reporter`; scanner trouble does not stop the
/// parse, which works with whatever tokens were produced.
pub fn parse_source(source: &str, reporter: &mut Reporter) -> Vec<Stmt> {
    let tokens = lexer::lexer::scan(source, reporter);
    parser::parser::parse(tokens, reporter)
}
