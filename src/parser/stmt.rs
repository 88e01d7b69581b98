use crate::ast::ast::Stmt;
use crate::ast::statements::{
    BlockStmt, ExpressionStmt, IfStmt, LetStmt, PrintStmt, RepeatWhileStmt, VarStmt, WhileStmt,
};
use crate::errors::errors::ParseError;
use crate::lexer::tokens::TokenKind;

use super::expr::expression;
use super::parser::Parser;

/// One statement, with the unwind caught and turned into
/// resynchronisation. `None` marks a statement that failed to parse; the
/// caller keeps going with whatever comes after the boundary.
pub(crate) fn declaration(parser: &mut Parser<'_>) -> Option<Stmt> {
    match declaration_inner(parser) {
        Ok(statement) => Some(statement),
        Err(_) => {
            parser.synchronize();
            None
        }
    }
}

fn declaration_inner(parser: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    if parser.match_kind(TokenKind::Var) {
        return var_declaration(parser);
    }
    if parser.match_kind(TokenKind::Let) {
        return let_declaration(parser);
    }

    statement(parser)
}

fn statement(parser: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    if parser.match_kind(TokenKind::For) {
        return for_statement(parser);
    }
    if parser.match_kind(TokenKind::If) {
        return if_statement(parser);
    }
    if parser.match_kind(TokenKind::Print) {
        return print_statement(parser);
    }
    if parser.match_kind(TokenKind::While) {
        return while_statement(parser);
    }
    if parser.match_kind(TokenKind::RepeatWhile) {
        return repeat_while_statement(parser);
    }
    if parser.match_kind(TokenKind::OpenCurly) {
        return Ok(Stmt::Block(Box::new(BlockStmt {
            statements: block(parser)?,
        })));
    }

    expression_statement(parser)
}

/// A statement that must be a braced block. Only the then-branch of `if`
/// insists on this; else-branches take any statement.
fn braced_statement(parser: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    if parser.match_kind(TokenKind::OpenCurly) {
        return Ok(Stmt::Block(Box::new(BlockStmt {
            statements: block(parser)?,
        })));
    }

    Err(parser.error(&parser.peek().clone(), "Expect '{' after if condition"))
}

fn var_declaration(parser: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    let name = parser.consume(TokenKind::Identifier, "Expect variable name.")?;

    if !parser.match_kind(TokenKind::Equal) {
        return Err(parser.error(&name, "Variable should be initialised."));
    }
    let initializer = expression(parser)?;

    Ok(Stmt::Var(Box::new(VarStmt { name, initializer })))
}

fn let_declaration(parser: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    let name = parser.consume(TokenKind::Identifier, "Expect variable name.")?;

    if !parser.match_kind(TokenKind::Equal) {
        return Err(parser.error(&name, "Variable should be initialised."));
    }
    let initializer = expression(parser)?;

    Ok(Stmt::Let(Box::new(LetStmt { name, initializer })))
}

/// `for IDENTIFIER in expr statement` lowers directly to a `While` over
/// the expression. The loop variable is consumed and discarded; no binding
/// for it exists in the tree yet.
fn for_statement(parser: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    parser.consume(TokenKind::Identifier, "Expect variable name.")?;
    parser.consume(TokenKind::In, "Expect 'in' after loop variable.")?;
    let condition = expression(parser)?;
    let body = statement(parser)?;

    Ok(Stmt::While(Box::new(WhileStmt { condition, body })))
}

fn if_statement(parser: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    let condition = expression(parser)?;
    let then_branch = braced_statement(parser)?;

    // `ElseIf` never comes out of the keyword table, so in practice
    // chaining happens through `else` followed by a fresh `if` statement.
    let mut else_branch = None;
    if parser.match_kind(TokenKind::ElseIf) {
        else_branch = Some(statement(parser)?);
    }
    if parser.match_kind(TokenKind::Else) {
        else_branch = Some(statement(parser)?);
    }

    Ok(Stmt::If(Box::new(IfStmt {
        condition,
        then_branch,
        else_branch,
    })))
}

fn print_statement(parser: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    let expr = expression(parser)?;
    Ok(Stmt::Print(Box::new(PrintStmt { expression: expr })))
}

fn while_statement(parser: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    parser.consume(TokenKind::OpenParen, "Expect '(' after 'while'.")?;
    let condition = expression(parser)?;
    parser.consume(TokenKind::CloseParen, "Expect ')' after condition.")?;
    let body = statement(parser)?;

    Ok(Stmt::While(Box::new(WhileStmt { condition, body })))
}

/// Body first, then the parenthesised condition: the loop always runs at
/// least once.
fn repeat_while_statement(parser: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    let body = statement(parser)?;
    parser.consume(TokenKind::While, "Expect 'while' after repeat body.")?;
    parser.consume(TokenKind::OpenParen, "Expect '(' after 'while'.")?;
    let condition = expression(parser)?;
    parser.consume(TokenKind::CloseParen, "Expect ')' after condition.")?;

    Ok(Stmt::RepeatWhile(Box::new(RepeatWhileStmt {
        condition,
        body,
    })))
}

/// Statements between `{` and `}`. Failed inner statements resynchronise
/// without abandoning the rest of the block; a missing `}` is the
/// enclosing statement's problem.
fn block(parser: &mut Parser<'_>) -> Result<Vec<Stmt>, ParseError> {
    let mut statements = Vec::new();

    while !parser.check(TokenKind::CloseCurly) && !parser.is_at_end() {
        if let Some(statement) = declaration(parser) {
            statements.push(statement);
        }
    }

    parser.consume(TokenKind::CloseCurly, "Expect '}' after block.")?;
    Ok(statements)
}

fn expression_statement(parser: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    let expr = expression(parser)?;
    Ok(Stmt::Expression(Box::new(ExpressionStmt {
        expression: expr,
    })))
}
