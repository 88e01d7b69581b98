use crate::ast::ast::Expr;
use crate::ast::expressions::{
    AssignExpr, BinaryExpr, CallExpr, GroupingExpr, LiteralExpr, LogicalExpr, ThisExpr, UnaryExpr,
    VariableExpr,
};
use crate::errors::errors::ParseError;
use crate::lexer::tokens::{LiteralValue, TokenKind};

use super::parser::Parser;

/// Maximum number of call arguments. Exceeding it is reported but does not
/// stop the call from parsing.
const MAX_ARGUMENTS: usize = 8;

pub(crate) fn expression(parser: &mut Parser<'_>) -> Result<Expr, ParseError> {
    assignment(parser)
}

/// Lowest tier, right-associative: `a = b = c` nests to the right. Every
/// tier below folds to the left.
fn assignment(parser: &mut Parser<'_>) -> Result<Expr, ParseError> {
    let expr = or(parser)?;

    if parser.match_kind(TokenKind::Equal) {
        let equals = parser.previous().clone();
        let value = assignment(parser)?;

        if let Expr::Variable(variable) = &expr {
            return Ok(Expr::Assign(Box::new(AssignExpr {
                name: variable.name.clone(),
                value,
            })));
        }

        // Reported without unwinding: the right-hand side was already
        // consumed, and the left-hand expression stands on its own.
        parser.error(&equals, "Invalid assignment target.");
    }

    Ok(expr)
}

fn or(parser: &mut Parser<'_>) -> Result<Expr, ParseError> {
    let mut expr = and(parser)?;

    while parser.match_kind(TokenKind::Or) {
        let operator = parser.previous().clone();
        let right = and(parser)?;
        expr = Expr::Logical(Box::new(LogicalExpr {
            left: expr,
            operator,
            right,
        }));
    }

    Ok(expr)
}

fn and(parser: &mut Parser<'_>) -> Result<Expr, ParseError> {
    let mut expr = equality(parser)?;

    while parser.match_kind(TokenKind::And) {
        let operator = parser.previous().clone();
        let right = equality(parser)?;
        expr = Expr::Logical(Box::new(LogicalExpr {
            left: expr,
            operator,
            right,
        }));
    }

    Ok(expr)
}

fn equality(parser: &mut Parser<'_>) -> Result<Expr, ParseError> {
    let mut expr = comparison(parser)?;

    while parser.match_any(&[TokenKind::BangEqual, TokenKind::EqualEqual]) {
        let operator = parser.previous().clone();
        let right = comparison(parser)?;
        expr = Expr::Binary(Box::new(BinaryExpr {
            left: expr,
            operator,
            right,
        }));
    }

    Ok(expr)
}

fn comparison(parser: &mut Parser<'_>) -> Result<Expr, ParseError> {
    let mut expr = addition(parser)?;

    while parser.match_any(&[
        TokenKind::Greater,
        TokenKind::GreaterEqual,
        TokenKind::Less,
        TokenKind::LessEqual,
    ]) {
        let operator = parser.previous().clone();
        let right = addition(parser)?;
        expr = Expr::Binary(Box::new(BinaryExpr {
            left: expr,
            operator,
            right,
        }));
    }

    // Ranges sit on the same tier: any trailing `..` chain folds onto the
    // comparison as ordinary binary nodes.
    while parser.match_kind(TokenKind::DotDot) {
        let operator = parser.previous().clone();
        let right = addition(parser)?;
        expr = Expr::Binary(Box::new(BinaryExpr {
            left: expr,
            operator,
            right,
        }));
    }

    Ok(expr)
}

/// Folds `+` and `-`. A lone `=` right after either upgrades the step to
/// the whitespace-split compound form `a + = b`; the node built is still
/// plain arithmetic, with the operator token fetched from two places back.
fn addition(parser: &mut Parser<'_>) -> Result<Expr, ParseError> {
    let mut expr = multiplication(parser)?;

    while parser.match_any(&[TokenKind::Minus, TokenKind::Plus]) {
        if parser.match_kind(TokenKind::Equal) {
            let operator = parser.back(2).clone();
            let right = multiplication(parser)?;
            expr = Expr::Binary(Box::new(BinaryExpr {
                left: expr,
                operator,
                right,
            }));
            continue;
        }

        let operator = parser.previous().clone();
        let right = multiplication(parser)?;
        expr = Expr::Binary(Box::new(BinaryExpr {
            left: expr,
            operator,
            right,
        }));
    }

    Ok(expr)
}

fn multiplication(parser: &mut Parser<'_>) -> Result<Expr, ParseError> {
    let mut expr = unary(parser)?;

    while parser.match_any(&[TokenKind::Slash, TokenKind::Star]) {
        let operator = parser.previous().clone();
        let right = unary(parser)?;
        expr = Expr::Binary(Box::new(BinaryExpr {
            left: expr,
            operator,
            right,
        }));
    }

    Ok(expr)
}

fn unary(parser: &mut Parser<'_>) -> Result<Expr, ParseError> {
    if parser.match_any(&[TokenKind::Bang, TokenKind::Minus]) {
        let operator = parser.previous().clone();
        let expression = unary(parser)?;
        return Ok(Expr::Unary(Box::new(UnaryExpr {
            operator,
            expression,
        })));
    }

    call(parser)
}

fn call(parser: &mut Parser<'_>) -> Result<Expr, ParseError> {
    let mut expr = primary(parser)?;

    while parser.match_kind(TokenKind::OpenParen) {
        expr = finish_call(parser, expr)?;
    }

    Ok(expr)
}

fn finish_call(parser: &mut Parser<'_>, callee: Expr) -> Result<Expr, ParseError> {
    let mut arguments = Vec::new();

    if !parser.check(TokenKind::CloseParen) {
        loop {
            if arguments.len() >= MAX_ARGUMENTS {
                // Reported without unwinding; the extra argument still
                // parses and lands in the list.
                parser.error(
                    &parser.peek().clone(),
                    "Cannot have more than 8 arguments.",
                );
            }
            arguments.push(expression(parser)?);
            if !parser.match_kind(TokenKind::Comma) {
                break;
            }
        }
    }

    let paren = parser.consume(TokenKind::CloseParen, "Expect ')' after arguments.")?;

    Ok(Expr::Call(Box::new(CallExpr {
        callee,
        paren,
        arguments,
    })))
}

fn primary(parser: &mut Parser<'_>) -> Result<Expr, ParseError> {
    if parser.match_kind(TokenKind::False) {
        return Ok(literal(LiteralValue::Bool(false)));
    }
    if parser.match_kind(TokenKind::True) {
        return Ok(literal(LiteralValue::Bool(true)));
    }
    if parser.match_kind(TokenKind::Nil) {
        return Ok(literal(LiteralValue::Nil));
    }

    if parser.match_any(&[TokenKind::Number, TokenKind::String]) {
        // Number and String tokens always carry their literal.
        let value = parser.previous().literal.clone().unwrap();
        return Ok(literal(value));
    }

    if parser.match_kind(TokenKind::This) {
        return Ok(Expr::This(Box::new(ThisExpr {
            keyword: parser.previous().clone(),
        })));
    }

    if parser.match_kind(TokenKind::Identifier) {
        return Ok(Expr::Variable(Box::new(VariableExpr {
            name: parser.previous().clone(),
        })));
    }

    if parser.match_kind(TokenKind::OpenParen) {
        let expr = expression(parser)?;
        parser.consume(TokenKind::CloseParen, "Expect ')' after expression.")?;
        return Ok(Expr::Grouping(Box::new(GroupingExpr { expression: expr })));
    }

    Err(parser.error(&parser.peek().clone(), "Expect expression."))
}

fn literal(value: LiteralValue) -> Expr {
    Expr::Literal(Box::new(LiteralExpr { value }))
}
