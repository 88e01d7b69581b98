use crate::ast::ast::Stmt;
use crate::errors::errors::{ParseError, Reporter};
use crate::lexer::tokens::{Token, TokenKind};

use super::stmt::declaration;

/// Parse a token stream into top-level statements. A statement that fails
/// to parse is reported, resynchronised past, and left out of the result;
/// everything that did parse is kept.
pub fn parse(tokens: Vec<Token>, reporter: &mut Reporter) -> Vec<Stmt> {
    let mut parser = Parser::new(tokens, reporter);
    let mut statements = Vec::new();

    while !parser.is_at_end() {
        if let Some(statement) = declaration(&mut parser) {
            statements.push(statement);
        }
    }

    statements
}

/// Token-stream cursor shared by the grammar rules in `stmt` and `expr`.
/// `current` only ever moves forward; all disambiguation happens through
/// `peek` and `previous` before anything is consumed.
pub struct Parser<'a> {
    reporter: &'a mut Reporter,
    tokens: Vec<Token>,
    current: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, reporter: &'a mut Reporter) -> Parser<'a> {
        Parser {
            reporter,
            tokens,
            current: 0,
        }
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    /// The token `n` places behind the cursor. The addition rule uses this
    /// to recover the operator of a whitespace-split compound assignment.
    pub(crate) fn back(&self, n: usize) -> &Token {
        &self.tokens[self.current - n]
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::EOF
    }

    /// Consumes the current token unless it is `EOF`, which is never
    /// consumed so `peek` stays valid.
    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.peek().kind == kind
    }

    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            return true;
        }
        false
    }

    pub(crate) fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        for &kind in kinds {
            if self.check(kind) {
                self.advance();
                return true;
            }
        }
        false
    }

    pub(crate) fn consume(
        &mut self,
        kind: TokenKind,
        message: &str,
    ) -> Result<Token, ParseError> {
        if self.check(kind) {
            return Ok(self.advance().clone());
        }
        Err(self.error(&self.peek().clone(), message))
    }

    /// Report against `token` and build the unwind signal. Call sites that
    /// recover in place simply drop the returned value instead of raising
    /// it with `?`.
    pub(crate) fn error(&mut self, token: &Token, message: &str) -> ParseError {
        self.reporter.error_at(token, message);
        ParseError {
            line: token.line,
            message: message.to_string(),
        }
    }

    /// Discard tokens until a likely statement boundary: just past a `;`,
    /// or just before a keyword that opens a statement.
    pub(crate) fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }

            use TokenKind::*;
            if let Class | Fun | Var | For | If | While | Print | Return = self.peek().kind {
                return;
            }

            self.advance();
        }
    }
}
