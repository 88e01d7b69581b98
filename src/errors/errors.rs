use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::{Token, TokenKind};

/// One problem found while scanning or parsing, tied to the source line it
/// was discovered on. `location` is the rendered context (`" at 'x'"`,
/// `" at end"`, or empty for scanner reports).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub location: String,
    pub message: String,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[line {}] Error{}: {}",
            self.line, self.location, self.message
        )
    }
}

/// Lexical failures. The scanner reports one of these and keeps going; the
/// `Display` text is exactly what reaches the diagnostic sink.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    #[error("Unexpected character.")]
    UnexpectedCharacter,
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Unterminated '/*' comment.")]
    UnterminatedComment,
}

/// Unwind signal for the parser. The diagnostic has already been handed to
/// the reporter by the time one of these is constructed; the only catch
/// point is the per-statement entry in the parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[line {line}] {message}")]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

/// Diagnostic sink shared by both front-end stages. Collects reports in
/// source order; never influences control flow.
#[derive(Debug, Default)]
pub struct Reporter {
    diagnostics: Vec<Diagnostic>,
}

impl Reporter {
    pub fn new() -> Reporter {
        Reporter {
            diagnostics: Vec::new(),
        }
    }

    /// Report against a bare line number. Used by the scanner, which has no
    /// token to point at.
    pub fn error(&mut self, line: usize, message: impl Display) {
        self.report(line, String::new(), message);
    }

    /// Report against the token where the problem was noticed.
    pub fn error_at(&mut self, token: &Token, message: impl Display) {
        let location = if token.kind == TokenKind::EOF {
            String::from(" at end")
        } else {
            format!(" at '{}'", token.lexeme)
        };
        self.report(token.line, location, message);
    }

    fn report(&mut self, line: usize, location: String, message: impl Display) {
        self.diagnostics.push(Diagnostic {
            line,
            location,
            message: message.to_string(),
        });
    }

    pub fn had_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
