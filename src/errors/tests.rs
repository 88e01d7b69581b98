use super::errors::{Diagnostic, LexError, ParseError, Reporter};
use crate::lexer::tokens::{Token, TokenKind};

fn token(kind: TokenKind, lexeme: &str, line: usize) -> Token {
    Token {
        kind,
        lexeme: lexeme.to_string(),
        literal: None,
        line,
    }
}

#[test]
fn test_diagnostic_display_with_location() {
    let diagnostic = Diagnostic {
        line: 2,
        location: String::from(" at 'x'"),
        message: String::from("Expect expression."),
    };

    assert_eq!(
        diagnostic.to_string(),
        "[line 2] Error at 'x': Expect expression."
    );
}

#[test]
fn test_diagnostic_display_without_location() {
    let diagnostic = Diagnostic {
        line: 3,
        location: String::new(),
        message: String::from("Unexpected character."),
    };

    assert_eq!(
        diagnostic.to_string(),
        "[line 3] Error: Unexpected character."
    );
}

#[test]
fn test_reporter_collects_in_order() {
    let mut reporter = Reporter::new();
    assert!(!reporter.had_error());

    reporter.error(1, "first");
    reporter.error(4, "second");

    assert!(reporter.had_error());
    let diagnostics = reporter.diagnostics();
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].line, 1);
    assert_eq!(diagnostics[0].location, "");
    assert_eq!(diagnostics[0].message, "first");
    assert_eq!(diagnostics[1].line, 4);
    assert_eq!(diagnostics[1].message, "second");
}

#[test]
fn test_reporter_error_at_token() {
    let mut reporter = Reporter::new();
    reporter.error_at(&token(TokenKind::Identifier, "x", 4), "Expect '=' here.");

    let diagnostics = reporter.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].line, 4);
    assert_eq!(diagnostics[0].location, " at 'x'");
    assert_eq!(diagnostics[0].message, "Expect '=' here.");
}

#[test]
fn test_reporter_error_at_eof_token() {
    let mut reporter = Reporter::new();
    reporter.error_at(&token(TokenKind::EOF, "", 7), "Expect expression.");

    let diagnostics = reporter.diagnostics();
    assert_eq!(diagnostics[0].location, " at end");
    assert_eq!(
        diagnostics[0].to_string(),
        "[line 7] Error at end: Expect expression."
    );
}

#[test]
fn test_lex_error_messages() {
    assert_eq!(
        LexError::UnexpectedCharacter.to_string(),
        "Unexpected character."
    );
    assert_eq!(
        LexError::UnterminatedString.to_string(),
        "Unterminated string."
    );
    assert_eq!(
        LexError::UnterminatedComment.to_string(),
        "Unterminated '/*' comment."
    );
}

#[test]
fn test_parse_error_display() {
    let error = ParseError {
        line: 7,
        message: String::from("Expect expression."),
    };

    assert_eq!(error.to_string(), "[line 7] Expect expression.");
}
