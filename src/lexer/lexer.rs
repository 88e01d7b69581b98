use crate::errors::errors::{LexError, Reporter};

use super::tokens::{LiteralValue, Token, TokenKind, KEYWORDS};

/// Scan a whole source buffer into tokens, ending with an `EOF` token.
/// Never fails: lexical problems are reported through `reporter` and
/// scanning resumes at the next character.
pub fn scan(source: &str, reporter: &mut Reporter) -> Vec<Token> {
    Lexer::new(source, reporter).scan_tokens()
}

/// Cursor scanner over a single source buffer. `start` marks the first
/// byte of the lexeme being scanned, `current` the lookahead position,
/// `line` the running line number stamped onto tokens and diagnostics.
pub struct Lexer<'a> {
    reporter: &'a mut Reporter,
    source: &'a str,
    bytes: &'a [u8],
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, reporter: &'a mut Reporter) -> Lexer<'a> {
        Lexer {
            reporter,
            source,
            bytes: source.as_bytes(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens.push(Token {
            kind: TokenKind::EOF,
            lexeme: String::new(),
            literal: None,
            line: self.line,
        });
        self.tokens
    }

    fn scan_token(&mut self) {
        let c = self.advance();
        match c {
            '(' => self.add_token(TokenKind::OpenParen),
            ')' => self.add_token(TokenKind::CloseParen),
            '{' => self.add_token(TokenKind::OpenCurly),
            '}' => self.add_token(TokenKind::CloseCurly),
            ',' => self.add_token(TokenKind::Comma),
            ';' => self.add_token(TokenKind::Semicolon),
            '.' => {
                let kind = if self.match_char('.') {
                    TokenKind::DotDot
                } else {
                    TokenKind::Dot
                };
                self.add_token(kind);
            }
            '-' => {
                let kind = if self.match_char('=') {
                    TokenKind::MinusEqual
                } else {
                    TokenKind::Minus
                };
                self.add_token(kind);
            }
            '+' => {
                let kind = if self.match_char('=') {
                    TokenKind::PlusEqual
                } else {
                    TokenKind::Plus
                };
                self.add_token(kind);
            }
            '*' => {
                let kind = if self.match_char('=') {
                    TokenKind::StarEqual
                } else {
                    TokenKind::Star
                };
                self.add_token(kind);
            }
            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            '/' => {
                if self.match_char('/') {
                    // The newline is left for the next scan so the line
                    // count stays right.
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else if self.match_char('*') {
                    self.block_comment();
                } else if self.match_char('=') {
                    self.add_token(TokenKind::SlashEqual);
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.string(),
            _ => {
                if c.is_ascii_digit() {
                    self.number();
                } else if is_alpha(c) {
                    self.identifier();
                } else {
                    self.reporter.error(self.line, LexError::UnexpectedCharacter);
                }
            }
        }
    }

    fn block_comment(&mut self) {
        while !self.is_at_end() {
            if self.peek() == '*' && self.peek_next() == '/' {
                self.advance();
                self.advance();
                return;
            }
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }
        self.reporter.error(self.line, LexError::UnterminatedComment);
    }

    fn string(&mut self) {
        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.reporter.error(self.line, LexError::UnterminatedString);
            return;
        }

        // The closing quote.
        self.advance();

        // No escape sequences; the value is the raw text between the quotes.
        let value = self.source[self.start + 1..self.current - 1].to_string();
        self.add_literal_token(TokenKind::String, Some(LiteralValue::String(value)));
    }

    fn number(&mut self) {
        while is_digit(self.peek()) {
            self.advance();
        }

        // A fractional part only counts when a digit follows the dot;
        // otherwise the dot is left behind for the next scan.
        if self.peek() == '.' && is_digit(self.peek_next()) {
            self.advance();
            while is_digit(self.peek()) {
                self.advance();
            }
        }

        let digits: String = self.lexeme().chars().filter(|&c| c != '_').collect();
        // The lexeme opens with a digit and holds nothing but digits and at
        // most one dot once separators are stripped, so this cannot fail.
        let value = digits.parse::<f64>().unwrap();
        self.add_literal_token(TokenKind::Number, Some(LiteralValue::Number(value)));
    }

    fn identifier(&mut self) {
        while is_alpha_numeric(self.peek()) {
            self.advance();
        }

        let kind = KEYWORDS
            .get(self.lexeme())
            .copied()
            .unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.bytes.len()
    }

    fn advance(&mut self) -> char {
        let c = self.bytes[self.current] as char;
        self.current += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.bytes[self.current] as char
        }
    }

    fn peek_next(&self) -> char {
        if self.current + 1 >= self.bytes.len() {
            '\0'
        } else {
            self.bytes[self.current + 1] as char
        }
    }

    /// Conditional advance: consumes the next character only when it is
    /// `expected`.
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.current += 1;
        true
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal_token(kind, None);
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Option<LiteralValue>) {
        self.tokens.push(Token {
            kind,
            lexeme: self.lexeme().to_string(),
            literal,
            line: self.line,
        });
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }
}

/// Underscores count as digit continuation so number literals can carry
/// group separators; entering number scanning still requires a real digit.
fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || c == '_'
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}
