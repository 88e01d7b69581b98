use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    /// Reserved words, matched against a whole identifier lexeme only.
    /// Prefixes never count: `classy` stays an identifier.
    pub static ref KEYWORDS: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("and", TokenKind::And);
        map.insert("class", TokenKind::Class);
        map.insert("else", TokenKind::Else);
        // An identifier lexeme never contains a space, so this entry is
        // unreachable from scanning; the kind itself is still matched on
        // by the parser.
        map.insert("else if", TokenKind::ElseIf);
        map.insert("false", TokenKind::False);
        map.insert("for", TokenKind::For);
        map.insert("if", TokenKind::If);
        map.insert("in", TokenKind::In);
        map.insert("let", TokenKind::Let);
        map.insert("nil", TokenKind::Nil);
        map.insert("or", TokenKind::Or);
        map.insert("print", TokenKind::Print);
        map.insert("repeat", TokenKind::RepeatWhile);
        map.insert("return", TokenKind::Return);
        map.insert("super", TokenKind::Super);
        map.insert("this", TokenKind::This);
        map.insert("true", TokenKind::True);
        map.insert("var", TokenKind::Var);
        map.insert("while", TokenKind::While);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    // Single-character tokens
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One- or two-character operators
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    PlusEqual,
    MinusEqual,
    StarEqual,
    SlashEqual,
    DotDot,

    // Reserved words
    And,
    Class,
    Else,
    ElseIf,
    False,
    For,
    If,
    In,
    Let,
    Nil,
    Or,
    Print,
    RepeatWhile,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    // No reserved word maps to this; the parser only meets it while
    // scanning for a resynchronisation boundary.
    Fun,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Literal payload carried by `Number` and `String` tokens, and reused as
/// the value of literal expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Number(f64),
    String(String),
    Bool(bool),
    Nil,
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralValue::Number(value) => write!(f, "{value}"),
            LiteralValue::String(value) => write!(f, "{value}"),
            LiteralValue::Bool(value) => write!(f, "{value}"),
            LiteralValue::Nil => write!(f, "nil"),
        }
    }
}

/// A scanned token. `lexeme` is the exact source text; `line` is where the
/// token ended, which for multi-line strings is the line of the closing
/// quote.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<LiteralValue>,
    pub line: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {}", self.kind, self.lexeme, literal),
            None => write!(f, "{} {}", self.kind, self.lexeme),
        }
    }
}
