//! Lexical analysis: source text to token stream.
//!
//! The scanner walks the buffer byte by byte with greedy two-character
//! operator matching and maximal-munch identifiers. It always produces a
//! token vector ending in `EOF`, even for source riddled with errors;
//! whatever could not be tokenised is reported and skipped.
pub mod lexer;
pub mod tokens;
