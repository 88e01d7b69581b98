//! Diagnostics for the front end.
//!
//! Both stages report through a shared [`errors::Reporter`] and carry on
//! wherever they can:
//! - the scanner reports a [`errors::LexError`] and resumes at the next
//!   character,
//! - the parser reports at a token, unwinds the current statement with a
//!   [`errors::ParseError`], and resynchronises at a statement boundary.
//!
//! Rendered diagnostics follow the `[line N] Error at 'x': message` shape.
pub mod errors;

#[cfg(test)]
mod tests;
