//! Lexical analysis.
//!
//! Turns Oak source text into tokens one at a time. It handles:
//!
//! - Single-character punctuation and operators
//! - `==` and `!=`, the only two-character operators
//! - Identifiers, resolved against the keyword table
//! - Unsigned integer literals
//! - `ILLEGAL` tokens for anything else

pub mod lexer;
pub mod tokens;
