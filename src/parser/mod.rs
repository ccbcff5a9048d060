//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the lexer's tokens into
//! an Abstract Syntax Tree. It uses a Pratt parser for expressions with
//! proper operator precedence and handles:
//!
//! - Statement parsing (type declarations, returns, expression statements, blocks)
//! - Expression parsing (prefix/infix operators, grouping, `if`, `func`, calls)
//! - Error recovery: diagnostics are accumulated instead of aborting
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
