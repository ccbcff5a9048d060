//! Abstract Syntax Tree definitions.
//!
//! The tree is built bottom-up by the parser and never mutated afterwards.
//! It is organised into:
//!
//! - `ast` - The `Program` root, the `Stmt`/`Expr` sum types and the `Node` view
//! - `statements` - Statement nodes (type declarations, returns, blocks, ...)
//! - `expressions` - Expression nodes (literals, operators, calls, ...)
//!
//! Every node renders canonical text through `Display`.

pub mod ast;
pub mod expressions;
pub mod statements;
