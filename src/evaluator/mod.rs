//! Tree-walking evaluation of a parsed `Program`.
//!
//! Only integer and boolean literals produce values today; every other node
//! evaluates to `Null`.

pub mod evaluator;
