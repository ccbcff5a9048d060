//! Parse diagnostics.
//!
//! Problems found while parsing are recorded as `ParseError` values rather
//! than aborting the parse. Each renders as a plain message and carries a
//! stable name and an optional suggestion.

pub mod errors;
