//! Line-based read-parse-evaluate loop.

pub mod repl;
