//! Runtime values produced by the evaluator.

pub mod object;

#[cfg(test)]
mod tests;
