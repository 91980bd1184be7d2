//! Search module: the match predicate and the result aggregator.

mod aggregate;
mod matcher;

pub use aggregate::*;
pub use matcher::*;
