//! Grid word-finding algorithms
//!
//! Path exploration from one cell, concurrent search over all cells, and
//! aggregation of the results.

mod aggregate;
mod engine;
mod explorer;

pub use aggregate::aggregate;
pub use engine::{Searcher, search};
pub use explorer::explore;
