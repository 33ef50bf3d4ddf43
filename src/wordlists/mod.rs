//! Word lists for grid solving
//!
//! Provides an embedded sample list and loaders for external word lists.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE, SAMPLE_COUNT};
