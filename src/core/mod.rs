//! Core domain types for grid word search
//!
//! Grids, dictionaries, configuration and result containers. Everything here
//! is immutable once built except `FoundWords`, which only grows.

mod config;
mod dictionary;
mod error;
mod found;
mod grid;

pub use config::{ExpectedCount, MIN_LEN, SearchConfig, parse_expected_counts};
pub use dictionary::Dictionary;
pub use error::{GridError, Result};
pub use found::{CategorizedResult, FoundWords};
pub use grid::{Grid, Position};
