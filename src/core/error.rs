//! Errors raised when puzzle inputs break the solver's input contract
//!
//! The search itself cannot fail; every variant here is detected while
//! building a [`Grid`](super::Grid) or a [`SearchConfig`](super::SearchConfig),
//! or while setting up a dedicated worker pool.

use thiserror::Error;

/// Result alias for grid and configuration construction
pub type Result<T> = std::result::Result<T, GridError>;

/// Input contract violations
#[derive(Error, Debug)]
pub enum GridError {
    #[error("Grid must have at least one row and one column")]
    EmptyGrid,

    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Cell ({row}, {col}) must hold exactly one letter, got {cell:?}")]
    InvalidCell { row: usize, col: usize, cell: String },

    #[error("{letters} letters cannot be split into rows of {cols}")]
    LayoutMismatch { letters: usize, cols: usize },

    #[error("Maximum word length {max_len} is below the minimum of {min_len}")]
    MaxLenTooSmall { max_len: usize, min_len: usize },

    #[error("Invalid expected count {0:?}, use LEN:COUNT")]
    InvalidExpectedCount(String),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
