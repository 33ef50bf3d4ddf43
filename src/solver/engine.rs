//! Search coordination across all starting cells
//!
//! One explorer task runs per grid cell on a rayon pool. Each task builds its
//! own `FoundWords`; the sets are merged by rayon's reduction, so no task
//! ever touches shared mutable state and the join at the end of the parallel
//! iterator is the only barrier.

use super::aggregate::aggregate;
use super::explorer::explore;
use crate::core::{CategorizedResult, Dictionary, FoundWords, Grid, Position, Result};
use rayon::prelude::*;
use std::num::NonZeroUsize;
use std::time::Instant;
use tracing::debug;

/// Find every dictionary word traceable in the grid
///
/// Path length is bounded by the dictionary's configured maximum word
/// length. Blocks until every cell has been fully explored. Runs on the
/// current rayon pool (the global pool unless called inside
/// `ThreadPool::install`).
///
/// # Examples
/// ```
/// use grid_words::core::{Dictionary, Grid, SearchConfig};
/// use grid_words::solver::search;
///
/// let grid = Grid::from_rows(&["cats", "oree"]).unwrap();
/// let dict = Dictionary::filter(["cat", "cats", "core", "ace"], &SearchConfig::new(4).unwrap());
///
/// let found = search(&grid, &dict);
/// assert!(found.contains("cats"));
/// assert!(found.contains("core"));
/// assert!(!found.contains("ace"));
/// ```
#[must_use]
pub fn search(grid: &Grid, dictionary: &Dictionary) -> FoundWords {
    let start = Instant::now();
    let max_len = dictionary.max_len();
    let starts: Vec<Position> = grid.positions().collect();

    let found = starts
        .par_iter()
        .map(|&cell| explore(grid, dictionary, cell, max_len))
        .reduce(FoundWords::new, FoundWords::merge);

    debug!(
        cells = starts.len(),
        dictionary = dictionary.len(),
        max_len,
        found = found.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "Grid search finished"
    );

    found
}

/// Grid word finder bound to a worker pool
///
/// Uses rayon's global pool (sized to the available hardware parallelism)
/// unless a thread count is given.
pub struct Searcher {
    pool: Option<rayon::ThreadPool>,
}

impl Searcher {
    /// Searcher running on the global rayon pool
    #[must_use]
    pub const fn new() -> Self {
        Self { pool: None }
    }

    /// Searcher with a dedicated pool of `threads` workers
    ///
    /// # Errors
    /// Returns `GridError::ThreadPool` if the pool cannot be created
    pub fn with_threads(threads: NonZeroUsize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads.get())
            .thread_name(|index| format!("grid-search-{index}"))
            .build()?;
        Ok(Self { pool: Some(pool) })
    }

    /// Number of worker threads searches will use
    #[must_use]
    pub fn threads(&self) -> usize {
        self.pool
            .as_ref()
            .map_or_else(rayon::current_num_threads, rayon::ThreadPool::current_num_threads)
    }

    /// Run [`search`] on this searcher's pool
    #[must_use]
    pub fn search(&self, grid: &Grid, dictionary: &Dictionary) -> FoundWords {
        match &self.pool {
            Some(pool) => pool.install(|| search(grid, dictionary)),
            None => search(grid, dictionary),
        }
    }

    /// Search and group the results by word length
    #[must_use]
    pub fn solve(&self, grid: &Grid, dictionary: &Dictionary) -> CategorizedResult {
        aggregate(self.search(grid, dictionary))
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
