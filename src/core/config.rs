//! Search configuration
//!
//! The word length bounds are fixed once per puzzle and passed explicitly to
//! both the dictionary filter and the search coordinator.

use super::error::{GridError, Result};
use std::fmt;
use std::str::FromStr;

/// Shortest word the puzzle accepts
pub const MIN_LEN: usize = 3;

/// Immutable per-puzzle search parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    min_len: usize,
    max_len: usize,
    prune_prefixes: bool,
}

impl SearchConfig {
    /// Create a config accepting words of `MIN_LEN..=max_len` letters
    ///
    /// # Errors
    /// Returns `GridError::MaxLenTooSmall` if `max_len < MIN_LEN`
    ///
    /// # Examples
    /// ```
    /// use grid_words::core::SearchConfig;
    ///
    /// let config = SearchConfig::new(8).unwrap();
    /// assert_eq!(config.min_len(), 3);
    /// assert_eq!(config.max_len(), 8);
    ///
    /// assert!(SearchConfig::new(2).is_err());
    /// ```
    pub fn new(max_len: usize) -> Result<Self> {
        if max_len < MIN_LEN {
            return Err(GridError::MaxLenTooSmall {
                max_len,
                min_len: MIN_LEN,
            });
        }
        Ok(Self {
            min_len: MIN_LEN,
            max_len,
            prune_prefixes: false,
        })
    }

    /// Derive the maximum length from published per-length word counts
    ///
    /// The longest listed length wins, but never less than `MIN_LEN`.
    ///
    /// # Examples
    /// ```
    /// use grid_words::core::{ExpectedCount, SearchConfig};
    ///
    /// let counts: Vec<ExpectedCount> = vec!["3:10".parse().unwrap(), "6:2".parse().unwrap()];
    /// let config = SearchConfig::from_expected_counts(&counts);
    /// assert_eq!(config.max_len(), 6);
    /// ```
    #[must_use]
    pub fn from_expected_counts(counts: &[ExpectedCount]) -> Self {
        let max_len = counts
            .iter()
            .map(|expected| expected.len)
            .fold(MIN_LEN, usize::max);

        Self {
            min_len: MIN_LEN,
            max_len,
            prune_prefixes: false,
        }
    }

    /// Enable or disable the prefix index used to cut dead branches
    ///
    /// Pruning changes search cost only, never the set of words found.
    #[must_use]
    pub const fn with_prefix_pruning(mut self, enabled: bool) -> Self {
        self.prune_prefixes = enabled;
        self
    }

    #[inline]
    #[must_use]
    pub const fn min_len(&self) -> usize {
        self.min_len
    }

    #[inline]
    #[must_use]
    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    #[inline]
    #[must_use]
    pub const fn prune_prefixes(&self) -> bool {
        self.prune_prefixes
    }

    /// Check whether a word length (in characters) is accepted
    #[inline]
    #[must_use]
    pub const fn accepts_len(&self, len: usize) -> bool {
        self.min_len <= len && len <= self.max_len
    }
}

/// Number of words of a given length the puzzle says exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedCount {
    pub len: usize,
    pub count: usize,
}

impl FromStr for ExpectedCount {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || GridError::InvalidExpectedCount(s.to_string());
        let (len, count) = s.trim().split_once(':').ok_or_else(invalid)?;
        Ok(Self {
            len: len.trim().parse().map_err(|_| invalid())?,
            count: count.trim().parse().map_err(|_| invalid())?,
        })
    }
}

impl fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.len, self.count)
    }
}

/// Parse a comma separated list such as `"3:12,4:8,5:3"`
///
/// # Errors
/// Returns `GridError::InvalidExpectedCount` for the first malformed entry
pub fn parse_expected_counts(s: &str) -> Result<Vec<ExpectedCount>> {
    s.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(str::parse)
        .collect()
}
