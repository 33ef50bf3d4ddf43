//! Puzzle solving command
//!
//! Filters the raw word list, searches the grid and compares the result with
//! the per-length counts the puzzle publishes.

use crate::core::{CategorizedResult, Dictionary, ExpectedCount, Grid, Result, SearchConfig};
use crate::solver::Searcher;
use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Configuration for solving one puzzle
pub struct SolveConfig {
    pub grid: Grid,
    pub search: SearchConfig,
    pub expected: Vec<ExpectedCount>,
    pub threads: Option<NonZeroUsize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(grid: Grid, search: SearchConfig) -> Self {
        Self {
            grid,
            search,
            expected: Vec::new(),
            threads: None,
        }
    }
}

/// Words found for one length, alongside the published count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthReport {
    pub len: usize,
    pub words: Vec<String>,
    pub expected: Option<usize>,
}

impl LengthReport {
    /// True when no count was published or the found count matches it
    #[must_use]
    pub fn matches_expected(&self) -> bool {
        self.expected.is_none_or(|expected| expected == self.words.len())
    }
}

/// Result of solving a puzzle
pub struct SolveResult {
    pub result: CategorizedResult,
    pub reports: Vec<LengthReport>,
    pub dictionary_size: usize,
    pub max_len: usize,
    pub threads: usize,
    pub filter_time: Duration,
    pub search_time: Duration,
}

impl SolveResult {
    /// True when every published per-length count was matched
    #[must_use]
    pub fn matches_expected(&self) -> bool {
        self.reports.iter().all(LengthReport::matches_expected)
    }
}

/// Solve a puzzle against a raw word list
///
/// # Errors
///
/// Returns an error if a dedicated worker pool was requested and could not
/// be created.
pub fn solve_puzzle<I, S>(config: &SolveConfig, raw_words: I) -> Result<SolveResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let searcher = match config.threads {
        Some(threads) => Searcher::with_threads(threads)?,
        None => Searcher::new(),
    };

    let filter_start = Instant::now();
    let dictionary = Dictionary::filter(raw_words, &config.search);
    let filter_time = filter_start.elapsed();

    let search_start = Instant::now();
    let result = searcher.solve(&config.grid, &dictionary);
    let search_time = search_start.elapsed();

    info!(
        rows = config.grid.rows(),
        cols = config.grid.cols(),
        dictionary = dictionary.len(),
        words = result.total_words(),
        search_ms = search_time.as_millis(),
        "Solved puzzle"
    );

    let reports = build_reports(&result, &config.expected);
    for report in reports.iter().filter(|r| !r.matches_expected()) {
        warn!(
            len = report.len,
            found = report.words.len(),
            expected = report.expected,
            "Word count differs from puzzle"
        );
    }

    Ok(SolveResult {
        reports,
        dictionary_size: dictionary.len(),
        max_len: config.search.max_len(),
        threads: searcher.threads(),
        result,
        filter_time,
        search_time,
    })
}

/// Pair every found length and every published length
fn build_reports(result: &CategorizedResult, expected: &[ExpectedCount]) -> Vec<LengthReport> {
    let mut reports: BTreeMap<usize, LengthReport> = result
        .iter()
        .map(|(len, words)| {
            (
                len,
                LengthReport {
                    len,
                    words: words.to_vec(),
                    expected: None,
                },
            )
        })
        .collect();

    for count in expected {
        reports
            .entry(count.len)
            .or_insert_with(|| LengthReport {
                len: count.len,
                words: Vec::new(),
                expected: None,
            })
            .expected = Some(count.count);
    }

    reports.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_expected_counts;

    fn config() -> SolveConfig {
        let grid = Grid::from_rows(&["cats", "oree", "dnip", "xyzw"]).unwrap();
        SolveConfig::new(grid, SearchConfig::new(4).unwrap())
    }

    #[test]
    fn solve_finds_words() {
        let result = solve_puzzle(&config(), ["cat", "car", "cats", "ace", "x"]).unwrap();

        assert_eq!(result.result.words_of_len(3), ["car", "cat"]);
        assert_eq!(result.result.words_of_len(4), ["cats"]);
        assert_eq!(result.dictionary_size, 4);
        assert_eq!(result.max_len, 4);
        assert!(result.matches_expected());
    }

    #[test]
    fn solve_reports_expected_counts() {
        let mut config = config();
        config.expected = parse_expected_counts("3:2,4:2,5:1").unwrap();

        let result = solve_puzzle(&config, ["cat", "car", "cats"]).unwrap();

        let lens: Vec<usize> = result.reports.iter().map(|r| r.len).collect();
        assert_eq!(lens, vec![3, 4, 5]);
        assert!(result.reports[0].matches_expected());
        assert!(!result.reports[1].matches_expected());
        assert!(result.reports[2].words.is_empty());
        assert!(!result.matches_expected());
    }

    #[test]
    fn solve_with_dedicated_pool() {
        let mut config = config();
        config.threads = NonZeroUsize::new(2);

        let result = solve_puzzle(&config, ["cat", "cats"]).unwrap();
        assert_eq!(result.threads, 2);
        assert_eq!(result.result.total_words(), 2);
    }

    #[test]
    fn solve_with_empty_word_list() {
        let result = solve_puzzle(&config(), Vec::<String>::new()).unwrap();
        assert!(result.result.is_empty());
        assert!(result.reports.is_empty());
    }

    #[test]
    fn report_without_expected_always_matches() {
        let report = LengthReport {
            len: 3,
            words: vec!["cat".to_string()],
            expected: None,
        };
        assert!(report.matches_expected());
    }
}
