//! Benchmark command
//!
//! Searches a batch of seeded random grids, timing plain and prefix-pruned
//! search and checking that both find the same words.

use crate::core::{Dictionary, Grid, Result};
use crate::solver::Searcher;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};
use tracing::warn;

/// Configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub grids: usize,
    pub rows: usize,
    pub cols: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            grids: 50,
            rows: 4,
            cols: 4,
            seed: 0x5eed,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_grids: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    pub plain_time: Duration,
    pub pruned_time: Duration,
    pub mismatches: usize,
    pub grids_per_second: f64,
}

/// Run the benchmark against a filtered dictionary
///
/// Grid letters are drawn from the dictionary's own letters, weighted by how
/// often they occur, so random grids contain a realistic number of words.
///
/// # Errors
///
/// Returns `GridError::EmptyGrid` if `rows` or `cols` is zero.
pub fn run_benchmark(
    config: &BenchmarkConfig,
    searcher: &Searcher,
    dictionary: &Dictionary,
) -> Result<BenchmarkResult> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let letters = letter_pool(dictionary);
    let pruned = if dictionary.has_prefix_index() {
        dictionary.clone()
    } else {
        dictionary.clone().with_prefix_index()
    };

    let pb = if config.show_progress {
        ProgressBar::new(config.grids as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let mut plain_time = Duration::ZERO;
    let mut pruned_time = Duration::ZERO;
    let mut total_words = 0;
    let mut min_words = usize::MAX;
    let mut max_words = 0;
    let mut mismatches = 0;

    for index in 0..config.grids {
        let grid = random_grid(&mut rng, config.rows, config.cols, &letters)?;

        let start = Instant::now();
        let plain_found = searcher.search(&grid, dictionary);
        plain_time += start.elapsed();

        let start = Instant::now();
        let pruned_found = searcher.search(&grid, &pruned);
        pruned_time += start.elapsed();

        if plain_found != pruned_found {
            mismatches += 1;
            warn!(index, %grid, "Pruned search disagrees with plain search");
        }

        let words = plain_found.len();
        total_words += words;
        min_words = min_words.min(words);
        max_words = max_words.max(words);

        pb.set_message(format!("{words} words"));
        pb.inc(1);
    }

    pb.finish_and_clear();

    let total_grids = config.grids;
    Ok(BenchmarkResult {
        total_grids,
        total_words,
        average_words: total_words as f64 / total_grids.max(1) as f64,
        min_words: if total_grids == 0 { 0 } else { min_words },
        max_words,
        plain_time,
        pruned_time,
        mismatches,
        grids_per_second: total_grids as f64 / plain_time.as_secs_f64().max(f64::EPSILON),
    })
}

/// Every letter of every dictionary word, or a-z for an empty dictionary
fn letter_pool(dictionary: &Dictionary) -> Vec<char> {
    let letters: Vec<char> = dictionary.iter().flat_map(str::chars).collect();
    if letters.is_empty() {
        ('a'..='z').collect()
    } else {
        letters
    }
}

fn random_grid<R: Rng>(rng: &mut R, rows: usize, cols: usize, letters: &[char]) -> Result<Grid> {
    let rows: Vec<Vec<String>> = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| letters[rng.random_range(0..letters.len())].to_string())
                .collect()
        })
        .collect();
    Grid::new(&rows)
}
