//! Grid Words - CLI
//!
//! Lists every word hidden in a letter grid, grouped by length.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use grid_words::{
    commands::{BenchmarkConfig, SolveConfig, run_benchmark, solve_puzzle},
    core::{Dictionary, Grid, SearchConfig, parse_expected_counts},
    output::{print_benchmark_result, print_grid, print_solve_result},
    solver::Searcher,
    wordlists::{
        SAMPLE,
        loader::{load_from_file, words_from_slice},
    },
};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "grid_words",
    about = "Find every word hidden in a Boggle-style letter grid",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Word list: JSON array or one word per line (default: embedded sample)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Worker threads (default: available parallelism)
    #[arg(short = 'j', long, global = true)]
    threads: Option<NonZeroUsize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a grid given as a run of letters
    Solve {
        /// Grid letters in row-major order; spaces and commas are ignored
        letters: String,

        /// Number of columns per row
        #[arg(short, long, default_value = "4")]
        cols: usize,

        /// Longest word length to search for
        #[arg(short, long)]
        max_len: Option<usize>,

        /// Published word counts per length, e.g. "3:12,4:8,5:3"
        #[arg(short, long)]
        expected: Option<String>,

        /// Skip paths that cannot lead to any word
        #[arg(short, long)]
        prune: bool,

        /// Show dictionary and timing details
        #[arg(short, long)]
        details: bool,
    },

    /// Benchmark search on random grids
    Benchmark {
        /// Number of random grids to search
        #[arg(short = 'n', long, default_value = "50")]
        grids: usize,

        /// Rows per grid
        #[arg(short, long, default_value = "4")]
        rows: usize,

        /// Columns per grid
        #[arg(short, long, default_value = "4")]
        cols: usize,

        /// Longest word length to search for
        #[arg(short, long, default_value = "8")]
        max_len: usize,

        /// Random seed
        #[arg(short, long, default_value = "24301")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let raw_words = load_words(cli.words.as_deref())?;

    match cli.command {
        Commands::Solve {
            letters,
            cols,
            max_len,
            expected,
            prune,
            details,
        } => run_solve_command(
            &letters,
            cols,
            max_len,
            expected.as_deref(),
            prune,
            details,
            cli.threads,
            &raw_words,
        ),
        Commands::Benchmark {
            grids,
            rows,
            cols,
            max_len,
            seed,
        } => {
            let config = BenchmarkConfig {
                grids,
                rows,
                cols,
                seed,
                show_progress: true,
            };
            run_benchmark_command(&config, max_len, cli.threads, &raw_words)
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the -v level
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_words(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load word list {}", path.display())),
        None => Ok(words_from_slice(SAMPLE)),
    }
}

#[allow(clippy::too_many_arguments)] // One parameter per CLI flag
#[allow(clippy::fn_params_excessive_bools)]
fn run_solve_command(
    letters: &str,
    cols: usize,
    max_len: Option<usize>,
    expected: Option<&str>,
    prune: bool,
    details: bool,
    threads: Option<NonZeroUsize>,
    raw_words: &[String],
) -> Result<()> {
    let grid = Grid::from_letters(letters, cols).context("Invalid grid")?;
    let expected = expected
        .map(parse_expected_counts)
        .transpose()
        .context("Invalid --expected")?
        .unwrap_or_default();

    // The path bound must come from the caller; there is no safe default
    let search = match (max_len, expected.is_empty()) {
        (Some(max_len), _) => SearchConfig::new(max_len)?,
        (None, false) => SearchConfig::from_expected_counts(&expected),
        (None, true) => bail!("Either --max-len or --expected is required"),
    }
    .with_prefix_pruning(prune);

    let config = SolveConfig {
        expected,
        threads,
        ..SolveConfig::new(grid, search)
    };

    print_grid(&config.grid);
    let result = solve_puzzle(&config, raw_words)?;
    print_solve_result(&result, details);
    Ok(())
}

fn run_benchmark_command(
    config: &BenchmarkConfig,
    max_len: usize,
    threads: Option<NonZeroUsize>,
    raw_words: &[String],
) -> Result<()> {
    let dictionary = Dictionary::filter(raw_words, &SearchConfig::new(max_len)?);
    let searcher = match threads {
        Some(threads) => Searcher::with_threads(threads)?,
        None => Searcher::new(),
    };

    println!(
        "Searching {} random {}x{} grids with {} words on {} threads...",
        config.grids,
        config.rows,
        config.cols,
        dictionary.len(),
        searcher.threads()
    );

    let result = run_benchmark(config, &searcher, &dictionary)?;
    print_benchmark_result(&result);
    Ok(())
}
