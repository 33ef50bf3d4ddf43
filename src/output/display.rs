//! Display functions for command results

use super::formatters::{count_ratio, create_progress_bar, grid_table, word_list};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::Grid;
use colored::Colorize;

/// Print the puzzle grid
pub fn print_grid(grid: &Grid) {
    println!("\n{}", "Letters:".bright_cyan().bold());
    print!("{}", grid_table(grid));
}

/// Print the words found in a puzzle, one block per word length
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORDS FOUND".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if result.reports.is_empty() {
        println!("\n{}", "No words found.".yellow());
    }

    for report in &result.reports {
        let ratio = count_ratio(report.words.len(), report.expected);
        let ratio = if report.matches_expected() {
            ratio.green()
        } else {
            ratio.red()
        };

        println!(
            "\n{} ({ratio} words)",
            format!("{} letters", report.len).bright_yellow().bold()
        );
        if !report.words.is_empty() {
            println!("{}", word_list(&report.words));
        }
    }

    println!();
    if let Some(longest) = result.result.longest() {
        println!("Longest word: {longest} letters");
    }
    println!(
        "Total:        {} words in {:.3}s",
        result.result.total_words(),
        result.search_time.as_secs_f64()
    );

    if verbose {
        println!("Dictionary:   {} words (max {} letters)", result.dictionary_size, result.max_len);
        println!("Threads:      {}", result.threads);
        println!("Filter time:  {:.3}s", result.filter_time.as_secs_f64());
    }

    if result.reports.iter().any(|r| r.expected.is_some()) {
        if result.matches_expected() {
            println!("{}", "✅ All word counts match the puzzle".green().bold());
        } else {
            println!(
                "{}",
                "❌ Some word counts differ from the puzzle".red().bold()
            );
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Grids searched:   {}", result.total_grids);
    println!(
        "   Average words:    {}",
        format!("{:.1}", result.average_words).bright_yellow().bold()
    );
    println!(
        "   Fewest words:     {}",
        format!("{}", result.min_words).yellow()
    );
    println!(
        "   Most words:       {}",
        format!("{}", result.max_words).green()
    );
    println!("   Grids/second:     {:.1}", result.grids_per_second);

    println!("\n⏱  {}", "Search time:".bright_cyan().bold());
    let slowest = result
        .plain_time
        .max(result.pruned_time)
        .as_secs_f64();
    for (label, time) in [("plain", result.plain_time), ("pruned", result.pruned_time)] {
        let bar = create_progress_bar(time.as_secs_f64(), slowest, 40);
        println!("   {label:>6}: {} {:.3}s", bar.green(), time.as_secs_f64());
    }

    println!();
    if result.mismatches == 0 {
        println!("{}", "✅ Pruned and plain search agree on every grid".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} grids differ between pruned and plain search", result.mismatches)
                .red()
                .bold()
        );
    }
}
