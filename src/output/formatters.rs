//! Formatting utilities for terminal output

use crate::core::Grid;

/// Render the grid as an uppercase ASCII table
///
/// ```text
/// +---+---+
/// | C | A |
/// +---+---+
/// | T | S |
/// +---+---+
/// ```
#[must_use]
pub fn grid_table(grid: &Grid) -> String {
    let separator = format!("+{}", "---+".repeat(grid.cols()));
    let mut table = String::new();

    for row in 0..grid.rows() {
        table.push_str(&separator);
        table.push('\n');
        table.push('|');
        for letter in grid.row_letters(row) {
            table.push(' ');
            table.extend(letter.to_uppercase());
            table.push_str(" |");
        }
        table.push('\n');
    }
    table.push_str(&separator);
    table.push('\n');

    table
}

/// Join words into a comma separated line
#[must_use]
pub fn word_list(words: &[String]) -> String {
    words.join(", ")
}

/// Format a found count, with the published count when there is one
#[must_use]
pub fn count_ratio(found: usize, expected: Option<usize>) -> String {
    match expected {
        Some(expected) => format!("{found}/{expected}"),
        None => format!("{found}"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
