//! Letter grid representation
//!
//! A Grid is an immutable R×C matrix of single lowercase letters. Adjacency
//! (8-connectivity) is computed once at construction so explorers can walk
//! neighbor lists without bounds arithmetic.

use super::error::{GridError, Result};
use std::fmt;

/// A (row, column) cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether two cells touch horizontally, vertically or diagonally
    ///
    /// A cell is never adjacent to itself.
    ///
    /// # Examples
    /// ```
    /// use grid_words::core::Position;
    ///
    /// let a = Position::new(1, 1);
    /// assert!(a.is_adjacent(Position::new(0, 0)));
    /// assert!(a.is_adjacent(Position::new(2, 1)));
    /// assert!(!a.is_adjacent(a));
    /// assert!(!a.is_adjacent(Position::new(3, 1)));
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.row.abs_diff(other.row) <= 1
            && self.col.abs_diff(other.col) <= 1
            && (self.row != other.row || self.col != other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Immutable rectangular letter grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
    adjacency: Vec<Vec<usize>>,
}

impl Grid {
    /// Build a grid from rows of cells
    ///
    /// Each cell must contain exactly one alphabetic character. Letters are
    /// normalized to lowercase.
    ///
    /// # Errors
    /// Returns `GridError` if:
    /// - There are no rows, or the first row is empty
    /// - Rows differ in length
    /// - A cell is empty, holds more than one character, or is not a letter
    pub fn new<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GridError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(rows.len() * width);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRow {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }

            for (c, cell) in row.iter().enumerate() {
                cells.push(parse_cell(cell.as_ref()).ok_or_else(|| GridError::InvalidCell {
                    row: r,
                    col: c,
                    cell: cell.as_ref().to_string(),
                })?);
            }
        }

        Ok(Self::from_cells(rows.len(), width, cells))
    }

    /// Build a grid from a flat run of letters split into rows of `cols`
    ///
    /// Whitespace and commas are ignored, so `"c,a,t,s"` and `"cats"` are
    /// equivalent.
    ///
    /// # Errors
    /// Returns `GridError::EmptyGrid` if there are no letters or `cols` is zero,
    /// `GridError::LayoutMismatch` if the letter count is not a multiple of
    /// `cols`, and `GridError::InvalidCell` for non-letters.
    ///
    /// # Examples
    /// ```
    /// use grid_words::core::Grid;
    ///
    /// let grid = Grid::from_letters("CAT SOR EEN", 3).unwrap();
    /// assert_eq!(grid.rows(), 3);
    /// assert_eq!(grid.cols(), 3);
    ///
    /// assert!(Grid::from_letters("cats", 3).is_err());
    /// ```
    pub fn from_letters(letters: &str, cols: usize) -> Result<Self> {
        let cells: Vec<String> = letters
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(String::from)
            .collect();

        if cols == 0 || cells.is_empty() {
            return Err(GridError::EmptyGrid);
        }
        if cells.len() % cols != 0 {
            return Err(GridError::LayoutMismatch {
                letters: cells.len(),
                cols,
            });
        }

        let rows: Vec<Vec<String>> = cells.chunks(cols).map(<[String]>::to_vec).collect();
        Self::new(&rows)
    }

    /// Build a grid where each string is one row of letters
    ///
    /// # Errors
    /// Same conditions as [`Grid::new`].
    ///
    /// # Examples
    /// ```
    /// use grid_words::core::{Grid, Position};
    ///
    /// let grid = Grid::from_rows(&["cat", "ore"]).unwrap();
    /// assert_eq!(grid.letter(Position::new(1, 2)), 'e');
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let rows: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.chars().map(String::from).collect())
            .collect();
        Self::new(&rows)
    }

    fn from_cells(rows: usize, cols: usize, cells: Vec<char>) -> Self {
        let adjacency = (0..rows * cols)
            .map(|index| {
                let here = Position::new(index / cols, index % cols);
                let row_range = here.row.saturating_sub(1)..=(here.row + 1).min(rows - 1);
                row_range
                    .flat_map(|r| {
                        let col_range = here.col.saturating_sub(1)..=(here.col + 1).min(cols - 1);
                        col_range.map(move |c| Position::new(r, c))
                    })
                    .filter(|&there| here.is_adjacent(there))
                    .map(|there| there.row * cols + there.col)
                    .collect()
            })
            .collect();

        Self {
            rows,
            cols,
            cells,
            adjacency,
        }
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (R×C)
    #[inline]
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Get the letter at a position
    ///
    /// # Panics
    /// Panics if the position is outside the grid
    #[inline]
    #[must_use]
    pub fn letter(&self, pos: Position) -> char {
        self.cells[self.index_of(pos)]
    }

    /// Iterate over all positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).map(|index| self.position_of(index))
    }

    /// Iterate over the in-bounds 8-connected neighbors of a position
    ///
    /// # Panics
    /// Panics if the position is outside the grid
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        self.adjacency[self.index_of(pos)]
            .iter()
            .map(|&index| self.position_of(index))
    }

    /// Iterate over the letters of one row
    pub fn row_letters(&self, row: usize) -> impl Iterator<Item = char> + '_ {
        self.cells[row * self.cols..(row + 1) * self.cols]
            .iter()
            .copied()
    }

    #[inline]
    pub(crate) fn index_of(&self, pos: Position) -> usize {
        assert!(
            pos.row < self.rows && pos.col < self.cols,
            "position {pos} outside {}x{} grid",
            self.rows,
            self.cols
        );
        pos.row * self.cols + pos.col
    }

    #[inline]
    pub(crate) const fn position_of(&self, index: usize) -> Position {
        Position::new(index / self.cols, index % self.cols)
    }

    #[inline]
    pub(crate) fn letter_at(&self, index: usize) -> char {
        self.cells[index]
    }

    #[inline]
    pub(crate) fn adjacent(&self, index: usize) -> &[usize] {
        &self.adjacency[index]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for letter in self.row_letters(row) {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

/// Parse one cell, returning its lowercase letter
fn parse_cell(cell: &str) -> Option<char> {
    let lower = cell.to_lowercase();
    let mut chars = lower.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_alphabetic() => Some(letter),
        _ => None,
    }
}
