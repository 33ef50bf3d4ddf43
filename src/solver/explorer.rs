//! Depth-bounded path exploration from a single starting cell
//!
//! Enumerates every simple path (no cell reused) that starts at one cell and
//! holds at most `max_len` cells, checking the letters spelled so far against
//! the dictionary at every step.
//!
//! # Algorithm
//! An explicit stack of frames, one per cell on the current path. Each frame
//! remembers which neighbor to try next. Entering a cell sets its bit in the
//! visited mask and pushes its letter onto the prefix; leaving undoes both,
//! so sibling branches never see each other's state.

use crate::core::{Dictionary, FoundWords, Grid, Position};

/// One cell on the current path
#[derive(Debug, Clone, Copy)]
struct Frame {
    cell: usize,
    next_neighbor: usize,
}

/// Visited-cell bitmask, one bit per grid cell
#[derive(Debug, Clone)]
struct CellSet {
    bits: Vec<u64>,
}

impl CellSet {
    fn with_capacity(cells: usize) -> Self {
        Self {
            bits: vec![0; cells.div_ceil(64)],
        }
    }

    #[inline]
    fn contains(&self, cell: usize) -> bool {
        self.bits[cell / 64] & (1u64 << (cell % 64)) != 0
    }

    #[inline]
    fn insert(&mut self, cell: usize) {
        self.bits[cell / 64] |= 1u64 << (cell % 64);
    }

    #[inline]
    fn remove(&mut self, cell: usize) {
        self.bits[cell / 64] &= !(1u64 << (cell % 64));
    }
}

/// Mutable state of the path being walked
struct PathState<'a> {
    grid: &'a Grid,
    dictionary: &'a Dictionary,
    visited: CellSet,
    prefix: String,
    found: FoundWords,
}

impl<'a> PathState<'a> {
    fn new(grid: &'a Grid, dictionary: &'a Dictionary, max_len: usize) -> Self {
        Self {
            grid,
            dictionary,
            visited: CellSet::with_capacity(grid.cell_count()),
            prefix: String::with_capacity(max_len * 4),
            found: FoundWords::new(),
        }
    }

    /// Step onto a cell and record the prefix if it is a word
    ///
    /// Returns whether the path is worth extending further.
    fn enter(&mut self, cell: usize) -> bool {
        self.visited.insert(cell);
        self.prefix.push(self.grid.letter_at(cell));

        if self.dictionary.contains(&self.prefix) {
            self.found.insert(self.prefix.as_str());
        }
        self.dictionary.is_viable_prefix(&self.prefix)
    }

    fn leave(&mut self, cell: usize) {
        self.visited.remove(cell);
        self.prefix.pop();
    }
}

/// Find every dictionary word spelled by a simple path starting at `start`
///
/// Paths hold at most `max_len` cells. Results do not depend on the order
/// neighbors are visited.
///
/// # Panics
/// Panics if `start` is outside the grid
///
/// # Examples
/// ```
/// use grid_words::core::{Dictionary, Grid, Position, SearchConfig};
/// use grid_words::solver::explore;
///
/// let grid = Grid::from_rows(&["ca", "rt"]).unwrap();
/// let config = SearchConfig::new(3).unwrap();
/// let dict = Dictionary::filter(["cat", "car", "art", "tar"], &config);
///
/// let found = explore(&grid, &dict, Position::new(0, 0), config.max_len());
/// assert!(found.contains("cat"));
/// assert!(found.contains("car"));
/// assert!(!found.contains("art")); // starts elsewhere
/// ```
#[must_use]
pub fn explore(
    grid: &Grid,
    dictionary: &Dictionary,
    start: Position,
    max_len: usize,
) -> FoundWords {
    let start = grid.index_of(start);
    if max_len == 0 || dictionary.is_empty() {
        return FoundWords::new();
    }

    let mut path = PathState::new(grid, dictionary, max_len);
    let mut stack: Vec<Frame> = Vec::with_capacity(max_len);

    if path.enter(start) && max_len > 1 {
        stack.push(Frame {
            cell: start,
            next_neighbor: 0,
        });
    }

    // Only paths that may still grow are kept on the stack
    while let Some(frame) = stack.last_mut() {
        match grid.adjacent(frame.cell).get(frame.next_neighbor).copied() {
            Some(cell) => {
                frame.next_neighbor += 1;
                if path.visited.contains(cell) {
                    continue;
                }
                if path.enter(cell) && stack.len() + 1 < max_len {
                    stack.push(Frame {
                        cell,
                        next_neighbor: 0,
                    });
                } else {
                    path.leave(cell);
                }
            }
            None => {
                let cell = frame.cell;
                stack.pop();
                path.leave(cell);
            }
        }
    }

    path.found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SearchConfig;

    fn dictionary(words: &[&str], max_len: usize) -> Dictionary {
        Dictionary::filter(words, &SearchConfig::new(max_len).unwrap())
    }

    fn explore_all(grid: &Grid, dict: &Dictionary, max_len: usize) -> FoundWords {
        grid.positions()
            .map(|start| explore(grid, dict, start, max_len))
            .fold(FoundWords::new(), FoundWords::merge)
    }

    #[test]
    fn finds_straight_and_diagonal_paths() {
        // c a t
        // o r e
        // d e n
        let grid = Grid::from_rows(&["cat", "ore", "den"]).unwrap();
        let dict = dictionary(&["cat", "car", "core", "ten", "rot"], 4);

        let found = explore(&grid, &dict, Position::new(0, 0), 4);
        assert!(found.contains("cat"));
        assert!(found.contains("car")); // c -> a -> r (straight down)
        assert!(found.contains("core"));
        assert!(!found.contains("ten")); // starts at t
        assert!(!found.contains("rot")); // starts at r
    }

    #[test]
    fn never_reuses_a_cell() {
        // "aba" would need the single 'a' twice
        let grid = Grid::from_rows(&["ab"]).unwrap();
        let dict = dictionary(&["aba", "bab"], 3);
        assert!(explore_all(&grid, &dict, 3).is_empty());
    }

    #[test]
    fn repeated_letters_in_distinct_cells() {
        let grid = Grid::from_rows(&["aba"]).unwrap();
        let dict = dictionary(&["aba", "bab"], 3);
        let found = explore_all(&grid, &dict, 3);
        assert!(found.contains("aba"));
        assert!(!found.contains("bab"));
    }

    #[test]
    fn respects_max_len() {
        let grid = Grid::from_rows(&["cats"]).unwrap();
        let dict = dictionary(&["cat", "cats"], 4);

        let short = explore(&grid, &dict, Position::new(0, 0), 3);
        assert!(short.contains("cat"));
        assert!(!short.contains("cats"));

        let long = explore(&grid, &dict, Position::new(0, 0), 4);
        assert!(long.contains("cats"));
    }

    #[test]
    fn non_adjacent_letters_are_not_joined() {
        // c . a
        // . . .
        // t . .
        let grid = Grid::from_rows(&["cxa", "xxx", "txx"]).unwrap();
        let dict = dictionary(&["cat"], 3);
        assert!(explore_all(&grid, &dict, 3).is_empty());
    }

    #[test]
    fn single_cell_grid_finds_nothing() {
        let grid = Grid::from_rows(&["a"]).unwrap();
        let dict = dictionary(&["aaa"], 3);
        assert!(explore(&grid, &dict, Position::new(0, 0), 3).is_empty());
    }

    #[test]
    fn empty_dictionary_finds_nothing() {
        let grid = Grid::from_rows(&["cat", "ore"]).unwrap();
        let dict = dictionary(&[], 3);
        assert!(explore_all(&grid, &dict, 3).is_empty());
    }

    #[test]
    fn zero_max_len_finds_nothing() {
        let grid = Grid::from_rows(&["cat"]).unwrap();
        let dict = dictionary(&["cat"], 3);
        assert!(explore(&grid, &dict, Position::new(0, 0), 0).is_empty());
    }

    #[test]
    fn backtracking_restores_state_between_branches() {
        // Both "tea" and "tee" branch from the same "te" prefix
        // t e
        // a e
        let grid = Grid::from_rows(&["te", "ae"]).unwrap();
        let dict = dictionary(&["tea", "tee", "eat", "ate"], 3);
        let found = explore_all(&grid, &dict, 3);
        assert_eq!(found.len(), 4);
    }

    #[test]
    fn prefix_pruning_finds_the_same_words() {
        let grid = Grid::from_rows(&["cats", "oree", "tsna", "ride"]).unwrap();
        let words = ["cat", "cats", "core", "rose", "cots", "rest", "tore", "arise"];
        let plain = dictionary(&words, 5);
        let pruned = dictionary(&words, 5).with_prefix_index();

        assert_eq!(explore_all(&grid, &plain, 5), explore_all(&grid, &pruned, 5));
    }

    #[test]
    fn large_grid_beyond_one_mask_word() {
        // 9x9 = 81 cells, visited mask spans two u64 words
        let rows: Vec<String> = (0..9)
            .map(|r| if r == 8 { "xxxxxxcat".to_string() } else { "x".repeat(9) })
            .collect();
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        let grid = Grid::from_rows(&rows).unwrap();
        let dict = dictionary(&["cat"], 3);

        let found = explore(&grid, &dict, Position::new(8, 6), 3);
        assert!(found.contains("cat"));
    }

    #[test]
    fn cell_set_tracks_bits_independently() {
        let mut set = CellSet::with_capacity(130);
        set.insert(0);
        set.insert(64);
        set.insert(129);
        assert!(set.contains(0) && set.contains(64) && set.contains(129));
        assert!(!set.contains(1) && !set.contains(63));

        set.remove(64);
        assert!(!set.contains(64));
        assert!(set.contains(129));
    }
}
