//! Grid Words
//!
//! Finds every dictionary word that can be traced through a Boggle-style
//! letter grid along a path of adjacent, non-repeated cells.
//!
//! # Quick Start
//!
//! ```rust
//! use grid_words::core::{Dictionary, Grid, SearchConfig};
//! use grid_words::solver::{aggregate, search};
//!
//! let grid = Grid::from_rows(&["cats", "oree", "dnip", "xyzw"]).unwrap();
//! let config = SearchConfig::new(4).unwrap();
//! let dictionary = Dictionary::filter(["cat", "car", "cats", "ace"], &config);
//!
//! let result = aggregate(search(&grid, &dictionary));
//! assert_eq!(result.words_of_len(3), ["car", "cat"]);
//! assert_eq!(result.words_of_len(4), ["cats"]);
//! ```

// Core domain types
pub mod core;

// Search algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
