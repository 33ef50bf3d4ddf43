//! Search results
//!
//! `FoundWords` is the deduplicated set accumulated by the explorers;
//! `CategorizedResult` is its final, length-grouped and sorted form.

use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

/// Deduplicated set of words discovered in a grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoundWords {
    words: FxHashSet<String>,
}

impl FoundWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a word; re-inserting an existing word is a no-op
    ///
    /// Returns `true` if the word was not already present.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    /// Absorb another set, keeping the larger allocation
    #[must_use]
    pub fn merge(mut self, mut other: Self) -> Self {
        if self.words.len() < other.words.len() {
            std::mem::swap(&mut self, &mut other);
        }
        self.words.extend(other.words);
        self
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl FromIterator<String> for FoundWords {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FoundWords {
    type Item = String;
    type IntoIter = std::collections::hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

/// Found words grouped by length (in characters), each group sorted
///
/// Built once from a finished [`FoundWords`] set and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedResult {
    groups: BTreeMap<usize, Vec<String>>,
}

impl CategorizedResult {
    pub(crate) const fn from_groups(groups: BTreeMap<usize, Vec<String>>) -> Self {
        Self { groups }
    }

    /// Words of the given length, alphabetically ordered
    #[must_use]
    pub fn words_of_len(&self, len: usize) -> &[String] {
        self.groups.get(&len).map_or(&[], Vec::as_slice)
    }

    /// Iterate over `(length, words)` groups in ascending length order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.groups
            .iter()
            .map(|(&len, words)| (len, words.as_slice()))
    }

    /// Word lengths that have at least one word, ascending
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.groups.keys().copied()
    }

    /// Length of the longest word found, if any
    #[must_use]
    pub fn longest(&self) -> Option<usize> {
        self.groups.keys().next_back().copied()
    }

    /// Total number of words across all groups
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Borrow the underlying length → words map
    #[must_use]
    pub const fn as_map(&self) -> &BTreeMap<usize, Vec<String>> {
        &self.groups
    }
}
