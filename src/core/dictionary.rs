//! Length-bounded word set
//!
//! The dictionary is the filtered subset of a raw word list that can appear
//! in the current puzzle. Membership is an exact-match hash lookup.

use super::config::SearchConfig;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Immutable set of candidate words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
    prefixes: Option<FxHashSet<String>>,
    max_len: usize,
}

impl Dictionary {
    /// Reduce a raw word collection to the words usable for this puzzle
    ///
    /// A word is kept iff, after lowercasing, it consists only of alphabetic
    /// characters and its length in characters lies in
    /// `config.min_len()..=config.max_len()`. Duplicates collapse. When the
    /// config enables prefix pruning, the prefix index is built as well.
    ///
    /// # Examples
    /// ```
    /// use grid_words::core::{Dictionary, SearchConfig};
    ///
    /// let config = SearchConfig::new(4).unwrap();
    /// let dict = Dictionary::filter(["cat", "Cat", "at", "cart", "carts", "c-a-t"], &config);
    ///
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.contains("cat"));
    /// assert!(dict.contains("cart"));
    /// ```
    pub fn filter<I, S>(raw_words: I, config: &SearchConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = 0usize;
        let words: FxHashSet<String> = raw_words
            .into_iter()
            .inspect(|_| seen += 1)
            .filter_map(|word| {
                let word = word.as_ref().to_lowercase();
                let len = word.chars().count();
                (config.accepts_len(len) && word.chars().all(char::is_alphabetic)).then_some(word)
            })
            .collect();

        debug!(
            raw = seen,
            kept = words.len(),
            min_len = config.min_len(),
            max_len = config.max_len(),
            "Filtered word list"
        );

        let dictionary = Self {
            words,
            prefixes: None,
            max_len: config.max_len(),
        };
        if config.prune_prefixes() {
            dictionary.with_prefix_index()
        } else {
            dictionary
        }
    }

    /// Build the index of every proper prefix of every word
    ///
    /// With the index present, explorers stop extending a path whose letters
    /// cannot lead to any word. The words found are unchanged.
    #[must_use]
    pub fn with_prefix_index(mut self) -> Self {
        let mut prefixes = FxHashSet::default();
        for word in &self.words {
            for (end, _) in word.char_indices().skip(1) {
                prefixes.insert(word[..end].to_string());
            }
        }
        debug!(prefixes = prefixes.len(), "Built prefix index");
        self.prefixes = Some(prefixes);
        self
    }

    /// Exact membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Check whether a path spelling `prefix` is worth extending
    ///
    /// Always true when no prefix index was built.
    #[inline]
    #[must_use]
    pub fn is_viable_prefix(&self, prefix: &str) -> bool {
        self.prefixes
            .as_ref()
            .is_none_or(|prefixes| prefixes.contains(prefix))
    }

    #[inline]
    #[must_use]
    pub const fn has_prefix_index(&self) -> bool {
        self.prefixes.is_some()
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

    /// Configured maximum word length, which also bounds path length
    #[inline]
    #[must_use]
    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    /// Length in characters of the longest word, or 0 when empty
    #[must_use]
    pub fn max_word_len(&self) -> usize {
        self.words
            .iter()
            .map(|word| word.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
