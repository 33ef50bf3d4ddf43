//! Grouping of found words by length

use crate::core::{CategorizedResult, FoundWords};
use std::collections::BTreeMap;

/// Group words by length in characters, sorting each group ascending
///
/// The output depends only on the set's contents, never on the order the
/// words were discovered.
///
/// # Examples
/// ```
/// use grid_words::core::FoundWords;
/// use grid_words::solver::aggregate;
///
/// let found: FoundWords = ["cats", "cat", "car"].into_iter().map(String::from).collect();
/// let result = aggregate(found);
///
/// assert_eq!(result.words_of_len(3), ["car", "cat"]);
/// assert_eq!(result.words_of_len(4), ["cats"]);
/// ```
#[must_use]
pub fn aggregate(found: FoundWords) -> CategorizedResult {
    let mut groups: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for word in found {
        groups.entry(word.chars().count()).or_default().push(word);
    }

    for words in groups.values_mut() {
        words.sort_unstable();
    }

    CategorizedResult::from_groups(groups)
}
