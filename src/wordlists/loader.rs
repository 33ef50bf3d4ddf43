//! Word list loading utilities
//!
//! Raw lists come either as a JSON array of strings or as plain text with
//! one word per line. Entries are returned as-is; length and alphabet
//! filtering happens in [`Dictionary::filter`](crate::core::Dictionary::filter).

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load a raw word list from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or `InvalidData` if it
/// looks like JSON but is not an array of strings.
///
/// # Examples
/// ```no_run
/// use grid_words::wordlists::loader::load_from_file;
///
/// let words = load_from_file("svenska-ord.json").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_word_list(&content)?;
    debug!(path = %path.display(), words = words.len(), "Loaded word list");
    Ok(words)
}

/// Parse word list text
///
/// Content starting with `[` is decoded as a JSON array of strings. Anything
/// else is split into lines, skipping blank lines and `#` comments.
///
/// # Errors
///
/// Returns `InvalidData` for malformed JSON.
///
/// # Examples
/// ```
/// use grid_words::wordlists::loader::parse_word_list;
///
/// let json = parse_word_list(r#"["katt", "hund"]"#).unwrap();
/// assert_eq!(json, vec!["katt", "hund"]);
///
/// let text = parse_word_list("katt\n\nhund\n").unwrap();
/// assert_eq!(text, vec!["katt", "hund"]);
/// ```
pub fn parse_word_list(content: &str) -> io::Result<Vec<String>> {
    let trimmed = content.trim_start_matches('\u{feff}').trim();

    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }

    Ok(trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}

/// Convert an embedded string slice to owned words
///
/// # Examples
/// ```
/// use grid_words::wordlists::loader::words_from_slice;
/// use grid_words::wordlists::SAMPLE;
///
/// let words = words_from_slice(SAMPLE);
/// assert_eq!(words.len(), SAMPLE.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_array() {
        let words = parse_word_list(r#"["abborre", "åsna", "ö"]"#).unwrap();
        assert_eq!(words, vec!["abborre", "åsna", "ö"]);
    }

    #[test]
    fn json_entries_are_not_filtered() {
        let words = parse_word_list(r#"["a b", "x-y", "OK"]"#).unwrap();
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_word_list(r#"["abborre", 5]"#).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        assert!(parse_word_list("[\"unterminated").is_err());
    }

    #[test]
    fn parses_lines_skipping_blanks_and_comments() {
        let words = parse_word_list("# header\ncat\n\n  dog  \r\n# note\nbird").unwrap();
        assert_eq!(words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn strips_byte_order_mark() {
        let words = parse_word_list("\u{feff}[\"cat\"]").unwrap();
        assert_eq!(words, vec!["cat"]);
    }

    #[test]
    fn empty_content() {
        assert!(parse_word_list("").unwrap().is_empty());
        assert!(parse_word_list("[]").unwrap().is_empty());
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("definitely/not/here.json").is_err());
    }

    #[test]
    fn words_from_slice_copies_all() {
        let words = words_from_slice(&["cat", "dog"]);
        assert_eq!(words, vec!["cat".to_string(), "dog".to_string()]);
    }
}
