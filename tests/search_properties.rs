//! End-to-end properties of grid search
//!
//! Results are checked against an independent word-guided matcher that asks,
//! for each dictionary word, whether some simple adjacent path spells it.

use grid_words::core::{CategorizedResult, Dictionary, Grid, Position, SearchConfig};
use grid_words::solver::{Searcher, aggregate, search};
use grid_words::wordlists::SAMPLE;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use std::num::NonZeroUsize;

/// Check whether `word` can be traced through the grid without reusing a cell
fn spells(grid: &Grid, word: &str) -> bool {
    let letters: Vec<char> = word.chars().collect();
    grid.positions().any(|start| {
        let mut used = vec![start];
        trace(grid, &letters, start, &mut used)
    })
}

fn trace(grid: &Grid, letters: &[char], at: Position, used: &mut Vec<Position>) -> bool {
    if grid.letter(at) != letters[0] {
        return false;
    }
    if letters.len() == 1 {
        return true;
    }
    for next in grid.neighbors(at) {
        if used.contains(&next) {
            continue;
        }
        used.push(next);
        if trace(grid, &letters[1..], next, used) {
            return true;
        }
        used.pop();
    }
    false
}

fn random_grid(rng: &mut StdRng, rows: usize, cols: usize, alphabet: &[char]) -> Grid {
    let rows: Vec<Vec<String>> = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| alphabet[rng.random_range(0..alphabet.len())].to_string())
                .collect()
        })
        .collect();
    Grid::new(&rows).unwrap()
}

fn sample_dictionary(max_len: usize) -> Dictionary {
    Dictionary::filter(SAMPLE, &SearchConfig::new(max_len).unwrap())
}

fn all_words(result: &CategorizedResult) -> BTreeSet<String> {
    result
        .iter()
        .flat_map(|(_, words)| words.iter().cloned())
        .collect()
}

#[test]
fn example_grid_from_puzzle_description() {
    let grid = Grid::from_rows(&["cats", "oree", "dnip", "xyzw"]).unwrap();
    let dict = Dictionary::filter(["cat", "car", "cats", "ace"], &SearchConfig::new(4).unwrap());

    let result = aggregate(search(&grid, &dict));

    let expected: Vec<(usize, Vec<&str>)> = vec![(3, vec!["car", "cat"]), (4, vec!["cats"])];
    let actual: Vec<(usize, Vec<&str>)> = result
        .iter()
        .map(|(len, words)| (len, words.iter().map(String::as_str).collect()))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn empty_dictionary_gives_empty_result() {
    let grid = Grid::from_rows(&["cats", "oree"]).unwrap();
    let dict = Dictionary::filter(Vec::<&str>::new(), &SearchConfig::new(5).unwrap());
    assert!(aggregate(search(&grid, &dict)).is_empty());
}

#[test]
fn dictionary_with_only_long_words_gives_empty_result() {
    let grid = Grid::from_rows(&["stre", "eter"]).unwrap();
    let dict = Dictionary::filter(["street", "steerer"], &SearchConfig::new(5).unwrap());
    assert!(dict.is_empty());
    assert!(aggregate(search(&grid, &dict)).is_empty());
}

#[test]
fn single_row_and_single_column_grids() {
    let config = SearchConfig::new(4).unwrap();
    let dict = Dictionary::filter(["cat", "tac", "cab"], &config);

    let row = aggregate(search(&Grid::from_rows(&["xcatx"]).unwrap(), &dict));
    assert_eq!(row.words_of_len(3), ["cat", "tac"]);

    let column = aggregate(search(&Grid::from_rows(&["c", "a", "b"]).unwrap(), &dict));
    assert_eq!(column.words_of_len(3), ["cab"]);

    let lonely = aggregate(search(&Grid::from_rows(&["c"]).unwrap(), &dict));
    assert!(lonely.is_empty());
}

#[test]
fn sound_and_complete_on_random_grids() {
    let mut rng = StdRng::seed_from_u64(42);
    let alphabet: Vec<char> = "aeiorstnc".chars().collect();
    let dict = sample_dictionary(6);

    for _ in 0..20 {
        let grid = random_grid(&mut rng, 4, 4, &alphabet);
        let found = search(&grid, &dict);

        let expected: BTreeSet<String> = dict
            .iter()
            .filter(|word| spells(&grid, word))
            .map(String::from)
            .collect();
        let actual: BTreeSet<String> = found.iter().map(String::from).collect();

        assert_eq!(actual, expected, "grid:\n{grid}");
    }
}

#[test]
fn sound_and_complete_on_rectangular_grids() {
    let mut rng = StdRng::seed_from_u64(7);
    let alphabet: Vec<char> = "aeorstn".chars().collect();
    let dict = sample_dictionary(5);

    for (rows, cols) in [(2, 6), (5, 3), (1, 8), (3, 7)] {
        let grid = random_grid(&mut rng, rows, cols, &alphabet);
        let found = search(&grid, &dict);

        for word in dict.iter() {
            assert_eq!(found.contains(word), spells(&grid, word), "{word} in\n{grid}");
        }
    }
}

#[test]
fn deterministic_across_thread_counts() {
    let mut rng = StdRng::seed_from_u64(1234);
    let alphabet: Vec<char> = "aeiorstncdp".chars().collect();
    let dict = sample_dictionary(7);
    let grid = random_grid(&mut rng, 5, 5, &alphabet);

    let baseline = Searcher::new().solve(&grid, &dict);
    for threads in [1, 2, 3, 8] {
        let searcher = Searcher::with_threads(NonZeroUsize::new(threads).unwrap()).unwrap();
        for _ in 0..3 {
            assert_eq!(searcher.solve(&grid, &dict), baseline);
        }
    }
}

#[test]
fn prefix_pruning_does_not_change_results() {
    let mut rng = StdRng::seed_from_u64(99);
    let alphabet: Vec<char> = "aeiorstnc".chars().collect();
    let config = SearchConfig::new(6).unwrap();
    let plain = Dictionary::filter(SAMPLE, &config);
    let pruned = Dictionary::filter(SAMPLE, &config.with_prefix_pruning(true));

    for _ in 0..10 {
        let grid = random_grid(&mut rng, 4, 4, &alphabet);
        assert_eq!(search(&grid, &plain), search(&grid, &pruned));
    }
}

#[test]
fn groups_are_sorted_and_keyed_by_length() {
    let mut rng = StdRng::seed_from_u64(5);
    let alphabet: Vec<char> = "aeiorstn".chars().collect();
    let dict = sample_dictionary(6);
    let grid = random_grid(&mut rng, 4, 4, &alphabet);

    let result = aggregate(search(&grid, &dict));
    for (len, words) in result.iter() {
        assert!(!words.is_empty());
        assert!(words.iter().all(|w| w.chars().count() == len));
        assert!(words.windows(2).all(|pair| pair[0] < pair[1]));
    }
    assert_eq!(all_words(&result).len(), result.total_words());
}

#[test]
fn words_longer_than_max_len_are_never_reported() {
    // "stone" is traceable but exceeds the bound
    let grid = Grid::from_rows(&["ston", "xxxe"]).unwrap();
    let short = Dictionary::filter(["ton", "stone"], &SearchConfig::new(4).unwrap());
    let long = Dictionary::filter(["ton", "stone"], &SearchConfig::new(5).unwrap());

    let short_words = all_words(&aggregate(search(&grid, &short)));
    assert!(short_words.contains("ton"));
    assert!(!short_words.contains("stone"));

    assert!(all_words(&aggregate(search(&grid, &long))).contains("stone"));
}

#[test]
fn non_ascii_letters_are_searched() {
    let grid = Grid::from_rows(&["såg", "xöx"]).unwrap();
    let dict = Dictionary::filter(["såg", "gås", "sög"], &SearchConfig::new(3).unwrap());

    let words = all_words(&aggregate(search(&grid, &dict)));
    assert!(words.contains("såg"));
    assert!(words.contains("gås"));
    assert!(words.contains("sög"));
}
