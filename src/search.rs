//! Breadth-first subset search over the lattice of letter deletions.
//!
//! Starting from the canonical key of the rack, the search repeatedly deletes
//! one character occurrence at a time, exploring strictly shorter keys level
//! by level. Because every child is exactly one character shorter than its
//! parent and the frontier is plain FIFO, keys are dequeued in non-increasing
//! length order — so in longest-word mode the first dictionary hit is
//! guaranteed to be at maximal length and the search can stop there.
//!
//! A visited set keyed by canonical form bounds the work: deleting different
//! occurrences of the same letter collapses to one child, and the same subset
//! reached along different deletion orders is only expanded once. Without it
//! the lattice walk would redo an exponential amount of work.
//!
//! # Examples
//!
//! ```
//! use wordrack::dictionary::Dictionary;
//! use wordrack::search;
//!
//! let dict = Dictionary::parse_from_str("cat\nact\na\nat");
//!
//! let longest = search::find_longest_word("tacx", &dict);
//! assert_eq!(longest.len(), 2); // "cat" and "act" share the winning key
//!
//! let all = search::find_all_words("tacx", &dict);
//! assert_eq!(all.len(), 4);
//! ```

use std::collections::{HashSet, VecDeque};

use log::debug;

use crate::dictionary::Dictionary;
use crate::letters::canonical_key;

/// How a subset search treats a dictionary hit.
enum Mode {
    /// Stop at the first key with a hit and return exactly that key's words.
    Longest,
    /// Accumulate hits and keep going until the frontier is exhausted.
    All,
}

/// Find the longest dictionary word(s) buildable from `rack`'s letters.
///
/// If the winning canonical key maps to several words (co-located anagrams
/// such as "stop"/"pots"/"tops"), all of them are returned. An empty rack, or
/// a rack from which no word can be built, yields an empty set.
pub fn find_longest_word(rack: &str, dict: &Dictionary) -> HashSet<String> {
    run(rack, dict, Mode::Longest)
}

/// Find every dictionary word buildable from `rack`'s letters.
///
/// Exhausts the whole deletion lattice; duplicates across keys collapse
/// because the result is a set.
pub fn find_all_words(rack: &str, dict: &Dictionary) -> HashSet<String> {
    run(rack, dict, Mode::All)
}

fn run(rack: &str, dict: &Dictionary, mode: Mode) -> HashSet<String> {
    let mut results = HashSet::new();

    let start = canonical_key(rack);
    if start.is_empty() {
        return results;
    }

    let mut frontier: VecDeque<String> = VecDeque::new();
    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(start.clone());
    frontier.push_back(start);

    while let Some(key) = frontier.pop_front() {
        if let Some(words) = dict.lookup(&key) {
            debug!("hit at key '{key}' ({} word(s))", words.len());
            results.extend(words.iter().cloned());
            if matches!(mode, Mode::Longest) {
                // FIFO order guarantees this first hit is at maximal length.
                return results;
            }
        }

        // Children: delete one character occurrence at each position. The key
        // is already sorted, so each splice is still sorted — no re-sort.
        // Deleting different occurrences of a repeated letter produces the
        // same child; the visited set collapses them.
        for (i, c) in key.char_indices() {
            let mut child = String::with_capacity(key.len() - c.len_utf8());
            child.push_str(&key[..i]);
            child.push_str(&key[i + c.len_utf8()..]);
            if visited.insert(child.clone()) {
                frontier.push_back(child);
            }
        }
    }

    debug!("lattice exhausted: {} visited key(s)", visited.len());
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::parse_from_str(&words.join("\n"))
    }

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_all_words_scenario() {
        let dict = dict(&["cat", "act", "a", "at", "cats", "tacs"]);
        assert_eq!(
            find_all_words("tacx", &dict),
            set(&["cat", "act", "a", "at"])
        );
    }

    #[test]
    fn test_longest_word_scenario() {
        let dict = dict(&["cat", "act", "a", "at", "cats", "tacs"]);
        assert_eq!(find_longest_word("tacx", &dict), set(&["cat", "act"]));
    }

    #[test]
    fn test_longest_word_full_rack_match() {
        let dict = dict(&["stop", "pots", "top"]);
        // the rack itself is a dictionary key; no deletion happens
        assert_eq!(find_longest_word("opst", &dict), set(&["stop", "pots"]));
    }

    #[test]
    fn test_longest_returns_only_first_matching_key() {
        // "dog" and "cat" are both length 3 but live under different keys;
        // longest mode returns exactly one key's word set
        let dict = dict(&["dog", "cat"]);
        let result = find_longest_word("dogcat", &dict);
        assert_eq!(result.len(), 1);
        assert!(result == set(&["dog"]) || result == set(&["cat"]));
    }

    #[test]
    fn test_longest_length_equals_max_over_all_words() {
        let dict = dict(&["a", "at", "act", "cat", "dog", "tuna"]);
        let longest = find_longest_word("tacnu", &dict);
        let all = find_all_words("tacnu", &dict);

        let max_len = all.iter().map(|w| w.chars().count()).max().unwrap();
        assert!(!longest.is_empty());
        for w in &longest {
            assert_eq!(w.chars().count(), max_len);
        }
    }

    #[test]
    fn test_rack_letters_usable_at_most_once() {
        let dict = dict(&["banana", "ban", "nab"]);
        // "banan" lacks the third 'a', so "banana" is out of reach
        let all = find_all_words("banan", &dict);
        assert_eq!(all, set(&["ban", "nab"]));
    }

    #[test]
    fn test_case_insensitive_rack() {
        let dict = dict(&["cat"]);
        assert_eq!(find_all_words("TAC", &dict), set(&["cat"]));
    }

    #[test]
    fn test_empty_rack() {
        let dict = dict(&["cat", "a"]);
        assert!(find_all_words("", &dict).is_empty());
        assert!(find_longest_word("", &dict).is_empty());
    }

    #[test]
    fn test_no_shared_letters() {
        let dict = dict(&["cat", "dog"]);
        assert!(find_all_words("xyz", &dict).is_empty());
        assert!(find_longest_word("xyz", &dict).is_empty());
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::parse_from_str("");
        assert!(find_all_words("tacx", &dict).is_empty());
        assert!(find_longest_word("tacx", &dict).is_empty());
    }

    #[test]
    fn test_characters_outside_alphabet_never_match() {
        let dict = dict(&["cat", "at"]);
        // the digit sorts into the key but no dictionary key contains it,
        // so matches only appear once it has been deleted
        assert_eq!(find_all_words("c4at", &dict), set(&["cat", "at"]));
    }

    #[test]
    fn test_all_words_monotonic_in_dictionary_size() {
        let before = find_all_words("tacx", &dict(&["cat", "a"]));
        let after = find_all_words("tacx", &dict(&["cat", "a", "at"]));
        assert!(before.is_subset(&after));
    }

    #[test]
    fn test_repeated_letters_deduplicate_children() {
        // "aaab" has only three distinct proper children per level; the
        // search must still find everything without blowing up
        let dict = dict(&["ab", "a"]);
        assert_eq!(find_all_words("aaab", &dict), set(&["ab", "a"]));
    }
}
