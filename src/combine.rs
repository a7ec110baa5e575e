//! Two-word phrase enumeration.
//!
//! A phrase is an ordered pair of dictionary words whose combined letters fit
//! inside the rack. The first word is drawn from an all-words search over the
//! rack; subtracting its letters from the rack leaves a smaller multiset, and
//! a second all-words search over that leftover supplies every valid second
//! word. Both orders of a pair appear whenever both words are reachable as
//! first words — the outer loop treats them symmetrically.

use std::collections::HashSet;

use crate::dictionary::Dictionary;
use crate::letters::{canonical_key, subtract};
use crate::search::find_all_words;

/// Find every ordered two-word phrase buildable from `rack`'s letters.
///
/// Phrases are returned as `"first second"` strings. No recursion beyond two
/// words; no de-duplication beyond exact-phrase set semantics.
pub fn find_combined_words(rack: &str, dict: &Dictionary) -> HashSet<String> {
    let first_words = find_all_words(rack, dict);
    let rack_key = canonical_key(rack);

    let mut phrases = HashSet::new();
    for first in &first_words {
        // first was found as a subset of the rack, so the subtraction
        // precondition holds by construction
        let leftover = subtract(&rack_key, &canonical_key(first));
        for second in find_all_words(&leftover, dict) {
            phrases.insert(format!("{first} {second}"));
        }
    }
    phrases
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::parse_from_str(&words.join("\n"))
    }

    #[test]
    fn test_combined_words_scenario() {
        let dict = dict(&["dog", "cat", "god"]);
        let phrases = find_combined_words("dogcat", &dict);

        assert!(phrases.contains("dog cat"));
        assert!(phrases.contains("god cat"));
        assert!(phrases.contains("cat dog"));
        assert!(phrases.contains("cat god"));
        assert_eq!(phrases.len(), 4);
    }

    #[test]
    fn test_phrases_never_exceed_rack_letters() {
        let dict = dict(&["dog", "cat", "god", "toad"]);
        let rack_key = canonical_key("dogcat");

        for phrase in find_combined_words("dogcat", &dict) {
            let used = canonical_key(&phrase.replace(' ', ""));
            // every phrase letter must come out of the rack
            assert_eq!(subtract(&rack_key, &used).chars().count() + used.chars().count(), rack_key.chars().count());
            assert!(!phrase.contains("toad"));
        }
    }

    #[test]
    fn test_pair_can_leave_letters_unused() {
        let dict = dict(&["dog", "cat"]);
        let phrases = find_combined_words("dogcatx", &dict);

        assert!(phrases.contains("dog cat"));
        assert!(phrases.contains("cat dog"));
    }

    #[test]
    fn test_same_word_twice_requires_both_copies() {
        let dict = dict(&["at"]);

        // one copy of each letter: "at at" is unreachable
        assert!(find_combined_words("at", &dict).is_empty());
        // two copies: the doubled phrase appears
        let phrases = find_combined_words("atat", &dict);
        assert_eq!(phrases.len(), 1);
        assert!(phrases.contains("at at"));
    }

    #[test]
    fn test_no_phrases_when_no_second_word_fits() {
        let dict = dict(&["cat"]);
        assert!(find_combined_words("catx", &dict).is_empty());
    }

    #[test]
    fn test_empty_rack_and_empty_dictionary() {
        assert!(find_combined_words("", &dict(&["cat"])).is_empty());
        assert!(find_combined_words("dogcat", &Dictionary::parse_from_str("")).is_empty());
    }
}
