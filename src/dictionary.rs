//! `dictionary` — Module to load and index the word list for wordrack
//!
//! This module is responsible for reading a word list (either from a file, or
//! from an in-memory string) and turning it into the canonical-key index that
//! every query runs against.
//!
//! The parsing logic:
//! - Each line in the input is expected to hold one word.
//! - Leading/trailing whitespace is trimmed; empty lines are skipped silently.
//! - All words are normalized to lowercase.
//! - Each word is stored under its canonical key (letters sorted), so all
//!   anagrams of a word share one index entry.
//!
//! The resulting `Dictionary` is immutable: it is built once at startup and
//! every subsequent query borrows it read-only. There are no update
//! operations.

use std::collections::{HashMap, HashSet};

use crate::errors::SolverError;
use crate::letters::canonical_key;

/// Immutable index from canonical key to the set of original words sharing
/// that key.
///
/// Example: `"opst"` → `{"stop", "pots", "tops"}` — an exact-key `lookup`
/// returns every co-located anagram at once.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    index: HashMap<String, HashSet<String>>,
}

impl Dictionary {
    /// Build a dictionary from an in-memory word list, one word per line.
    ///
    /// Lines are trimmed and lowercased; empty lines are skipped. Each word
    /// is inserted into the set stored under its canonical key, creating the
    /// set on first insertion. Duplicate lines collapse naturally because the
    /// per-key container is a set.
    pub fn parse_from_str(contents: &str) -> Dictionary {
        let mut index: HashMap<String, HashSet<String>> = HashMap::new();

        for raw_line in contents.lines() {
            let word = raw_line.trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            index.entry(canonical_key(&word)).or_default().insert(word);
        }

        Dictionary { index }
    }

    /// Read a word list from a file path and build the index.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::DictionaryIo`] if the file cannot be read. The
    /// caller decides whether that is fatal; the interactive shell treats it
    /// as fatal since no index can be built.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Dictionary, SolverError> {
        let path_ref = path.as_ref();
        let data =
            std::fs::read_to_string(path_ref).map_err(|source| SolverError::DictionaryIo {
                path: path_ref.display().to_string(),
                source,
            })?;
        Ok(Self::parse_from_str(&data))
    }

    /// Look up the words stored under an exact canonical key.
    ///
    /// `None` means no word in the dictionary has that key; there is no
    /// partial or fuzzy matching.
    pub fn lookup(&self, key: &str) -> Option<&HashSet<String>> {
        self.index.get(key)
    }

    /// Number of distinct canonical keys in the index.
    pub fn key_count(&self) -> usize {
        self.index.len()
    }

    /// Total number of words across all keys.
    pub fn word_count(&self) -> usize {
        self.index.values().map(HashSet::len).sum()
    }

    /// True if the dictionary holds no words at all.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
