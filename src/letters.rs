//! Letter-multiset primitives: canonical anagram keys and sorted-multiset
//! subtraction.
//!
//! A canonical key is the letters of a string lowercased and sorted ascending
//! by code point. Two strings are anagram-equivalent iff their canonical keys
//! are equal strings, which is the equivalence test used by the dictionary
//! index and the subset search.

use crate::errors::SolverError;

/// Compute the canonical key of `s`: lowercase its characters and sort them
/// ascending. Total function; idempotent; permutation-invariant.
pub fn canonical_key(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().flat_map(char::to_lowercase).collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// Subtract `shorter`'s letter multiset from `longer`'s.
///
/// Both inputs must already be canonical (sorted). Callers are expected to
/// guarantee `shorter` ⊆ `longer`; under that contract the result is the
/// sorted string of letters left over after removing one occurrence of each
/// `shorter` letter.
///
/// Both strings being sorted makes a lockstep walk sufficient: whenever the
/// current `shorter` letter equals the current `longer` letter, that `longer`
/// letter is dropped and both advance; otherwise only `longer` advances. A
/// `shorter` letter that never finds a match is skipped without consuming
/// anything — callers must not rely on that.
pub fn subtract(longer: &str, shorter: &str) -> String {
    let mut remaining = String::with_capacity(longer.len());
    let mut pending = shorter.chars().peekable();

    for c in longer.chars() {
        match pending.peek() {
            Some(&next) if next == c => {
                pending.next();
            }
            _ => remaining.push(c),
        }
    }

    remaining
}

/// Validate an interactive rack: exactly `expected_len` characters, all
/// alphabetic. The shell rejects and re-prompts on failure instead of
/// running a query.
pub fn validate_rack(rack: &str, expected_len: usize) -> Result<(), SolverError> {
    let actual = rack.chars().count();
    if actual != expected_len {
        return Err(SolverError::RackLength {
            expected: expected_len,
            actual,
        });
    }
    if let Some(invalid_char) = rack.chars().find(|c| !c.is_alphabetic()) {
        return Err(SolverError::RackCharacter { invalid_char });
    }
    Ok(())
}
