//! wordrack — find the words hiding in a rack of letters.
//!
//! The library builds a canonical-key index over a word list once, then
//! answers three queries against it: the longest buildable word(s), every
//! buildable word, and every ordered two-word phrase whose combined letters
//! fit in the rack.

pub mod combine;
pub mod dictionary;
pub mod errors;
pub mod letters;
pub mod log;
pub mod search;
