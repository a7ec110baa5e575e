//! Error types for dictionary loading and rack validation.
//!
//! Each variant carries a stable code for documentation lookup:
//!
//! - W001: `DictionaryIo` (dictionary source unreadable)
//! - W002: `RackLength` (rack is not the configured length)
//! - W003: `RackCharacter` (rack contains a non-letter)
//!
//! Queries themselves never fail: a query that finds nothing returns an
//! empty set, not an error.

use std::io;

/// Unified error type for the solver surface.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The dictionary source could not be read. Fatal for the session,
    /// since no index can be built without it.
    #[error("failed to read dictionary from '{path}': {source}")]
    DictionaryIo {
        path: String,
        #[source]
        source: io::Error,
    },

    /// An interactive rack had the wrong number of characters. The shell
    /// reports this and re-prompts.
    #[error("rack must be exactly {expected} letters (got {actual})")]
    RackLength { expected: usize, actual: usize },

    /// An interactive rack contained something other than a letter.
    #[error("rack may only contain letters (found '{invalid_char}')")]
    RackCharacter { invalid_char: char },
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::DictionaryIo { .. } => "W001",
            SolverError::RackLength { .. } => "W002",
            SolverError::RackCharacter { .. } => "W003",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::DictionaryIo { .. } => {
                Some("Check the path, or pass one explicitly with --dictionary")
            }
            SolverError::RackLength { .. } => {
                Some("Enter exactly the configured number of letters (see --rack-len)")
            }
            SolverError::RackCharacter { .. } => Some("Only letters are allowed in a rack"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(
    base_msg: &str,
    code: &str,
    help: Option<&str>,
) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
