//! Error types for the ambient (non-stemming) surface of the crate.
//!
//! The stemmers themselves are total functions (spec §7): this error
//! type exists only for `Language::parse`, which callers use when a
//! language arrives as configuration text rather than as the enum.

use std::fmt;

/// Returned by `Language::parse` when the given string does not name a
/// recognized language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageError {
    requested: String,
}

impl LanguageError {
    pub(crate) fn new(requested: &str) -> Self {
        Self {
            requested: requested.to_string(),
        }
    }

    /// The unrecognized input that produced this error.
    pub fn requested(&self) -> &str {
        &self.requested
    }
}

impl fmt::Display for LanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized stemmer language: {:?}", self.requested)
    }
}

impl std::error::Error for LanguageError {}
