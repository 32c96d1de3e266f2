//! Multi-language suffix-stripping stemmers (Porter/Snowball family).
//!
//! `stemmer_core` reduces an inflected word to its stem for one of twelve
//! supported European languages, plus a no-op `Language::None` selection.
//! Stemming is a pure, deterministic, single-word-in/single-word-out
//! transform: no I/O, no shared state, no locale detection, no
//! tokenization. Callers own splitting text into words and picking a
//! language; this crate only does the suffix-stripping.
//!
//! ```
//! use stemmer_core::{stem, Language};
//!
//! assert_eq!(stem("consignment", Language::English), "consign");
//! assert_eq!(stem("qualidades", Language::Portuguese), "qualid");
//! assert_eq!(stem("whatever", Language::None), "whatever");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! word, language → dispatch → normalize → regions → hash → steps → unhash → stem
//! ```
//!
//! Each per-language module (`lang::english`, `lang::german`, ...)
//! implements an ordered cascade of region-guarded suffix rewrites over a
//! shared [`word::Word`] buffer, [`region::Regions`] locator, and
//! [`hash`] sentinel layer. See `lang::mod` for the dispatcher.

mod char_class;
mod error;
mod hash;
mod lang;
mod options;
mod possessive;
mod region;
mod suffix;
mod word;

pub use error::LanguageError;
pub use options::StemOptions;
pub use word::Word;

use std::fmt;

/// The languages this crate can stem, plus the no-op `None` selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    /// No-op: returns the input unchanged.
    None,
    Danish,
    Dutch,
    English,
    Finnish,
    French,
    German,
    Italian,
    Norwegian,
    Portuguese,
    Russian,
    Spanish,
    Swedish,
}

impl Language {
    /// Every supported language, `None` included. Useful for "for every
    /// language" property tests and vocabulary sweeps.
    pub const ALL: &'static [Language] = &[
        Language::None,
        Language::Danish,
        Language::Dutch,
        Language::English,
        Language::Finnish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Norwegian,
        Language::Portuguese,
        Language::Russian,
        Language::Spanish,
        Language::Swedish,
    ];

    /// Parses a language name (case-insensitively, ASCII only). Accepts
    /// either the English language name (`"english"`) or, for `None`,
    /// the literal `"none"`. Returns [`LanguageError`] for anything else.
    ///
    /// This is the one fallible surface in the crate: the dispatcher and
    /// per-language stemmers are total functions once a `Language` value
    /// is in hand.
    pub fn parse(name: &str) -> Result<Language, LanguageError> {
        let lowered = name.to_ascii_lowercase();
        match lowered.as_str() {
            "none" => Ok(Language::None),
            "danish" => Ok(Language::Danish),
            "dutch" => Ok(Language::Dutch),
            "english" => Ok(Language::English),
            "finnish" => Ok(Language::Finnish),
            "french" => Ok(Language::French),
            "german" => Ok(Language::German),
            "italian" => Ok(Language::Italian),
            "norwegian" => Ok(Language::Norwegian),
            "portuguese" => Ok(Language::Portuguese),
            "russian" => Ok(Language::Russian),
            "spanish" => Ok(Language::Spanish),
            "swedish" => Ok(Language::Swedish),
            _ => Err(LanguageError::new(name)),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Language::None => "none",
            Language::Danish => "danish",
            Language::Dutch => "dutch",
            Language::English => "english",
            Language::Finnish => "finnish",
            Language::French => "french",
            Language::German => "german",
            Language::Italian => "italian",
            Language::Norwegian => "norwegian",
            Language::Portuguese => "portuguese",
            Language::Russian => "russian",
            Language::Spanish => "spanish",
            Language::Swedish => "swedish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stems `word` for `language` and returns the result as a `String`.
///
/// Equivalent to building a [`Word`], calling [`stem_word`] with default
/// [`StemOptions`], and converting back. `Language::None` returns `word`
/// unchanged; every other language applies its ordered suffix-rewrite
/// cascade (see the `lang` submodules).
pub fn stem(word: &str, language: Language) -> String {
    stem_with_options(word, language, &StemOptions::default())
}

/// Like [`stem`], but with explicit [`StemOptions`] (currently only
/// German's `transliterate_umlauts` flag).
pub fn stem_with_options(word: &str, language: Language, options: &StemOptions) -> String {
    let mut buffer = Word::new(word);
    lang::dispatch(language, &mut buffer, options);
    buffer.to_string()
}

/// Stems a [`Word`] buffer in place. The lower-level entry point `stem`
/// and `stem_with_options` build on; useful to callers who already hold
/// a `Word` and want to avoid a round-trip through `String`.
pub fn stem_word(word: &mut Word, language: Language, options: &StemOptions) {
    lang::dispatch(language, word, options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_identity() {
        assert_eq!(stem("whatever", Language::None), "whatever");
        assert_eq!(stem("", Language::None), "");
    }

    #[test]
    fn parse_round_trips_every_language_name() {
        for lang in Language::ALL {
            let parsed = Language::parse(&lang.to_string()).unwrap();
            assert_eq!(parsed, *lang);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Language::parse("ENGLISH").unwrap(), Language::English);
        assert_eq!(Language::parse("Swedish").unwrap(), Language::Swedish);
    }

    #[test]
    fn parse_rejects_unknown_language() {
        let err = Language::parse("klingon").unwrap_err();
        assert_eq!(err.requested(), "klingon");
    }

    #[test]
    fn facade_matches_scenario_table() {
        assert_eq!(stem("consignment", Language::English), "consign");
        assert_eq!(stem("generate", Language::English), "generat");
        assert_eq!(stem("relational", Language::English), "relat");
        assert_eq!(stem("qualidades", Language::Portuguese), "qualid");
    }

    #[test]
    fn german_option_disables_umlaut_transliteration() {
        let opts = StemOptions {
            transliterate_umlauts: false,
        };
        // With transliteration off, "ae"/"oe"/"ue" never become umlauts,
        // so their stemming paths diverge from the default-options run.
        let with = stem("aufeinanderfolgen", Language::German);
        let without = stem_with_options(
            "aufeinanderfolgen",
            Language::German,
            &opts,
        );
        assert_eq!(with, without, "word has no ae/oe/ue/ß to transliterate");
    }
}
