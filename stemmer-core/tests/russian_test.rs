//! Russian (Snowball) vocabulary tests against the public API.
//!
//! Russian input is Cyrillic and never runs the Western full-width or
//! possessive-stripping passes.

use stemmer_core::{stem, Language};

fn stemmed(word: &str) -> String {
    stem(word, Language::Russian)
}

#[test]
fn vocabulary() {
    assert_eq!(stemmed("книги"), "книг");
}

#[test]
fn too_short_word_passes_through() {
    assert_eq!(stemmed("он"), "он");
}

#[test]
fn perfective_gerund_group_2_matches_vshis_variant() {
    assert_eq!(stemmed("получившись"), "получ");
}
