//! Norwegian (Snowball) vocabulary tests against the public API.

use stemmer_core::{stem, Language};

fn stemmed(word: &str) -> String {
    stem(word, Language::Norwegian)
}

#[test]
fn vocabulary() {
    assert_eq!(stemmed("guttene"), "gutt");
    assert_eq!(stemmed("godt"), "god");
}

#[test]
fn too_short_word_passes_through() {
    assert_eq!(stemmed("nå"), "nå");
}
