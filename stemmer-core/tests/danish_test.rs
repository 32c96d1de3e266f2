//! Danish (Snowball) vocabulary tests against the public API.

use stemmer_core::{stem, Language};

fn stemmed(word: &str) -> String {
    stem(word, Language::Danish)
}

#[test]
fn vocabulary() {
    assert_eq!(stemmed("hunde"), "hund");
    assert_eq!(stemmed("hundens"), "hunden");
}

#[test]
fn too_short_word_passes_through() {
    assert_eq!(stemmed("ja"), "ja");
}
