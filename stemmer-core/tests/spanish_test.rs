//! Spanish (Snowball) vocabulary tests against the public API.

use stemmer_core::{stem, Language};

fn stemmed(word: &str) -> String {
    stem(word, Language::Spanish)
}

#[test]
fn vocabulary() {
    assert_eq!(stemmed("rápidamente"), "rápid");
    assert_eq!(stemmed("caminaban"), "camin");
    assert_eq!(stemmed("actividad"), "activ");
}

#[test]
fn too_short_word_passes_through() {
    assert_eq!(stemmed("yo"), "yo");
}
