//! French (Snowball) vocabulary tests against the public API.

use stemmer_core::{stem, Language};

fn stemmed(word: &str) -> String {
    stem(word, Language::French)
}

#[test]
fn vocabulary() {
    assert_eq!(stemmed("communication"), "commun");
    assert_eq!(stemmed("chantais"), "chant");
    assert_eq!(stemmed("chevaux"), "cheval");
}

#[test]
fn hashed_y_reverts_to_i_in_step_3() {
    assert_eq!(stemmed("ennuyer"), "ennui");
}

#[test]
fn too_short_word_passes_through() {
    assert_eq!(stemmed("la"), "la");
}
