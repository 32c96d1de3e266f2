//! Portuguese (Snowball) vocabulary tests against the public API.

use rstest::rstest;
use stemmer_core::{stem, Language};

fn stemmed(word: &str) -> String {
    stem(word, Language::Portuguese)
}

#[test]
fn scenario_from_spec() {
    assert_eq!(stemmed("qualidades"), "qualid");
}

#[rstest]
#[case("qualidades", "qualid")]
#[case("caminhávamos", "caminh")]
#[case("geologias", "geolog")]
#[case("felizmente", "feliz")]
#[case("feliz", "feliz")]
#[case("organização", "organiz")]
fn vocabulary(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(stemmed(input), expected);
}

#[test]
fn tilde_pre_encoding_round_trips_through_short_word() {
    assert_eq!(stemmed("lá"), "lá");
}

#[test]
fn step_3_deletes_final_i_after_ci_in_rv() {
    assert_eq!(stemmed("iniciava"), "inic");
}
