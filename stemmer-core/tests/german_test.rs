//! German (Snowball) vocabulary and option tests against the public API.

use stemmer_core::{stem, stem_with_options, Language, StemOptions};

fn stemmed(word: &str) -> String {
    stem(word, Language::German)
}

#[test]
fn scenario_from_spec() {
    assert_eq!(stemmed("aufeinanderfolgen"), "aufeinanderfolg");
}

#[test]
fn transliterate_umlauts_option_default_is_true() {
    assert!(StemOptions::default().transliterate_umlauts);
}

#[test]
fn umlaut_fold_through_double_vowel_step() {
    // "verhaeltnisse" -> umlaut fold -> "verhältnisse" -> step 1 drops "es",
    // and the "niss" guard trims the trailing "s" back off.
    assert_eq!(stemmed("verhaeltnisse"), "verhaltnis");
}

#[test]
fn ue_after_q_is_never_transliterated_either_way() {
    // The "ue -> ü" rule is skipped right after "q" regardless of the
    // option, so both settings take the same code path for this word.
    let on = stem_with_options("quelle", Language::German, &StemOptions::default());
    let off = stem_with_options(
        "quelle",
        Language::German,
        &StemOptions {
            transliterate_umlauts: false,
        },
    );
    assert_eq!(on, off);
}

#[test]
fn eszett_is_always_folded_to_ss_regardless_of_option() {
    let off = StemOptions {
        transliterate_umlauts: false,
    };
    let with_eszett = stem_with_options("straße", Language::German, &off);
    let with_ss = stem_with_options("strasse", Language::German, &off);
    assert_eq!(with_eszett, with_ss);
}
