//! Dispatcher-facing tests: `Language::None` identity and
//! `Language::parse` round-tripping every `Language::ALL` member.

use stemmer_core::{stem, Language};

#[test]
fn none_selection_is_always_identity() {
    for word in ["whatever", "", "xyz", "générale", "книга"] {
        assert_eq!(stem(word, Language::None), word);
    }
}

#[test]
fn parse_round_trips_every_known_language() {
    for lang in Language::ALL {
        let name = lang.to_string();
        let parsed = Language::parse(&name).expect("every Display name must parse back");
        assert_eq!(parsed, *lang);
    }
}

#[test]
fn parse_is_case_insensitive_and_trims_nothing() {
    assert_eq!(Language::parse("English").unwrap(), Language::English);
    assert_eq!(Language::parse("RUSSIAN").unwrap(), Language::Russian);
    assert!(Language::parse(" english").is_err());
}

#[test]
fn parse_rejects_unrecognized_tags() {
    let err = Language::parse("esperanto").unwrap_err();
    assert_eq!(err.requested(), "esperanto");
    assert!(err.to_string().contains("esperanto"));
}

#[test]
fn dispatch_never_panics_on_empty_or_tiny_input() {
    for lang in Language::ALL {
        for word in ["", "a", "ab"] {
            let _ = stem(word, *lang);
        }
    }
}
