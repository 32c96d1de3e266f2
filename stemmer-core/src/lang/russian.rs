//! Russian (Snowball) stemmer.
//!
//! Unlike the Latin-alphabet languages, Russian never runs the
//! full-width-to-narrow or Western possessive-stripping passes: neither
//! is meaningful over Cyrillic input.

use crate::char_class::RUSSIAN_VOWELS;
use crate::options::StemOptions;
use crate::region::{find_r2, find_russian_rv, Regions};
use crate::suffix::{delete_if_in, is_suffix, is_suffix_in, Region};
use crate::word::Word;

const MIN_LENGTH: usize = 2;

pub fn stem(word: &mut Word, _options: &StemOptions) {
    if word.len() < MIN_LENGTH {
        return;
    }

    let rv = find_russian_rv(word, RUSSIAN_VOWELS);
    let r2 = find_r2(word, RUSSIAN_VOWELS, rv);
    let mut regions = Regions { r1: 0, r2, rv };
    regions.clamp(word.len());

    if !step_1(word, &mut regions) {
        return;
    }
    step_2(word, &mut regions);
    step_3(word, &mut regions);
    step_4(word, &mut regions);
}

/// Step 1: perfective gerund (if found, no further step-1 rules run),
/// otherwise reflexive, then adjectival/participle, then (if not
/// reflexive) verb, then noun. Returns `false` if RV doesn't begin within
/// the word (too short to carry any suffix).
fn step_1(word: &mut Word, regions: &mut Regions) -> bool {
    if regions.rv >= word.len() {
        return false;
    }

    for suffix in ["вшись", "вши", "в"] {
        if is_suffix_in(word, suffix, Region::Rv, regions) {
            let start = word.len() - suffix.chars().count();
            if start >= 1 && matches!(word.at(start - 1).unwrap(), 'а' | 'я' | 'А' | 'Я') {
                word.erase(start, word.len());
                regions.clamp(word.len());
                return true;
            }
        }
    }
    for suffix in ["ившись", "ывшись", "ивши", "ывши", "ив", "ыв"] {
        if delete_if_in(word, suffix, Region::Rv, regions, false) {
            return true;
        }
    }

    let reflexive = delete_if_in(word, "ся", Region::Rv, regions, false)
        || delete_if_in(word, "сь", Region::Rv, regions, false);

    const PARTICIPLE: &[&str] = &["ивш", "ывш", "ующ", "ем", "нн", "вш", "ющ", "щ"];
    for suffix in PARTICIPLE {
        if delete_if_in(word, suffix, Region::Rv, regions, false) {
            return true;
        }
    }

    const ADJECTIVE: &[&str] = &[
        "ими", "ыми", "его", "ого", "ему", "ому", "их", "ых", "ую", "юю", "ая", "яя", "ою", "ею",
        "ий", "ый", "ой", "ем", "им", "ым", "ом", "ее", "ие", "ые", "ое", "ей",
    ];
    for suffix in ADJECTIVE {
        if delete_if_in(word, suffix, Region::Rv, regions, false) {
            return true;
        }
    }

    if !reflexive {
        const VERB: &[&str] = &[
            "ейте", "уйте", "ите", "йте", "ешь", "нно", "ете", "ла", "на", "ли", "й", "л", "ем",
            "н", "ло", "но", "ет", "ют", "ны", "ть",
        ];
        for suffix in VERB {
            if delete_if_in(word, suffix, Region::Rv, regions, false) {
                return true;
            }
        }

        const NOUN: &[&str] = &[
            "иями", "ями", "иях", "иям", "ами", "ием", "ях", "ов", "ем", "ам", "ом", "ах", "ев",
            "ию", "ью", "ия", "ья", "ье", "ей", "ой", "ий", "ый", "ь", "ы", "а", "е", "и", "о",
            "у", "ю", "я",
        ];
        for suffix in NOUN {
            if delete_if_in(word, suffix, Region::Rv, regions, false) {
                return true;
            }
        }
    }

    true
}

/// Step 2: a residual `и` left over from the noun/adjective endings.
fn step_2(word: &mut Word, regions: &mut Regions) {
    delete_if_in(word, "и", Region::Rv, regions, false);
}

/// Step 3: derivational endings in R2.
fn step_3(word: &mut Word, regions: &mut Regions) {
    for suffix in ["ость", "ост"] {
        if delete_if_in(word, suffix, Region::R2, regions, false) {
            return;
        }
    }
}

/// Step 4: a trailing soft sign, a doubled `нн` collapsing to one `н`, or
/// the superlative `ейше`.
fn step_4(word: &mut Word, regions: &mut Regions) {
    if delete_if_in(word, "ь", Region::Rv, regions, false) {
        return;
    }
    if is_suffix(word, "нн") {
        word.pop();
        regions.clamp(word.len());
        return;
    }
    delete_if_in(word, "ейше", Region::Rv, regions, false);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stemmed(input: &str) -> String {
        let mut w = Word::new(input);
        stem(&mut w, &StemOptions::default());
        w.to_string()
    }

    #[test]
    fn noun_case_ending_strips() {
        assert_eq!(stemmed("книги"), "книг");
    }

    #[test]
    fn words_too_short_pass_through() {
        assert_eq!(stemmed("он"), "он");
    }

    #[test]
    fn perfective_gerund_group_2_matches_vshis_variant() {
        assert_eq!(stemmed("получившись"), "получ");
    }
}
