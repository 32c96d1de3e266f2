//! Norwegian (Snowball) stemmer.

use crate::char_class::{self, NORWEGIAN_VOWELS};
use crate::options::StemOptions;
use crate::possessive::remove_possessive_suffix;
use crate::region::{find_r1, Regions};
use crate::suffix::{delete_if_in, is_suffix_in, Region};
use crate::word::Word;

const MIN_LENGTH: usize = 3;

const S_ENDING_VALID: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'l', 'm', 'n', 'o', 'p', 'r', 't', 'v', 'z', 'B', 'C', 'D',
    'F', 'G', 'H', 'J', 'L', 'M', 'N', 'O', 'P', 'R', 'T', 'V', 'Z',
];

const STEP_1_SUFFIXES: &[&str] = &[
    "hetenes", "hetene", "hetens", "heter", "heten", "endes", "ande", "ende", "edes", "enes",
    "erte", "ers", "ets", "het", "ast", "ene", "ens", "ert", "en", "ar", "er", "es", "et", "a",
    "e",
];

const STEP_3_SUFFIXES: &[&str] = &["hetslov", "elov", "slov", "leg", "eleg", "ig", "elig", "eig"];

pub fn stem(word: &mut Word, _options: &StemOptions) {
    word.map_in_place(char_class::full_width_to_narrow);
    remove_possessive_suffix(word);

    if word.len() < MIN_LENGTH {
        return;
    }

    let r1 = find_r1(word, NORWEGIAN_VOWELS);
    if r1 == word.len() {
        return;
    }
    let r1 = r1.max(3);
    let mut regions = Regions { r1, r2: word.len(), rv: 0 };
    regions.clamp(word.len());

    step_1(word, &mut regions);
    step_2(word, &mut regions);
    step_3(word, &mut regions);
}

fn step_1(word: &mut Word, regions: &mut Regions) {
    for suffix in STEP_1_SUFFIXES {
        if delete_if_in(word, suffix, Region::R1, regions, false) {
            return;
        }
    }
    if is_suffix_in(word, "s", Region::R1, regions)
        && word.len() >= 2
        && char_class::is_one_of(word.at(word.len() - 2).unwrap(), S_ENDING_VALID)
    {
        word.erase_last(1);
        regions.clamp(word.len());
    }
}

fn step_2(word: &mut Word, regions: &mut Regions) {
    for suffix in ["dt", "vt"] {
        if is_suffix_in(word, suffix, Region::R1, regions) {
            word.erase_last(1);
            regions.clamp(word.len());
            return;
        }
    }
}

fn step_3(word: &mut Word, regions: &mut Regions) {
    for suffix in STEP_3_SUFFIXES {
        if delete_if_in(word, suffix, Region::R1, regions, false) {
            return;
        }
    }
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
    fn definite_plural_ending_strips() {
        assert_eq!(stemmed("guttene"), "gutt");
    }

    #[test]
    fn dt_vt_collapse_in_step_2() {
        assert_eq!(stemmed("godt"), "god");
    }

    #[test]
    fn words_too_short_pass_through() {
        assert_eq!(stemmed("nå"), "nå");
    }
}
