//! Finnish (Snowball) stemmer.

use crate::char_class::{
    self, FINNISH_CONSONANTS, FINNISH_VOWELS, FINNISH_VOWELS_NO_Y, FINNISH_VOWELS_SIMPLE,
};
use crate::options::StemOptions;
use crate::possessive::remove_possessive_suffix;
use crate::region::{find_r1, find_r2, Regions};
use crate::suffix::{delete_if_in, is_suffix, is_suffix_in, Region};
use crate::word::Word;

const MIN_LENGTH: usize = 3;

/// Restricted vowel set for step 1's genitive-plural `ien`/`iden`/`ten` guard.
const GENITIVE_PLURAL_GUARD: &[char] = FINNISH_VOWELS_NO_Y;

pub fn stem(word: &mut Word, _options: &StemOptions) {
    word.map_in_place(char_class::full_width_to_narrow);
    remove_possessive_suffix(word);

    if word.len() < MIN_LENGTH {
        return;
    }

    let r1 = find_r1(word, FINNISH_VOWELS);
    let r2 = find_r2(word, FINNISH_VOWELS, r1);
    let mut regions = Regions { r1, r2, rv: 0 };
    regions.clamp(word.len());

    step_1(word, &mut regions);
    step_2(word, &mut regions);
    step_3(word, &mut regions);
    step_4(word, &mut regions);
    step_6(word, &mut regions);
}

fn step_1(word: &mut Word, regions: &mut Regions) {
    for suffix in ["kaan", "kään", "kin", "ko", "kö", "han", "hän", "pa", "pä", "kse"] {
        if delete_if_in(word, suffix, Region::R1, regions, false) {
            break;
        }
    }
    if word.len() >= 4 {
        for suffix in ["nsa", "nsä", "mme", "nne"] {
            if delete_if_in(word, suffix, Region::R1, regions, false) {
                return;
            }
        }
        if is_suffix_in(word, "si", Region::R1, regions) && !is_suffix(word, "ksi") {
            word.erase_last(2);
            regions.clamp(word.len());
            return;
        }
        if is_suffix_in(word, "ni", Region::R1, regions) {
            word.erase_last(2);
            regions.clamp(word.len());
        }
    }
}

/// Step 2: genitive, partitive, illative, comparative, and possessive
/// endings.
fn step_2(word: &mut Word, regions: &mut Regions) {
    if is_suffix_in(word, "ien", Region::R1, regions) && word.len() >= 4 {
        let before = word.at(word.len() - 4).unwrap();
        if !char_class::is_one_of(before, GENITIVE_PLURAL_GUARD) {
            word.erase_last(3);
            regions.clamp(word.len());
            return;
        }
    }
    for suffix in ["den", "tten"] {
        if is_suffix_in(word, suffix, Region::R1, regions) && word.len() >= suffix.chars().count() + 1
        {
            let idx = word.len() - suffix.chars().count() - 1;
            if char_class::is_one_of(word.at(idx).unwrap(), FINNISH_CONSONANTS) {
                word.erase_last(suffix.chars().count());
                regions.clamp(word.len());
                return;
            }
        }
    }
    for suffix in ["tta", "ttä"] {
        if is_suffix_in(word, suffix, Region::R1, regions) && word.len() >= 1 {
            word.erase_last(3);
            regions.clamp(word.len());
            return;
        }
    }
    for suffix in ["ta", "tä", "ssa", "ssä", "sta", "stä", "lla", "llä", "lta", "ltä", "na", "nä"] {
        if delete_if_in(word, suffix, Region::R1, regions, false) {
            return;
        }
    }
    if is_suffix_in(word, "eja", Region::R1, regions) || is_suffix_in(word, "ejä", Region::R1, regions) {
        word.erase_last(3);
        regions.clamp(word.len());
        return;
    }
    for suffix in ["a", "ä"] {
        if is_suffix_in(word, suffix, Region::R1, regions) && word.len() >= 2 {
            let before = word.at(word.len() - 2).unwrap();
            if char_class::is_one_of(before, FINNISH_VOWELS_SIMPLE) {
                word.erase_last(1);
                regions.clamp(word.len());
                return;
            }
        }
    }
    if delete_if_in(word, "in", Region::R1, regions, false) {
        return;
    }
    for suffix in ["lle", "ine"] {
        if delete_if_in(word, suffix, Region::R1, regions, false) {
            return;
        }
    }
}

/// Step 3: case endings.
fn step_3(word: &mut Word, regions: &mut Regions) {
    for suffix in ["siin", "seen", "tten", "hän", "hen"] {
        if is_suffix_in(word, suffix, Region::R1, regions) {
            let before = word.at(word.len() - suffix.chars().count() - 1);
            if before.is_some_and(|c| char_class::is_one_of(c, FINNISH_VOWELS)) {
                word.erase_last(suffix.chars().count());
                regions.clamp(word.len());
                return;
            }
        }
    }
    for suffix in ["han", "hin", "hon", "hun", "hyn"] {
        if delete_if_in(word, suffix, Region::R1, regions, false) {
            return;
        }
    }
    for suffix in ["minen", "nsi", "ssa", "ssä", "sta", "stä", "lla", "llä", "lta", "ltä", "lle", "na", "nä", "ksi", "ton", "tön", "a", "ä", "i", "n"] {
        if delete_if_in(word, suffix, Region::R1, regions, false) {
            return;
        }
    }
}

/// Step 4: plural `t` (in R1, preceded by a vowel) and a handful of
/// residual comparative/superlative endings.
fn step_4(word: &mut Word, regions: &mut Regions) {
    if is_suffix_in(word, "t", Region::R1, regions)
        && word.len() >= 2
        && char_class::is_one_of(word.at(word.len() - 2).unwrap(), FINNISH_VOWELS)
    {
        word.erase_last(1);
        regions.clamp(word.len());
        step_2(word, regions);
    }
}

/// Step 6: `i`/`j` endings, and vowel-doubling undone when the resulting
/// stem ends in a doubled vowel.
fn step_6(word: &mut Word, regions: &mut Regions) {
    if is_suffix_in(word, "oj", Region::R2, regions) || is_suffix_in(word, "ej", Region::R2, regions) {
        word.erase_last(1);
        regions.clamp(word.len());
    }
    if word.len() >= 2 {
        let last = word.at(word.len() - 1).unwrap();
        let before = word.at(word.len() - 2).unwrap();
        if char_class::eq_ignore_case(last, before) && char_class::is_one_of(last, FINNISH_VOWELS) {
            word.pop();
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
    fn partitive_ta_ending_strips() {
        assert_eq!(stemmed("taloa"), "talo");
    }

    #[test]
    fn inessive_ssa_ending_strips() {
        assert_eq!(stemmed("talossa"), "talo");
    }

    #[test]
    fn words_too_short_pass_through() {
        assert_eq!(stemmed("on"), "on");
    }
}
