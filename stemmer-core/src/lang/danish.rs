//! Danish (Snowball) stemmer.

use crate::char_class::{self, DANISH_VOWELS};
use crate::options::StemOptions;
use crate::possessive::remove_possessive_suffix;
use crate::region::{find_r1, Regions};
use crate::suffix::{delete_if_in, is_suffix_in, Region};
use crate::word::Word;

const MIN_LENGTH: usize = 3;

const STEP_1_SUFFIXES: &[&str] = &[
    "hedernes", "ethedens", "erendes", "hederne", "erede", "heden", "heder", "endes", "ernes",
    "erens", "erets", "ered", "ende", "erne", "eren", "erer", "heds", "es", "ed", "ene", "erte",
    "ert", "et", "ere", "en", "er", "e", "s",
];

/// Step 1's S-ending valid preceding-letter guard: the whole Danish
/// alphabet minus the vowels, matching the reference's "valid-s-ending".
const S_ENDING_VALID: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'r', 't', 'v', 'y', 'z',
    'å', 'B', 'C', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'R', 'T', 'V', 'Y', 'Z',
    'Å',
];

const STEP_3_ENDINGS: &[&str] = &["løst", "lig", "elig", "ig"];

pub fn stem(word: &mut Word, _options: &StemOptions) {
    word.map_in_place(char_class::full_width_to_narrow);
    remove_possessive_suffix(word);

    if word.len() < MIN_LENGTH {
        return;
    }

    let r1 = find_r1(word, DANISH_VOWELS);
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
        if *suffix == "s" {
            if is_suffix_in(word, "s", Region::R1, regions)
                && word.len() >= 2
                && char_class::is_one_of(word.at(word.len() - 2).unwrap(), S_ENDING_VALID)
            {
                word.erase_last(1);
                regions.clamp(word.len());
            }
            return;
        }
        if delete_if_in(word, suffix, Region::R1, regions, false) {
            return;
        }
    }
}

fn step_2(word: &mut Word, regions: &mut Regions) {
    delete_if_in(word, "igst", Region::R1, regions, false);
}

fn step_3(word: &mut Word, regions: &mut Regions) {
    for suffix in STEP_3_ENDINGS {
        if delete_if_in(word, suffix, Region::R1, regions, false) {
            break;
        }
    }
    // Undouble a final consonant after step 1/3 deletions (Danish's
    // "undouble" pass: a trailing doubled consonant loses its last letter).
    if word.len() >= 2 {
        let last = word.at(word.len() - 1).unwrap();
        let before = word.at(word.len() - 2).unwrap();
        if last == before && !char_class::is_one_of(last, DANISH_VOWELS) {
            word.pop();
        }
    }
}
