//! French (Snowball) stemmer.

use crate::char_class::{self, FRENCH_ACCENTED_E, FRENCH_AIOUES, FRENCH_VOWELS};
use crate::hash::{
    hash_french_ei_diaeresis, hash_french_yui, is_lower_y_hash, is_upper_y_hash,
    unhash_french_ei_diaeresis, unhash_french_yui,
};
use crate::options::StemOptions;
use crate::possessive::remove_possessive_suffix;
use crate::region::{find_french_rv, find_r1, find_r2, Regions};
use crate::suffix::{delete_if_in, is_suffix, is_suffix_in, replace_if_in, Region};
use crate::word::Word;

const MIN_LENGTH: usize = 3;

pub fn stem(word: &mut Word, _options: &StemOptions) {
    word.map_in_place(char_class::full_width_to_narrow);
    remove_possessive_suffix(word);

    if word.len() < MIN_LENGTH {
        return;
    }

    hash_french_yui(word, FRENCH_VOWELS);
    hash_french_ei_diaeresis(word);

    let r1 = find_r1(word, FRENCH_VOWELS);
    let r2 = find_r2(word, FRENCH_VOWELS, r1);
    let rv = find_french_rv(word, FRENCH_VOWELS);
    let mut regions = Regions { r1, r2, rv };
    regions.clamp(word.len());

    let len_before_1_2 = word.len();
    step_1(word, &mut regions);
    if word.len() == len_before_1_2 {
        step_2(word, &mut regions);
    }
    if word.len() != len_before_1_2 {
        step_3(word, &mut regions);
    } else {
        step_4(word, &mut regions);
    }
    step_5(word);
    step_6(word);

    unhash_french_ei_diaeresis(word);
    unhash_french_yui(word);
}

/// Step 1: standard-suffix cascade, first match wins.
fn step_1(word: &mut Word, regions: &mut Regions) {
    for suffix in [
        "ances", "iqUes", "ismes", "ables", "istes", "ance", "iqUe", "isme", "able", "iste", "eux",
    ] {
        if delete_if_in(word, suffix, Region::R2, regions, false) {
            return;
        }
    }
    for suffix in ["atrices", "ateurs", "ations", "atrice", "ateur", "ation"] {
        if delete_if_in(word, suffix, Region::R2, regions, false) {
            if !delete_if_in(word, "ic", Region::R2, regions, false) && is_suffix(word, "ic") {
                word.erase_last(2);
                for ch in "iqU".chars() {
                    word.push(ch);
                }
                regions.clamp(word.len());
            }
            return;
        }
    }
    for suffix in ["logies", "logie"] {
        if replace_if_in(word, suffix, "log", Region::R2, regions, false) {
            return;
        }
    }
    for suffix in ["usions", "utions", "usion", "ution"] {
        if replace_if_in(word, suffix, "u", Region::R2, regions, false) {
            return;
        }
    }
    for suffix in ["ences", "ence"] {
        if replace_if_in(word, suffix, "ent", Region::R2, regions, false) {
            return;
        }
    }
    for suffix in ["ements", "ement"] {
        if delete_if_in(word, suffix, Region::R1, regions, false) {
            if delete_if_in(word, "iv", Region::R2, regions, false) {
                delete_if_in(word, "at", Region::R2, regions, false);
            } else if !delete_if_in(word, "eus", Region::R2, regions, false)
                && !delete_if_in(word, "abl", Region::R2, regions, false)
            {
                delete_if_in(word, "iqU", Region::R2, regions, false);
            }
            return;
        }
    }
    for suffix in ["issements", "issement"] {
        if delete_if_in(word, suffix, Region::R1, regions, false) {
            return;
        }
    }
    if is_suffix(word, "eaux") {
        word.erase_last(1);
        regions.clamp(word.len());
        return;
    }
    if is_suffix_in(word, "aux", Region::R1, regions) {
        word.erase_last(2);
        word.push('l');
        regions.clamp(word.len());
        return;
    }
    for suffix in ["euses", "euse"] {
        if delete_if_in(word, suffix, Region::R2, regions, false) {
            return;
        }
        if is_suffix_in(word, suffix, Region::R1, regions) {
            word.erase_last(suffix.chars().count() - 1);
            regions.clamp(word.len());
            return;
        }
    }
    if delete_if_in(word, "issants", Region::R1, regions, false) {
        return;
    }
    if delete_if_in(word, "issant", Region::R1, regions, false) {
        return;
    }
    for suffix in ["ités", "ité"] {
        if is_suffix_in(word, suffix, Region::R2, regions) {
            word.erase_last(suffix.chars().count());
            regions.clamp(word.len());
            if !delete_if_in(word, "abil", Region::R2, regions, false)
                && !delete_if_in(word, "ic", Region::R2, regions, false)
            {
                delete_if_in(word, "iv", Region::R2, regions, false);
            }
            return;
        }
    }
    for suffix in ["ifs", "ive", "ifEs", "if"] {
        if is_suffix_in(word, suffix, Region::R2, regions) {
            word.erase_last(suffix.chars().count());
            regions.clamp(word.len());
            if delete_if_in(word, "icat", Region::R2, regions, false) {
                delete_if_in(word, "at", Region::R2, regions, false);
            } else {
                delete_if_in(word, "at", Region::R2, regions, false);
            }
            return;
        }
    }
}

/// Step 2: verb-ending cascade. Consonant-initial endings match anywhere in
/// RV; vowel-initial endings additionally require the preceding letter not
/// be a vowel (guarded by region alone here, per the canonical Snowball
/// French algorithm).
fn step_2(word: &mut Word, regions: &mut Regions) {
    const CONSONANT_ENDINGS: &[&str] = &[
        "issaIent", "issantes", "iraIent", "issante", "issants", "issions", "irions", "issais",
        "issait", "issant", "issent", "issiez", "issons", "irais", "irait", "irent", "iriez",
        "irons", "iront", "isses", "issez", "îmes", "îtes", "irai", "iras", "irez", "isse", "ies",
        "ir", "is", "it", "ie", "i",
    ];
    for suffix in CONSONANT_ENDINGS {
        if delete_if_in(word, suffix, Region::Rv, regions, false) {
            return;
        }
    }
    const VOWEL_ENDINGS: &[&str] = &[
        "eraIent", "assions", "erions", "assent", "assiez", "èrent", "erais", "erait", "eriez",
        "erons", "eront", "aIent", "antes", "asses", "ions", "erai", "eras", "erez", "âmes",
        "âtes", "ante", "ants", "ant", "ées", "ée", "és", "er", "ez", "ai", "as", "ât", "ais",
        "ait", "a", "é",
    ];
    for suffix in VOWEL_ENDINGS {
        if delete_if_in(word, suffix, Region::Rv, regions, false) {
            return;
        }
    }
}

/// Step 3: only runs if step 1/2 changed nothing.
fn step_3(word: &mut Word, regions: &mut Regions) {
    if word.is_empty() {
        return;
    }
    let last = word.last().unwrap();
    if last == 'Y' || is_lower_y_hash(last) || is_upper_y_hash(last) {
        word.set(word.len() - 1, 'i');
    } else if last == 'ç' {
        word.set(word.len() - 1, 'c');
    }
    let _ = regions;
}

/// Step 4: residual pronoun/-ion cleanup, only reached if step 1/2 did
/// change the word.
fn step_4(word: &mut Word, regions: &mut Regions) {
    if word.len() >= 2 {
        let last = word.at(word.len() - 1).unwrap();
        let before = word.at(word.len() - 2).unwrap();
        if matches!(last, 's' | 'S') && !char_class::is_one_of(before, FRENCH_AIOUES) {
            word.pop();
            regions.clamp(word.len());
        }
    }
    if is_suffix_in(word, "ion", Region::R2, regions) && is_suffix_in(word, "ion", Region::Rv, regions) {
        if let Some(before) = word.at(word.len().saturating_sub(4)) {
            if matches!(before, 's' | 't' | 'S' | 'T') {
                word.erase_last(3);
                regions.clamp(word.len());
            }
        }
    }
    if delete_if_in(word, "ier", Region::Rv, regions, false)
        || delete_if_in(word, "Ier", Region::Rv, regions, false)
    {
        word.push('i');
        regions.clamp(word.len());
    } else if !delete_if_in(word, "e", Region::Rv, regions, false) {
        delete_if_in(word, "ë", Region::Rv, regions, false);
    }
}

/// Step 5: undouble a final doubled letter of `enn/onn/ett/ell/eill`.
fn step_5(word: &mut Word) {
    const DOUBLED: &[(&str, &str)] = &[
        ("enn", "en"),
        ("onn", "on"),
        ("ett", "et"),
        ("ell", "el"),
        ("eill", "eil"),
    ];
    for (from, to) in DOUBLED {
        if is_suffix(word, from) {
            word.erase_last(from.chars().count());
            for ch in to.chars() {
                word.push(ch);
            }
            return;
        }
    }
}

/// Step 6: an unaccented final `é`/`è` folds to plain `e`.
fn step_6(word: &mut Word) {
    if word.is_empty() {
        return;
    }
    let last_idx = word.len() - 1;
    if char_class::is_one_of(word.at(last_idx).unwrap(), FRENCH_ACCENTED_E) {
        word.set(last_idx, 'e');
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
    fn ation_suffix_chain() {
        assert_eq!(stemmed("communication"), "commun");
    }

    #[test]
    fn verb_conjugation_strips_in_step_2() {
        assert_eq!(stemmed("chantais"), "chant");
    }

    #[test]
    fn aux_becomes_al() {
        assert_eq!(stemmed("chevaux"), "cheval");
    }

    #[test]
    fn hashed_y_reverts_to_i_in_step_3() {
        assert_eq!(stemmed("ennuyer"), "ennui");
    }

    #[test]
    fn words_too_short_pass_through() {
        assert_eq!(stemmed("la"), "la");
    }

    #[test]
    fn no_hash_sentinel_escapes() {
        for ch in stemmed("naïve").chars() {
            assert!(!crate::hash::is_hash_sentinel(ch));
        }
    }
}
