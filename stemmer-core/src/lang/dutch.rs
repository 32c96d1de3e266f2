//! Dutch (Snowball) stemmer.

use crate::char_class::{self, DUTCH_S_ENDING, DUTCH_VOWELS};
use crate::hash::{hash_dutch_yi, unhash_dutch_yi};
use crate::options::StemOptions;
use crate::possessive::remove_possessive_suffix;
use crate::region::{find_r1, find_r2, Regions};
use crate::suffix::{is_suffix_in, replace_if_in, Region};
use crate::word::Word;

const MIN_LENGTH: usize = 3;
const LONG_VOWELS: &[char] = &['a', 'e', 'o', 'u'];

pub fn stem(word: &mut Word, _options: &StemOptions) {
    word.map_in_place(char_class::full_width_to_narrow);
    remove_possessive_suffix(word);

    if word.len() < MIN_LENGTH {
        return;
    }

    hash_dutch_yi(word, DUTCH_VOWELS);

    let r1 = find_r1(word, DUTCH_VOWELS);
    let r1 = if r1 < 3 { 3 } else { r1 };
    let r2 = find_r2(word, DUTCH_VOWELS, r1);
    let mut regions = Regions { r1, r2, rv: 0 };
    regions.clamp(word.len());

    step_1(word, &mut regions);
    undouble_vowel(word);
    let step2_done = step_2(word, &mut regions);
    step_3a(word, &mut regions);
    step_3b(word, &mut regions, step2_done);
    undouble_vowel(word);

    unhash_dutch_yi(word);
}

fn valid_en_ending(word: &Word, suffix_start: usize) -> bool {
    if suffix_start == 0 {
        return false;
    }
    let preceding = word.at(suffix_start - 1).unwrap();
    if char_class::is_one_of(preceding, DUTCH_VOWELS) {
        return false;
    }
    suffix_start < 3 || &word.as_chars()[suffix_start - 3..suffix_start] != ['g', 'e', 'm']
}

fn undouble_consonant(word: &mut Word) {
    if word.len() < 2 {
        return;
    }
    let last = word.len() - 1;
    let a = word.at(last).unwrap();
    let b = word.at(last - 1).unwrap();
    if a == b && !char_class::is_one_of(a, DUTCH_VOWELS) {
        word.pop();
    }
}

fn undouble_vowel(word: &mut Word) {
    if word.len() < 3 {
        return;
    }
    let last = word.len() - 1;
    let c = word.at(last).unwrap();
    let v2 = word.at(last - 1).unwrap();
    let v1 = word.at(last - 2).unwrap();
    if !char_class::is_one_of(c, DUTCH_VOWELS)
        && char_class::eq_ignore_case(v1, v2)
        && char_class::is_one_of(v1, LONG_VOWELS)
    {
        word.erase(last - 1, last);
    }
}

fn step_1(word: &mut Word, regions: &mut Regions) {
    if replace_if_in(word, "heden", "heid", Region::R1, regions, true) {
        return;
    }
    for suffix in ["ene", "en"] {
        if is_suffix_in(word, suffix, Region::R1, regions) {
            let start = word.len() - suffix.chars().count();
            if valid_en_ending(word, start) {
                word.erase(start, word.len());
                regions.clamp(word.len());
                undouble_consonant(word);
            }
            return;
        }
    }
    for suffix in ["se", "s"] {
        if is_suffix_in(word, suffix, Region::R1, regions) {
            let start = word.len() - suffix.chars().count();
            if start > 0 && char_class::is_one_of(word.at(start - 1).unwrap(), DUTCH_S_ENDING) {
                word.erase(start, word.len());
                regions.clamp(word.len());
            }
            return;
        }
    }
}

fn step_2(word: &mut Word, regions: &mut Regions) -> bool {
    if is_suffix_in(word, "e", Region::R1, regions) && word.len() >= 2 {
        let before = word.at(word.len() - 2).unwrap();
        if !char_class::is_one_of(before, DUTCH_VOWELS) {
            word.pop();
            regions.clamp(word.len());
            undouble_consonant(word);
            return true;
        }
    }
    false
}

fn step_3a(word: &mut Word, regions: &mut Regions) {
    if is_suffix_in(word, "heid", Region::R2, regions)
        && word.len() >= 5
        && !matches!(word.at(word.len() - 5), Some('c') | Some('C'))
    {
        word.erase_last(4);
        regions.clamp(word.len());
        if is_suffix_in(word, "en", Region::R1, regions) {
            let start = word.len() - 2;
            if valid_en_ending(word, start) {
                word.erase(start, word.len());
                regions.clamp(word.len());
                undouble_consonant(word);
            }
        }
    }
}

fn step_3b(word: &mut Word, regions: &mut Regions, step2_done: bool) {
    if is_suffix_in(word, "end", Region::R2, regions) || is_suffix_in(word, "ing", Region::R2, regions) {
        word.erase_last(3);
        regions.clamp(word.len());
        if is_suffix_in(word, "ig", Region::R2, regions)
            && word.len() >= 3
            && !matches!(word.at(word.len() - 3), Some('e') | Some('E'))
        {
            word.erase_last(2);
            regions.clamp(word.len());
        } else {
            undouble_consonant(word);
        }
        return;
    }
    if is_suffix_in(word, "ig", Region::R2, regions)
        && word.len() >= 3
        && !matches!(word.at(word.len() - 3), Some('e') | Some('E'))
    {
        word.erase_last(2);
        regions.clamp(word.len());
        return;
    }
    if is_suffix_in(word, "lijk", Region::R2, regions) {
        word.erase_last(4);
        regions.clamp(word.len());
        step_2(word, regions);
        return;
    }
    if is_suffix_in(word, "baar", Region::R2, regions) {
        word.erase_last(4);
        regions.clamp(word.len());
        return;
    }
    if step2_done && is_suffix_in(word, "bar", Region::R2, regions) {
        word.erase_last(3);
        regions.clamp(word.len());
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
    fn en_suffix_with_undoubling() {
        assert_eq!(stemmed("bakken"), "bak");
    }

    #[test]
    fn heden_becomes_heid() {
        assert_eq!(stemmed("vrijheden"), "vrijheid");
    }

    #[test]
    fn s_ending_requires_valid_preceding_letter() {
        assert_eq!(stemmed("huizen"), "huiz");
    }

    #[test]
    fn lijk_repeats_step_2() {
        assert_eq!(stemmed("heerlijke"), "heer");
    }

    #[test]
    fn words_too_short_pass_through() {
        assert_eq!(stemmed("op"), "op");
    }

    #[test]
    fn no_hash_sentinel_escapes() {
        for ch in stemmed("vrijheden").chars() {
            assert!(!crate::hash::is_hash_sentinel(ch));
        }
    }
}
