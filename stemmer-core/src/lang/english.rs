//! English (Porter2/Snowball) stemmer.

use crate::char_class::{self, ENGLISH_VOWELS};
use crate::hash::{hash_y, is_hash_sentinel, is_lower_y_hash, is_upper_y_hash, unhash_y};
use crate::options::StemOptions;
use crate::possessive::remove_possessive_suffix;
use crate::region::{find_r1, find_r2, Regions};
use crate::suffix::{delete_if_in, is_suffix, replace_if_in, Region};
use crate::word::Word;

const MIN_LENGTH: usize = 3;

const REPLACEMENT_EXCEPTIONS: &[(&str, &str)] = &[
    ("skis", "ski"),
    ("skies", "sky"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("idly", "idl"),
    ("gently", "gentl"),
    ("ugly", "ugli"),
    ("early", "earli"),
    ("only", "onli"),
    ("singly", "singl"),
];

const INVARIANT_EXCEPTIONS: &[&str] = &["sky", "news", "howe", "atlas", "cosmos", "bias", "andes"];

const R1_PREFIX_OVERRIDES: &[(&str, usize)] = &[
    ("gener", 5),
    ("commun", 6),
    ("arsen", 5),
    ("past", 4),
    ("univers", 7),
    ("later", 5),
    ("emerg", 5),
    ("organ", 5),
];

const EED_WHOLE_STEM_EXCEPTIONS: &[&str] =
    &["proceed", "succeed", "exceed", "proceedly", "succeedly", "exceedly"];

const DOUBLE_CONSONANTS: &[&str] = &["bb", "dd", "ff", "gg", "mm", "nn", "pp", "rr", "tt"];

const LI_ENDING_VALID_PRECEDERS: &[char] =
    &['c', 'd', 'e', 'g', 'h', 'k', 'm', 'n', 'r', 't'];

/// Stems `word` in place following the English Porter2 algorithm.
pub fn stem(word: &mut Word, _options: &StemOptions) {
    word.map_in_place(char_class::full_width_to_narrow);
    remove_possessive_suffix(word);

    if word.len() < MIN_LENGTH {
        return;
    }
    if apply_exception(word) {
        return;
    }

    hash_y(word, ENGLISH_VOWELS);
    let first_vowel = match word.find_first_of(ENGLISH_VOWELS, 0) {
        Some(pos) => pos,
        None => return,
    };

    let mut regions = compute_regions(word);

    step_1a(word, &mut regions, first_vowel);
    step_1b(word, &mut regions, first_vowel);
    step_1c(word);
    step_2(word, &mut regions);
    step_3(word, &mut regions);
    step_4(word, &mut regions);
    step_5a(word, &mut regions);
    step_5b(word, &mut regions);

    unhash_y(word);
}

fn word_equals_ignore_case(word: &Word, literal: &str) -> bool {
    word.len() == literal.chars().count() && word.ends_with_ignore_case(literal)
}

fn starts_with_ignore_case(word: &Word, literal: &str) -> bool {
    let lit: Vec<char> = literal.chars().collect();
    word.len() >= lit.len()
        && word
            .as_chars()
            .iter()
            .zip(lit.iter())
            .all(|(a, b)| char_class::eq_ignore_case(*a, *b))
}

fn apply_exception(word: &mut Word) -> bool {
    for (from, to) in REPLACEMENT_EXCEPTIONS {
        if word_equals_ignore_case(word, from) {
            *word = Word::new(to);
            return true;
        }
    }
    INVARIANT_EXCEPTIONS
        .iter()
        .any(|lit| word_equals_ignore_case(word, lit))
}

fn compute_regions(word: &Word) -> Regions {
    let r1 = R1_PREFIX_OVERRIDES
        .iter()
        .find(|(prefix, min_len)| word.len() >= *min_len && starts_with_ignore_case(word, prefix))
        .map(|(_, min_len)| *min_len)
        .unwrap_or_else(|| find_r1(word, ENGLISH_VOWELS));
    let r2 = find_r2(word, ENGLISH_VOWELS, r1);
    let mut regions = Regions { r1, r2, rv: 0 };
    regions.clamp(word.len());
    regions
}

fn is_vowel_char(ch: Option<char>) -> bool {
    ch.is_some_and(|c| char_class::is_one_of(c, ENGLISH_VOWELS))
}

fn is_y_or_y_hash(ch: Option<char>) -> bool {
    matches!(ch, Some('y') | Some('Y')) || ch.is_some_and(|c| is_lower_y_hash(c) || is_upper_y_hash(c))
}

//---------------------------------------------
fn step_1a(word: &mut Word, regions: &mut Regions, first_vowel: usize) {
    if is_suffix(word, "sses") {
        word.replace_last(4, "ss");
        regions.clamp(word.len());
        return;
    }
    if is_suffix(word, "ied") || is_suffix(word, "ies") {
        if word.len() <= 4 {
            word.replace_last(3, "ie");
        } else {
            word.replace_last(3, "i");
        }
        regions.clamp(word.len());
        return;
    }
    if word.len() >= 2 && matches!(word.last(), Some('s') | Some('S')) {
        let before = word.at(word.len() - 2);
        let blocked = matches!(before, Some('s') | Some('S') | Some('u') | Some('U'));
        if !blocked && first_vowel < word.len().saturating_sub(2) {
            word.erase_last(1);
            regions.clamp(word.len());
        }
    }
}

//---------------------------------------------
fn step_1b(word: &mut Word, regions: &mut Regions, first_vowel: usize) {
    if EED_WHOLE_STEM_EXCEPTIONS.iter().any(|lit| is_suffix(word, lit)) {
        return;
    }

    let mut regress_trim = false;

    if is_suffix(word, "eed") {
        if regions.r1 <= word.len() - 3 {
            word.erase_last(1);
            regions.clamp(word.len());
        }
        return;
    } else if is_suffix(word, "eedly") {
        if regions.r1 <= word.len() - 5 {
            word.erase_last(3);
            regions.clamp(word.len());
        }
        return;
    } else if is_suffix(word, "ed") && first_vowel < word.len().saturating_sub(2) {
        word.erase_last(2);
        regions.clamp(word.len());
        regress_trim = true;
    } else if is_suffix(word, "edly") && first_vowel < word.len().saturating_sub(4) {
        word.erase_last(4);
        regions.clamp(word.len());
        regress_trim = true;
    } else if is_suffix(word, "ing") && first_vowel < word.len().saturating_sub(3) {
        let len = word.len();
        if len == 5 && is_y_or_y_hash(word.at(1)) && !is_vowel_char(word.at(0)) {
            word.erase_last(2);
            let new_len = word.len();
            word.set(new_len - 2, 'i');
            word.set(new_len - 1, 'e');
            regions.clamp(word.len());
            return;
        }
        if len == 6 && (starts_with_ignore_case(word, "inn") || starts_with_ignore_case(word, "out")) {
            return;
        }
        if len == 7
            && (starts_with_ignore_case(word, "cann")
                || starts_with_ignore_case(word, "herr")
                || starts_with_ignore_case(word, "even")
                || starts_with_ignore_case(word, "earr"))
        {
            return;
        }
        word.erase_last(3);
        regions.clamp(word.len());
        regress_trim = true;
    } else if is_suffix(word, "ingly") && first_vowel < word.len().saturating_sub(5) {
        word.erase_last(5);
        regions.clamp(word.len());
        regress_trim = true;
    }

    if regress_trim {
        if is_suffix(word, "at") || is_suffix(word, "bl") || is_suffix(word, "iz") {
            word.push('e');
            regions.r2 = find_r2(word, ENGLISH_VOWELS, regions.r1);
        } else if ends_in_eligible_doubled_consonant(word) {
            word.erase_last(1);
            regions.clamp(word.len());
        } else if should_append_e_for_short_word(word, regions) {
            word.push('e');
            regions.r2 = find_r2(word, ENGLISH_VOWELS, regions.r1);
        }
    }
}

fn ends_in_eligible_doubled_consonant(word: &Word) -> bool {
    let len = word.len();
    let exactly_three_not_aeo = len == 3
        && !matches!(
            word.at(0),
            Some('a') | Some('A') | Some('e') | Some('E') | Some('o') | Some('O')
        );
    (len > 3 || exactly_three_not_aeo) && DOUBLE_CONSONANTS.iter().any(|d| is_suffix(word, d))
}

fn should_append_e_for_short_word(word: &Word, regions: &Regions) -> bool {
    let len = word.len();
    let last_two_differ = len < 2
        || !char_class::eq_ignore_case(word.at(len - 1).unwrap(), word.at(len - 2).unwrap());
    last_two_differ && is_short_word(word, regions)
}

fn ends_in_short_syllable(word: &Word) -> bool {
    let len = word.len();
    if len == 2 {
        return is_vowel_char(word.at(0)) && !is_vowel_char(word.at(1));
    }
    if word_equals_ignore_case(word, "past") {
        return true;
    }
    if len >= 3 {
        let before = word.at(len - 3);
        let mid = word.at(len - 2);
        let last = word.at(len - 1);
        let last_ineligible = matches!(
            last,
            Some('w') | Some('W') | Some('x') | Some('X') | Some('y') | Some('Y')
        );
        return !is_vowel_char(before) && is_vowel_char(mid) && !is_vowel_char(last) && !last_ineligible;
    }
    false
}

fn is_short_word(word: &Word, regions: &Regions) -> bool {
    ends_in_short_syllable(word) && regions.r1 == word.len()
}

//---------------------------------------------
fn step_1c(word: &mut Word) {
    let len = word.len();
    if len > 2 && !is_vowel_char(word.at(len - 2)) {
        match word.at(len - 1) {
            Some(ch) if ch == 'y' || is_lower_y_hash(ch) => word.set(len - 1, 'i'),
            Some(ch) if ch == 'Y' || is_upper_y_hash(ch) => word.set(len - 1, 'I'),
            _ => {}
        }
    }
}

//---------------------------------------------
fn step_2(word: &mut Word, regions: &mut Regions) {
    const RULES: &[(&str, &str)] = &[
        ("ational", "ate"),
        ("ization", "ize"),
        ("iveness", "ive"),
        ("fulness", "ful"),
        ("ousness", "ous"),
        ("tional", "tion"),
        ("biliti", "ble"),
        ("lessli", "less"),
        ("entli", "ent"),
        ("ousli", "ous"),
        ("ation", "ate"),
        ("alism", "al"),
        ("aliti", "al"),
        ("iviti", "ive"),
        ("fulli", "ful"),
        ("enci", "ence"),
        ("anci", "ance"),
        ("izer", "ize"),
        ("alli", "al"),
        ("ator", "ate"),
        ("bli", "ble"),
        ("eli", "e"),
    ];
    for (suffix, replacement) in RULES {
        if is_suffix(word, suffix) {
            replace_if_in(word, suffix, replacement, Region::R1, regions, true);
            return;
        }
    }
    if is_suffix(word, "li") && word.len() >= 3 {
        let before = word.at(word.len() - 3);
        if before.is_some_and(|c| {
            LI_ENDING_VALID_PRECEDERS.contains(&c.to_ascii_lowercase())
        }) {
            delete_if_in(word, "li", Region::R1, regions, true);
        }
    }
}

//---------------------------------------------
fn step_3(word: &mut Word, regions: &mut Regions) {
    const RULES: &[(&str, &str, Region)] = &[
        ("icate", "ic", Region::R1),
        ("iciti", "ic", Region::R1),
        ("ative", "", Region::R2),
        ("ical", "ic", Region::R1),
        ("ness", "", Region::R1),
        ("ful", "", Region::R1),
    ];
    for (suffix, replacement, region) in RULES {
        if is_suffix(word, suffix) {
            replace_if_in(word, suffix, replacement, *region, regions, true);
            return;
        }
    }
}

//---------------------------------------------
fn step_4(word: &mut Word, regions: &mut Regions) {
    const RULES: &[&str] = &[
        "ement", "ance", "ence", "able", "ible", "ment", "ant", "ent", "ism", "ate", "iti",
        "ous", "ive", "ize", "al", "er", "ic",
    ];
    for suffix in RULES {
        if is_suffix(word, suffix) {
            delete_if_in(word, suffix, Region::R2, regions, true);
            return;
        }
    }
    if is_suffix(word, "ion") && word.len() >= 4 {
        let before = word.at(word.len() - 4);
        if matches!(before, Some('s') | Some('S') | Some('t') | Some('T')) {
            delete_if_in(word, "ion", Region::R2, regions, true);
        }
    }
}

//---------------------------------------------
fn step_5a(word: &mut Word, regions: &mut Regions) {
    if !matches!(word.last(), Some('e') | Some('E')) {
        return;
    }
    let e_pos = word.len() - 1;
    if e_pos >= regions.r2 {
        word.erase_last(1);
        regions.clamp(word.len());
        return;
    }
    if e_pos >= regions.r1 {
        let mut trial = word.clone();
        trial.erase_last(1);
        if !ends_in_short_syllable(&trial) {
            word.erase_last(1);
            regions.clamp(word.len());
        }
    }
}

//---------------------------------------------
fn step_5b(word: &mut Word, regions: &mut Regions) {
    if is_suffix(word, "ll") {
        let second_l = word.len() - 1;
        if second_l >= regions.r2 {
            word.erase_last(1);
            regions.clamp(word.len());
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

    // ===== Exceptions =====

    #[test]
    fn replacement_exceptions() {
        assert_eq!(stemmed("skis"), "ski");
        assert_eq!(stemmed("skies"), "sky");
        assert_eq!(stemmed("dying"), "die");
        assert_eq!(stemmed("lying"), "lie");
        assert_eq!(stemmed("tying"), "tie");
        assert_eq!(stemmed("idly"), "idl");
        assert_eq!(stemmed("gently"), "gentl");
        assert_eq!(stemmed("ugly"), "ugli");
        assert_eq!(stemmed("early"), "earli");
        assert_eq!(stemmed("only"), "onli");
        assert_eq!(stemmed("singly"), "singl");
    }

    #[test]
    fn invariant_exceptions() {
        for w in ["sky", "news", "howe", "atlas", "cosmos", "bias", "andes"] {
            assert_eq!(stemmed(w), w);
        }
    }

    #[test]
    fn exceptions_are_case_insensitive() {
        assert_eq!(stemmed("SKIS"), "ski");
        assert_eq!(stemmed("SKY"), "SKY");
    }

    // ===== Step 1a/1b/1c =====

    #[test]
    fn step_1a_handles_plural_families() {
        assert_eq!(stemmed("caresses"), "caress");
        assert_eq!(stemmed("ponies"), "poni");
        assert_eq!(stemmed("ties"), "tie");
        assert_eq!(stemmed("cats"), "cat");
        assert_eq!(stemmed("gaps"), "gap");
    }

    #[test]
    fn step_1a_protects_us_and_ss_endings() {
        assert_eq!(stemmed("gas"), "gas");
        assert_eq!(stemmed("this"), "this");
    }

    #[test]
    fn step_1b_eed_family() {
        assert_eq!(stemmed("agreed"), "agre");
        assert_eq!(stemmed("feed"), "feed");
        assert_eq!(stemmed("proceed"), "proceed");
        assert_eq!(stemmed("exceeding"), "exceed");
    }

    #[test]
    fn step_1b_vying_special_case() {
        assert_eq!(stemmed("vying"), "vie");
    }

    #[test]
    fn step_1b_short_word_guards() {
        assert_eq!(stemmed("inning"), "inning");
        assert_eq!(stemmed("outing"), "outing");
        assert_eq!(stemmed("canning"), "canning");
        assert_eq!(stemmed("herring"), "herring");
        assert_eq!(stemmed("earring"), "earring");
    }

    #[test]
    fn step_1b_post_deletion_touchups() {
        assert_eq!(stemmed("hopping"), "hop");
        assert_eq!(stemmed("tanned"), "tan");
        assert_eq!(stemmed("falling"), "fall");
        assert_eq!(stemmed("hissing"), "hiss");
        assert_eq!(stemmed("fizzed"), "fizz");
        assert_eq!(stemmed("failing"), "fail");
        assert_eq!(stemmed("filing"), "file");
    }

    #[test]
    fn step_1c_trailing_y_after_consonant() {
        assert_eq!(stemmed("cry"), "cri");
        assert_eq!(stemmed("by"), "by");
        assert_eq!(stemmed("say"), "say");
    }

    // ===== End-to-end scenarios =====

    #[test]
    fn scenario_vocabulary() {
        assert_eq!(stemmed("consignment"), "consign");
        assert_eq!(stemmed("generate"), "generat");
        assert_eq!(stemmed("relational"), "relat");
        assert_eq!(stemmed("national"), "nation");
        assert_eq!(stemmed("rationalization"), "rational");
        assert_eq!(stemmed("happy"), "happi");
        assert_eq!(stemmed("sensational"), "sensat");
        assert_eq!(stemmed("conflated"), "conflat");
        assert_eq!(stemmed("troubled"), "troubl");
        assert_eq!(stemmed("sized"), "size");
        assert_eq!(stemmed("motoring"), "motor");
        assert_eq!(stemmed("happiness"), "happi");
    }

    #[test]
    fn too_short_words_are_unchanged() {
        assert_eq!(stemmed("go"), "go");
        assert_eq!(stemmed("it"), "it");
    }

    #[test]
    fn no_hash_sentinel_escapes() {
        let mut w = Word::new("yellowy");
        stem(&mut w, &StemOptions::default());
        assert!(w.as_chars().iter().all(|c| !is_hash_sentinel(*c)));
    }
}
