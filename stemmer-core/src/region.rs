//! Region locator: computes R1, R2, and the three RV variants.
//!
//! Regions are indices into a `Word`'s current character buffer. A suffix
//! is "in" a region iff its starting offset is at or after that region's
//! index. Every in-place edit must be followed by `Regions::clamp` so the
//! indices stay within the (possibly shrunk) buffer.

use crate::word::Word;

/// The three orthographic regions a stemmer steps are guarded by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Regions {
    pub r1: usize,
    pub r2: usize,
    pub rv: usize,
}

impl Regions {
    /// Clamps all three indices to `len`, as required after any buffer edit.
    #[inline]
    pub fn clamp(&mut self, len: usize) {
        self.r1 = self.r1.min(len);
        self.r2 = self.r2.min(len);
        self.rv = self.rv.min(len);
    }
}

/// Position one past the first non-vowel following the first vowel.
/// Returns `word.len()` if no such position exists.
pub fn find_r1(word: &Word, vowels: &[char]) -> usize {
    match word.find_first_of(vowels, 0) {
        None => word.len(),
        Some(first_vowel) => match word.find_first_not_of(vowels, first_vowel + 1) {
            None => word.len(),
            Some(pos) => pos + 1,
        },
    }
}

/// Same rule as `find_r1`, applied starting from `r1`.
pub fn find_r2(word: &Word, vowels: &[char], r1: usize) -> usize {
    if r1 >= word.len() {
        return word.len();
    }
    match word.find_first_of(vowels, r1) {
        None => word.len(),
        Some(vowel) if vowel + 1 >= word.len() => word.len(),
        Some(vowel) => match word.find_first_not_of(vowels, vowel + 1) {
            None => word.len(),
            Some(pos) => pos + 1,
        },
    }
}

/// RV for the Romance family (Spanish, Portuguese).
///
/// - if the second letter is a consonant, RV is the position after the next vowel;
/// - if the first two letters are both vowels, RV is the position after the next consonant;
/// - otherwise (consonant/vowel at the start), RV = 3.
pub fn find_spanish_rv(word: &Word, vowels: &[char]) -> usize {
    if word.len() < 4 {
        return word.len();
    }
    let second_is_vowel = word.at(1).is_some_and(|c| vowels.contains(&c));
    let first_is_vowel = word.at(0).is_some_and(|c| vowels.contains(&c));

    if !second_is_vowel {
        match word.find_first_of(vowels, 2) {
            None => word.len(),
            Some(pos) => pos + 1,
        }
    } else if first_is_vowel && second_is_vowel {
        match word.find_first_not_of(vowels, 2) {
            None => word.len(),
            Some(pos) => pos + 1,
        }
    } else {
        // consonant followed by a vowel at the very start
        3
    }
}

/// RV for French: like the Romance rule, but RV is forced to 3 when the word
/// begins with `par`, `col`, or `tap` (whether or not a letter follows).
pub fn find_french_rv(word: &Word, vowels: &[char]) -> usize {
    if word.len() < 3 {
        return word.len();
    }
    if starts_with_ignore_case(word, "par")
        || starts_with_ignore_case(word, "col")
        || starts_with_ignore_case(word, "tap")
    {
        return 3;
    }
    let first_is_vowel = word.at(0).is_some_and(|c| vowels.contains(&c));
    let second_is_vowel = word.at(1).is_some_and(|c| vowels.contains(&c));
    if first_is_vowel && second_is_vowel {
        return 3;
    }
    match word.find_first_not_of(vowels, 0) {
        None => word.len(),
        Some(consonant) => match word.find_first_of(vowels, consonant) {
            None => word.len(),
            Some(vowel) => vowel + 1,
        },
    }
}

/// RV for Russian: the position just past the first vowel.
pub fn find_russian_rv(word: &Word, vowels: &[char]) -> usize {
    match word.find_first_of(vowels, 0) {
        None => word.len(),
        Some(pos) => pos + 1,
    }
}

fn starts_with_ignore_case(word: &Word, literal: &str) -> bool {
    let lit: Vec<char> = literal.chars().collect();
    if word.len() < lit.len() {
        return false;
    }
    word.as_chars()
        .iter()
        .zip(lit.iter())
        .all(|(a, b)| crate::char_class::eq_ignore_case(*a, *b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char_class::ENGLISH_VOWELS;

    #[test]
    fn r1_after_first_consonant_following_first_vowel() {
        let w = Word::new("beautiful");
        // b-e(vowel)-a-u-t(consonant): R1 starts at index 4 ("tiful")
        assert_eq!(find_r1(&w, ENGLISH_VOWELS), 4);
    }

    #[test]
    fn r1_is_length_when_no_vowel_found() {
        let w = Word::new("bcdfg");
        assert_eq!(find_r1(&w, ENGLISH_VOWELS), w.len());
    }

    #[test]
    fn r2_builds_on_r1() {
        let w = Word::new("generation");
        let r1 = find_r1(&w, ENGLISH_VOWELS);
        let r2 = find_r2(&w, ENGLISH_VOWELS, r1);
        assert!(r2 >= r1);
    }

    #[test]
    fn spanish_rv_consonant_second_letter() {
        // "oliva": o-l(consonant)-i-v-a -> RV after next vowel from index 2
        let w = Word::new("oliva");
        use crate::char_class::SPANISH_VOWELS;
        assert_eq!(find_spanish_rv(&w, SPANISH_VOWELS), 3);
    }

    #[test]
    fn spanish_rv_two_leading_vowels() {
        use crate::char_class::SPANISH_VOWELS;
        let w = Word::new("piano");
        // p(consonant)-i(vowel): consonant/vowel start -> RV = 3
        assert_eq!(find_spanish_rv(&w, SPANISH_VOWELS), 3);
    }

    #[test]
    fn french_rv_forced_for_par_col_tap() {
        use crate::char_class::FRENCH_VOWELS;
        assert_eq!(find_french_rv(&Word::new("parler"), FRENCH_VOWELS), 3);
        assert_eq!(find_french_rv(&Word::new("coller"), FRENCH_VOWELS), 3);
        assert_eq!(find_french_rv(&Word::new("taper"), FRENCH_VOWELS), 3);
    }

    #[test]
    fn russian_rv_after_first_vowel() {
        use crate::char_class::RUSSIAN_VOWELS;
        let w = Word::new("вода");
        assert_eq!(find_russian_rv(&w, RUSSIAN_VOWELS), 2);
    }

    #[test]
    fn clamp_shrinks_regions_to_new_length() {
        let mut regions = Regions {
            r1: 10,
            r2: 12,
            rv: 8,
        };
        regions.clamp(5);
        assert_eq!(regions, Regions { r1: 5, r2: 5, rv: 5 });
    }
}
