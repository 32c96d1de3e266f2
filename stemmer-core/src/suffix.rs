//! Suffix-match and suffix-delete primitives.
//!
//! Case-insensitive suffix comparison against a literal, with
//! region-guarded variants: a suffix is "in" a region iff it lies wholly
//! at or after that region's starting index. This module also carries
//! the "first match wins" ordering discipline used by every per-language
//! step: callers walk a fixed, ordered rule table and stop at the first
//! suffix that matches.

use crate::region::Regions;
use crate::word::Word;

/// Which region boundary a suffix match is guarded against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    R1,
    R2,
    Rv,
}

impl Region {
    fn boundary(self, regions: &Regions) -> usize {
        match self {
            Region::R1 => regions.r1,
            Region::R2 => regions.r2,
            Region::Rv => regions.rv,
        }
    }
}

/// Case-insensitive match of `word`'s trailing characters against `literal`.
#[inline]
pub fn is_suffix(word: &Word, literal: &str) -> bool {
    word.ends_with_ignore_case(literal)
}

/// The character offset at which `literal` would begin if it is a suffix
/// of `word`. Only meaningful when `is_suffix(word, literal)` holds.
#[inline]
fn suffix_start(word: &Word, literal: &str) -> usize {
    word.len() - literal.chars().count()
}

/// `is_suffix`, additionally requiring the suffix to start at or after
/// the given region's boundary.
#[inline]
pub fn is_suffix_in(word: &Word, literal: &str, region: Region, regions: &Regions) -> bool {
    is_suffix(word, literal) && suffix_start(word, literal) >= region.boundary(regions)
}

/// If `literal` is a suffix of `word` and lies wholly within `region`,
/// erases it, re-clamps `regions`, and returns `true`. If `literal`
/// matches but lies outside the region, no edit happens and
/// `success_on_find` is returned (used to short-circuit a rule cascade
/// without actually touching the buffer). Otherwise returns `false`.
pub fn delete_if_in(
    word: &mut Word,
    literal: &str,
    region: Region,
    regions: &mut Regions,
    success_on_find: bool,
) -> bool {
    if !is_suffix(word, literal) {
        return false;
    }
    let start = suffix_start(word, literal);
    if start >= region.boundary(regions) {
        word.erase(start, word.len());
        regions.clamp(word.len());
        true
    } else {
        success_on_find
    }
}

/// Like `delete_if_in`, but replaces the suffix with `replacement` instead
/// of deleting it outright. Only fires when the suffix lies within the
/// region; otherwise behaves like `delete_if_in`'s non-matching/short-circuit cases.
pub fn replace_if_in(
    word: &mut Word,
    literal: &str,
    replacement: &str,
    region: Region,
    regions: &mut Regions,
    success_on_find: bool,
) -> bool {
    if !is_suffix(word, literal) {
        return false;
    }
    let start = suffix_start(word, literal);
    if start >= region.boundary(regions) {
        word.erase(start, word.len());
        for ch in replacement.chars() {
            word.push(ch);
        }
        regions.clamp(word.len());
        true
    } else {
        success_on_find
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions(r1: usize, r2: usize, rv: usize) -> Regions {
        Regions { r1, r2, rv }
    }

    #[test]
    fn is_suffix_is_case_insensitive() {
        let w = Word::new("CONSIGNMENT");
        assert!(is_suffix(&w, "ment"));
        assert!(is_suffix(&w, "MENT"));
    }

    #[test]
    fn in_region_requires_start_at_or_after_boundary() {
        let w = Word::new("nationalization"); // len 15
        let r = regions(3, 9, 0);
        // "ization" starts at index 8, before R2=9 -> not in R2
        assert!(!is_suffix_in(&w, "ization", Region::R2, &r));
        // but it is in R1 (3 <= 8)
        assert!(is_suffix_in(&w, "ization", Region::R1, &r));
    }

    #[test]
    fn delete_if_in_erases_and_reclamps() {
        let mut w = Word::new("nationalization");
        let mut r = regions(2, 5, 0);
        let deleted = delete_if_in(&mut w, "ization", Region::R1, &mut r, false);
        assert!(deleted);
        assert_eq!(w.to_string(), "national");
        assert!(r.r1 <= w.len() && r.r2 <= w.len());
    }

    #[test]
    fn delete_if_in_short_circuits_outside_region() {
        let mut w = Word::new("nationalization");
        let len_before = w.len();
        let mut r = regions(2, 12, 0); // R2 past the "ization" start
        let result = delete_if_in(&mut w, "ization", Region::R2, &mut r, true);
        assert!(result); // success_on_find, but no edit
        assert_eq!(w.len(), len_before);
    }

    #[test]
    fn replace_if_in_swaps_suffix_text() {
        let mut w = Word::new("rationalize");
        let mut r = regions(2, 2, 0);
        let replaced = replace_if_in(&mut w, "ize", "ise", Region::R2, &mut r, false);
        assert!(replaced);
        assert_eq!(w.to_string(), "rationalise");
    }
}
