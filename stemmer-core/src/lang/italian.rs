//! Italian (Snowball) stemmer.

use crate::char_class::{self, ITALIAN_VOWELS};
use crate::hash::{hash_italian_ui, unhash_italian_ui};
use crate::options::StemOptions;
use crate::possessive::remove_possessive_suffix;
use crate::region::{find_r1, find_r2, find_spanish_rv, Regions};
use crate::suffix::{delete_if_in, is_suffix, is_suffix_in, Region};
use crate::word::Word;

const MIN_LENGTH: usize = 3;

pub fn stem(word: &mut Word, _options: &StemOptions) {
    word.map_in_place(char_class::full_width_to_narrow);
    remove_possessive_suffix(word);

    if word.len() < MIN_LENGTH {
        return;
    }

    // à/è/ì/ò/ù are already distinct codepoints from a/e/i/o/u; the
    // reference additionally folds grave accents to acute here, which this
    // port skips since `ITALIAN_VOWELS` already treats both as vowels.
    hash_italian_ui(word, ITALIAN_VOWELS);

    let r1 = find_r1(word, ITALIAN_VOWELS);
    let r2 = find_r2(word, ITALIAN_VOWELS, r1);
    let rv = find_spanish_rv(word, ITALIAN_VOWELS);
    let mut regions = Regions { r1, r2, rv };
    regions.clamp(word.len());

    step_0(word, &mut regions);
    let len_before_1 = word.len();
    step_1(word, &mut regions);
    if word.len() == len_before_1 {
        step_2(word, &mut regions);
    }
    step_3a(word, &mut regions);
    step_3b(word, &mut regions);

    unhash_italian_ui(word);
}

/// Step 0: attached pronoun removal (`...ando`/`...endo` + pronoun, or
/// imperative/gerund/infinitive + pronoun).
fn step_0(word: &mut Word, regions: &mut Regions) {
    const PRONOUNS: &[&str] = &[
        "gliela", "gliele", "glieli", "glielo", "gliene", "sene", "mela", "mele", "meli", "melo",
        "mene", "tela", "tele", "teli", "telo", "tene", "cela", "cele", "celi", "celo", "cene",
        "vela", "vele", "veli", "velo", "vene", "gli", "ci", "la", "le", "li", "lo", "mi", "ne",
        "si", "ti", "vi",
    ];
    const PRECEDERS: &[&str] = &[
        "ando", "endo", "ar", "er", "ir",
    ];
    for pronoun in PRONOUNS {
        if is_suffix_in(word, pronoun, Region::Rv, regions) {
            let stem_len = word.len() - pronoun.chars().count();
            for preceder in PRECEDERS {
                let plen = preceder.chars().count();
                if stem_len >= plen {
                    let tail: String = word.as_chars()[stem_len - plen..stem_len].iter().collect();
                    if tail.eq_ignore_ascii_case(preceder) {
                        word.erase(stem_len, word.len());
                        regions.clamp(word.len());
                        return;
                    }
                }
            }
            return;
        }
    }
}

fn step_1(word: &mut Word, regions: &mut Regions) {
    const GROUP_R2: &[&str] = &[
        "atrice", "atrici", "abile", "abili", "ibile", "ibili", "ante", "anti", "ente", "enti",
        "ista", "iste", "isti", "ismo", "ismi", "oso", "osa", "osi", "ose", "ità", "ivo", "iva",
        "ivi", "ive",
    ];
    for suffix in GROUP_R2 {
        if delete_if_in(word, suffix, Region::R2, regions, false) {
            if matches!(*suffix, "ivo" | "iva" | "ivi" | "ive") {
                delete_if_in(word, "at", Region::R2, regions, false);
            }
            return;
        }
    }
    for suffix in ["azione", "azioni", "atore", "atori"] {
        if delete_if_in(word, suffix, Region::R2, regions, false) {
            delete_if_in(word, "ic", Region::R2, regions, false);
            return;
        }
    }
    for suffix in ["logia", "logie"] {
        if is_suffix_in(word, suffix, Region::R2, regions) {
            word.erase_last(2);
            regions.clamp(word.len());
            return;
        }
    }
    for suffix in ["uzione", "uzioni", "usione", "usioni"] {
        if is_suffix_in(word, suffix, Region::R2, regions) {
            word.erase_last(5);
            regions.clamp(word.len());
            return;
        }
    }
    for suffix in ["enza", "enze"] {
        if is_suffix_in(word, suffix, Region::R2, regions) {
            word.erase_last(2);
            for ch in "te".chars() {
                word.push(ch);
            }
            regions.clamp(word.len());
            return;
        }
    }
    if delete_if_in(word, "amento", Region::R2, regions, false) {
        return;
    }
    if delete_if_in(word, "amenti", Region::R2, regions, false) {
        return;
    }
    if delete_if_in(word, "imento", Region::R2, regions, false) {
        return;
    }
    if delete_if_in(word, "imenti", Region::R2, regions, false) {
        return;
    }
    for suffix in [
        "amente", "abile", "abili", "ibile", "ibili", "mente", "ante", "anti",
    ] {
        if delete_if_in(word, suffix, Region::R1, regions, false) {
            return;
        }
    }
    for suffix in ["ità"] {
        if delete_if_in(word, suffix, Region::R2, regions, false) {
            if !delete_if_in(word, "abil", Region::R2, regions, false)
                && !delete_if_in(word, "ic", Region::R2, regions, false)
            {
                delete_if_in(word, "iv", Region::R2, regions, false);
            }
            return;
        }
    }
}

fn step_2(word: &mut Word, regions: &mut Regions) {
    const VERB_SUFFIXES: &[&str] = &[
        "erebbero", "irebbero", "assero", "essero", "issero", "ereste", "ireste", "eresti",
        "iresti", "erebbe", "irebbe", "assimo", "essimo", "issimo", "ammo", "emmo", "immo",
        "eremo", "iremo", "asse", "asti", "aste", "assi", "ando", "endo", "iamo", "avamo",
        "evamo", "ivamo", "eranno", "iranno", "avano", "evano", "ivano", "erei", "irei", "erete",
        "irete", "erono", "irono", "ato", "ata", "ati", "ate", "ito", "ita", "iti", "ite", "uto",
        "uta", "uti", "ute", "ava", "evo", "iva", "are", "ere", "ire", "ono", "sca", "sce", "sci",
        "sco", "a", "e", "i", "o",
    ];
    for suffix in VERB_SUFFIXES {
        if delete_if_in(word, suffix, Region::Rv, regions, false) {
            return;
        }
    }
}

fn step_3a(word: &mut Word, regions: &mut Regions) {
    if is_suffix_in(word, "a", Region::Rv, regions)
        || is_suffix_in(word, "e", Region::Rv, regions)
        || is_suffix_in(word, "o", Region::Rv, regions)
        || is_suffix_in(word, "à", Region::Rv, regions)
        || is_suffix_in(word, "è", Region::Rv, regions)
        || is_suffix_in(word, "ò", Region::Rv, regions)
    {
        word.erase_last(1);
        regions.clamp(word.len());
        if is_suffix_in(word, "i", Region::Rv, regions) {
            word.erase_last(1);
            regions.clamp(word.len());
        }
    }
}

fn step_3b(word: &mut Word, regions: &mut Regions) {
    if is_suffix(word, "ch") || is_suffix(word, "gh") {
        word.erase_last(1);
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
    fn azione_chain_drops_ic() {
        assert_eq!(stemmed("nazionale"), "nazional");
    }

    #[test]
    fn verb_conjugation_strips_in_step_2() {
        assert_eq!(stemmed("parlavano"), "parl");
    }

    #[test]
    fn final_vowel_and_i_removed_in_step_3a() {
        assert_eq!(stemmed("libri"), "libr");
    }

    #[test]
    fn words_too_short_pass_through() {
        assert_eq!(stemmed("ho"), "ho");
    }

    #[test]
    fn no_hash_sentinel_escapes() {
        for ch in stemmed("quando").chars() {
            assert!(!crate::hash::is_hash_sentinel(ch));
        }
    }
}
