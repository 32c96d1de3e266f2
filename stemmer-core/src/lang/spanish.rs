//! Spanish (Snowball) stemmer.

use crate::char_class::{self, SPANISH_VOWELS};
use crate::options::StemOptions;
use crate::possessive::remove_possessive_suffix;
use crate::region::{find_r1, find_r2, find_spanish_rv, Regions};
use crate::suffix::{delete_if_in, is_suffix, is_suffix_in, replace_if_in, Region};
use crate::word::Word;

const MIN_LENGTH: usize = 3;

pub fn stem(word: &mut Word, _options: &StemOptions) {
    word.map_in_place(char_class::full_width_to_narrow);
    remove_possessive_suffix(word);

    if word.len() < MIN_LENGTH {
        return;
    }

    let r1 = find_r1(word, SPANISH_VOWELS);
    let r2 = find_r2(word, SPANISH_VOWELS, r1);
    let rv = find_spanish_rv(word, SPANISH_VOWELS);
    let mut regions = Regions { r1, r2, rv };
    regions.clamp(word.len());

    step_0(word, &mut regions);
    let len_before_1 = word.len();
    step_1(word, &mut regions);
    if word.len() == len_before_1 {
        if !step_2a(word, &mut regions) {
            step_2b(word, &mut regions);
        }
    }
    step_3(word, &mut regions);
}

/// Step 0: attached-pronoun removal after a gerund/infinitive/imperative.
fn step_0(word: &mut Word, regions: &mut Regions) {
    const PRONOUNS: &[&str] = &[
        "selas", "selos", "sela", "selo", "las", "les", "los", "nos", "me", "se", "la", "le",
        "lo",
    ];
    const PRECEDERS: &[&str] = &["iéndo", "ándo", "ár", "ér", "ír", "ando", "iendo", "ar", "er", "ir"];
    for pronoun in PRONOUNS {
        if is_suffix_in(word, pronoun, Region::Rv, regions) {
            let stem_len = word.len() - pronoun.chars().count();
            for preceder in PRECEDERS {
                let plen = preceder.chars().count();
                if stem_len >= plen {
                    let tail: Vec<char> = word.as_chars()[stem_len - plen..stem_len].to_vec();
                    let lit: Vec<char> = preceder.chars().collect();
                    if tail.iter().zip(lit.iter()).all(|(a, b)| char_class::eq_ignore_case(*a, *b)) {
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
    for suffix in [
        "anzas", "anza", "icos", "icas", "ico", "ica", "ismos", "ismo", "ables", "able", "ibles",
        "ible", "istas", "ista", "osos", "osas", "oso", "osa", "amientos", "amiento", "imientos",
        "imiento",
    ] {
        if delete_if_in(word, suffix, Region::R2, regions, false) {
            return;
        }
    }
    for suffix in [
        "adoras", "adora", "adores", "ador", "aciones", "ación", "antes", "ante", "ancias",
        "ancia",
    ] {
        if delete_if_in(word, suffix, Region::R2, regions, false) {
            return;
        }
    }
    for suffix in ["logías", "logía"] {
        if replace_if_in(word, suffix, "log", Region::R2, regions, false) {
            return;
        }
    }
    for suffix in ["uciones", "ución"] {
        if replace_if_in(word, suffix, "u", Region::R2, regions, false) {
            return;
        }
    }
    for suffix in ["encias", "encia"] {
        if replace_if_in(word, suffix, "ente", Region::R2, regions, false) {
            return;
        }
    }
    if delete_if_in(word, "amente", Region::R1, regions, false) {
        if delete_if_in(word, "iv", Region::R2, regions, false) {
            delete_if_in(word, "at", Region::R2, regions, false);
        } else if !delete_if_in(word, "os", Region::R2, regions, false)
            && !delete_if_in(word, "ic", Region::R2, regions, false)
        {
            delete_if_in(word, "ad", Region::R2, regions, false);
        }
        return;
    }
    if delete_if_in(word, "mente", Region::R2, regions, false) {
        if !delete_if_in(word, "ante", Region::R2, regions, false)
            && !delete_if_in(word, "able", Region::R2, regions, false)
        {
            delete_if_in(word, "ible", Region::R2, regions, false);
        }
        return;
    }
    for suffix in ["idades", "idad"] {
        if delete_if_in(word, suffix, Region::R2, regions, false) {
            if !delete_if_in(word, "abil", Region::R2, regions, false)
                && !delete_if_in(word, "ic", Region::R2, regions, false)
            {
                delete_if_in(word, "iv", Region::R2, regions, false);
            }
            return;
        }
    }
    for suffix in ["ivas", "ivos", "iva", "ivo"] {
        if delete_if_in(word, suffix, Region::R2, regions, false) {
            delete_if_in(word, "at", Region::R2, regions, false);
            return;
        }
    }
}

fn step_2a(word: &mut Word, regions: &mut Regions) -> bool {
    const Y_SUFFIXES: &[&str] = &[
        "yeron", "yendo", "yamos", "yais", "yan", "yen", "yas", "yes", "yo", "yó", "ya", "ye",
    ];
    for suffix in Y_SUFFIXES {
        if is_suffix_in(word, suffix, Region::Rv, regions) {
            let start = word.len() - suffix.chars().count();
            if start > 0 && matches!(word.at(start - 1), Some('u') | Some('U')) {
                word.erase(start, word.len());
                regions.clamp(word.len());
                return true;
            }
            return false;
        }
    }
    false
}

fn step_2b(word: &mut Word, regions: &mut Regions) {
    const LONG_SUFFIXES: &[&str] = &[
        "aríamos", "eríamos", "iríamos", "ásemos", "iésemos", "aríais", "eríais", "iríais",
        "áramos", "iéramos", "ásteis", "isteis", "abais", "arais", "ierais", "arían", "erían",
        "irían", "aréis", "eréis", "iréis", "asteis", "aremos", "eremos", "iremos", "ando",
        "iendo", "aban", "aran", "aren", "aría", "ería", "iría", "ados", "idos", "amos", "imos",
        "emos", "arán", "erán", "irán", "arás", "erás", "irás", "abas", "adas", "idas", "aste",
        "iste", "aron", "ieron", "ían", "ado", "ido", "ías", "ara", "iera", "ad", "ed", "id",
        "an", "ió", "ar", "er", "ir", "as", "ís", "en", "es",
    ];
    for suffix in LONG_SUFFIXES {
        if is_suffix_in(word, suffix, Region::Rv, regions) {
            word.erase_last(suffix.chars().count());
            regions.clamp(word.len());
            return;
        }
    }
}

fn step_3(word: &mut Word, regions: &mut Regions) {
    if delete_if_in(word, "e", Region::Rv, regions, false) {
        if word.len() >= 2 && is_suffix(word, "gu") && regions.rv <= word.len() - 1 {
            word.erase_last(1);
            regions.clamp(word.len());
        }
        return;
    }
    for suffix in ["os", "a", "o", "á", "í", "ó"] {
        if delete_if_in(word, suffix, Region::Rv, regions, false) {
            return;
        }
    }
}
