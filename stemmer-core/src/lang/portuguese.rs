//! Portuguese (Snowball) stemmer.
//!
//! Works over `ã`/`õ` pre-encoded as the two-character sequences `a~`/`o~`
//! so that ordinary suffix literals can express nasalized endings (e.g.
//! "aço~es", "uça~o"). The encoding is undone before returning.

use crate::char_class::{self, PORTUGUESE_VOWELS};
use crate::options::StemOptions;
use crate::possessive::remove_possessive_suffix;
use crate::region::{find_r1, find_r2, find_spanish_rv, Regions};
use crate::suffix::{delete_if_in, is_suffix, is_suffix_in, replace_if_in, Region};
use crate::word::Word;

const MIN_LENGTH: usize = 3;

/// Stems `word` in place following the Portuguese algorithm.
pub fn stem(word: &mut Word, _options: &StemOptions) {
    word.map_in_place(char_class::full_width_to_narrow);
    remove_possessive_suffix(word);

    if word.len() < MIN_LENGTH {
        return;
    }

    encode_tildes(word);

    let r1 = find_r1(word, PORTUGUESE_VOWELS);
    let r2 = find_r2(word, PORTUGUESE_VOWELS, r1);
    let rv = find_spanish_rv(word, PORTUGUESE_VOWELS);
    let mut regions = Regions { r1, r2, rv };
    regions.clamp(word.len());

    let original_len = word.len();
    step_1(word, &mut regions);
    let altered = if word.len() == original_len {
        step_2(word, &mut regions)
    } else {
        true
    };

    if altered {
        step_3(word, &mut regions);
    } else {
        step_4(word, &mut regions);
    }
    step_5(word, &mut regions);

    decode_tildes(word);
}

fn encode_tildes(word: &mut Word) {
    let mut i = 0;
    while i < word.len() {
        match word.at(i).unwrap() {
            'ã' => {
                word.set(i, 'a');
                word.insert(i + 1, '~');
                i += 1;
            }
            'Ã' => {
                word.set(i, 'A');
                word.insert(i + 1, '~');
                i += 1;
            }
            'õ' => {
                word.set(i, 'o');
                word.insert(i + 1, '~');
                i += 1;
            }
            'Õ' => {
                word.set(i, 'O');
                word.insert(i + 1, '~');
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }
}

fn decode_tildes(word: &mut Word) {
    let mut i = 0;
    while i + 1 < word.len() {
        if word.at(i + 1) == Some('~') {
            let decoded = match word.at(i).unwrap() {
                'a' => Some('ã'),
                'A' => Some('Ã'),
                'o' => Some('õ'),
                'O' => Some('Õ'),
                _ => None,
            };
            if let Some(ch) = decoded {
                word.set(i, ch);
                word.erase(i + 1, i + 2);
            }
        }
        i += 1;
    }
}

/// Standard-endings removal (the Snowball "step 1"). The first matching
/// suffix wins; several entries chain into a follow-up deletion/replacement
/// attempted only after the outer suffix is actually removed.
fn step_1(word: &mut Word, regions: &mut Regions) {
    if delete_if_in(word, "uço~es", Region::R2, regions, true) {
        return;
    }
    if delete_if_in(word, "amento", Region::R2, regions, true) {
        return;
    }
    if delete_if_in(word, "imento", Region::R2, regions, true) {
        return;
    }
    if delete_if_in(word, "adoras", Region::R2, regions, true) {
        return;
    }
    if delete_if_in(word, "adores", Region::R2, regions, true) {
        return;
    }
    if delete_if_in(word, "aço~es", Region::R2, regions, true) {
        return;
    }
    if replace_if_in(word, "ências", "ente", Region::R2, regions, true) {
        return;
    }
    if is_suffix_in(word, "logias", Region::R2, regions) {
        word.erase_last(3);
        regions.clamp(word.len());
        return;
    }
    if is_suffix_in(word, "amente", Region::R1, regions) {
        word.erase_last(6);
        regions.clamp(word.len());
        if delete_if_in(word, "iv", Region::R2, regions, false) {
            delete_if_in(word, "at", Region::R2, regions, false);
        } else if delete_if_in(word, "os", Region::R2, regions, true) {
        } else if delete_if_in(word, "ic", Region::R2, regions, true) {
        } else {
            delete_if_in(word, "ad", Region::R2, regions, true);
        }
        return;
    }
    if is_suffix_in(word, "idades", Region::R2, regions) {
        word.erase_last(4);
        regions.clamp(word.len());
        if delete_if_in(word, "abil", Region::R2, regions, true) {
        } else if delete_if_in(word, "ic", Region::R2, regions, true) {
        } else {
            delete_if_in(word, "iv", Region::R2, regions, true);
        }
        return;
    }
    if is_suffix_in(word, "logia", Region::R2, regions) {
        word.erase_last(2);
        regions.clamp(word.len());
        return;
    }
    if is_suffix_in(word, "uça~o", Region::R2, regions) {
        word.erase_last(4);
        regions.clamp(word.len());
        return;
    }
    if replace_if_in(word, "ência", "ente", Region::R2, regions, true) {
        return;
    }
    if is_suffix_in(word, "mente", Region::R2, regions) {
        word.erase_last(5);
        regions.clamp(word.len());
        if delete_if_in(word, "ante", Region::R2, regions, true) {
        } else if delete_if_in(word, "avel", Region::R2, regions, true) {
        } else {
            delete_if_in(word, "ível", Region::R2, regions, true);
        }
        return;
    }
    if is_suffix_in(word, "idade", Region::R2, regions) {
        word.erase_last(5);
        regions.clamp(word.len());
        if delete_if_in(word, "abil", Region::R2, regions, true) {
        } else if delete_if_in(word, "ic", Region::R2, regions, true) {
        } else {
            delete_if_in(word, "iv", Region::R2, regions, true);
        }
        return;
    }
    if is_suffix(word, "eiras") && regions.rv <= word.len() - 4 {
        word.erase_last(2);
        regions.clamp(word.len());
        return;
    }
    if delete_if_in(word, "antes", Region::R2, regions, true) {
        return;
    }
    if delete_if_in(word, "ância", Region::R2, regions, true) {
        return;
    }
    if delete_if_in(word, "ismos", Region::R2, regions, true) {
        return;
    }
    if delete_if_in(word, "istas", Region::R2, regions, true) {
        return;
    }
    if delete_if_in(word, "adora", Region::R2, regions, true) {
        return;
    }
    if delete_if_in(word, "aça~o", Region::R2, regions, true) {
        return;
    }
    if delete_if_in(word, "ante", Region::R2, regions, true) {
        return;
    }
    if delete_if_in(word, "ezas", Region::R2, regions, true) {
        return;
    }
    if delete_if_in(word, "icos", Region::R2, regions, true) {
        return;
    }
    if delete_if_in(word, "icas", Region::R2, regions, true) {
        return;
    }
    if delete_if_in(word, "ismo", Region::R2, regions, true) {
        return;
    }
    if delete_if_in(word, "ável", Region::R2, regions, true) {
        return;
    }
    if delete_if_in(word, "ível", Region::R2, regions, true) {
        return;
    }
    if delete_if_in(word, "ista", Region::R2, regions, true) {
        return;
    }
    if delete_if_in(word, "osos", Region::R2, regions, true) {
        return;
    }
    if delete_if_in(word, "osas", Region::R2, regions, true) {
        return;
    }
    if delete_if_in(word, "ador", Region::R2, regions, true) {
        return;
    }
    if is_suffix_in(word, "ivas", Region::R2, regions) {
        word.erase_last(4);
        regions.clamp(word.len());
        delete_if_in(word, "at", Region::R2, regions, true);
        return;
    }
    if is_suffix_in(word, "ivos", Region::R2, regions) {
        word.erase_last(4);
        regions.clamp(word.len());
        delete_if_in(word, "at", Region::R2, regions, true);
        return;
    }
    if is_suffix(word, "eira") && regions.rv <= word.len() - 3 {
        word.erase_last(1);
        regions.clamp(word.len());
        return;
    }
    if is_suffix_in(word, "iva", Region::R2, regions) {
        word.erase_last(3);
        regions.clamp(word.len());
        delete_if_in(word, "at", Region::R2, regions, true);
        return;
    }
    if is_suffix_in(word, "ivo", Region::R2, regions) {
        word.erase_last(3);
        regions.clamp(word.len());
        delete_if_in(word, "at", Region::R2, regions, true);
        return;
    }
    if delete_if_in(word, "eza", Region::R2, regions, true) {
        return;
    }
    if delete_if_in(word, "ico", Region::R2, regions, true) {
        return;
    }
    if delete_if_in(word, "ica", Region::R2, regions, true) {
        return;
    }
    if delete_if_in(word, "oso", Region::R2, regions, true) {
        return;
    }
    delete_if_in(word, "osa", Region::R2, regions, true);
}

/// The flat, RV-guarded verb-suffix table (Snowball's "step 2"). Every
/// entry short-circuits the cascade on the first match, in or out of RV.
const VERB_SUFFIXES: &[&str] = &[
    "aríamos", "eríamos", "iríamos", "ássemos", "êssemos", "íssemos", "aríeis", "eríeis",
    "iríeis", "ásseis", "ésseis", "ísseis", "áramos", "éramos", "íramos", "ávamos", "aremos",
    "eremos", "iremos", "ariam", "eriam", "iriam", "assem", "essem", "issem", "ara~o", "era~o",
    "ira~o", "arias", "erias", "irias", "ardes", "erdes", "irdes", "asses", "esses", "isses",
    "astes", "estes", "istes", "áreis", "areis", "éreis", "ereis", "íreis", "ireis",
    "áveis", "íamos", "aria", "eria", "iria", "asse", "esse", "isse", "aste", "este", "iste",
    "arei", "erei", "irei", "aram", "eram", "iram", "avam", "arem", "erem", "irem", "ando",
    "endo", "indo", "adas", "idas", "arás", "aras", "erás", "eras", "irás", "avas", "ares",
    "eres", "ires", "íeis", "ados", "idos", "ámos", "amos", "emos", "imos", "iras", "ada",
    "ida", "ará", "ara", "erá", "era", "irá", "ava", "iam", "ado", "ido", "ias", "ais", "eis",
    "ira", "ia", "ei", "am", "em", "ar", "er", "ir", "as", "es", "is", "eu", "iu", "ou", "i",
];

fn step_2(word: &mut Word, regions: &mut Regions) -> bool {
    let original_len = word.len();
    for suffix in VERB_SUFFIXES {
        if delete_if_in(word, suffix, Region::Rv, regions, false) {
            break;
        }
    }
    word.len() != original_len
}

/// Step 3: only runs when step 1 or step 2 altered the word. Deletes a
/// final `i` when it is preceded by `c` and the `i` itself lies in RV.
fn step_3(word: &mut Word, regions: &mut Regions) {
    if is_suffix(word, "ci") && regions.rv <= word.len() - 1 {
        word.erase_last(1);
        regions.clamp(word.len());
    }
}

fn step_4(word: &mut Word, regions: &mut Regions) {
    const ENDINGS: &[&str] = &["os", "a", "i", "o", "á", "í", "ó"];
    for suffix in ENDINGS {
        if delete_if_in(word, suffix, Region::Rv, regions, false) {
            return;
        }
    }
}

fn step_5(word: &mut Word, regions: &mut Regions) {
    for suffix in ["e", "é", "ê"] {
        if delete_if_in(word, suffix, Region::Rv, regions, false) {
            if regions.rv <= word.len() - 1 && (is_suffix(word, "gu") || is_suffix(word, "ci")) {
                word.erase_last(1);
                regions.clamp(word.len());
            }
            return;
        }
    }
    match word.last() {
        Some('Ç') => word.set(word.len() - 1, 'C'),
        Some('ç') => word.set(word.len() - 1, 'c'),
        _ => {}
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
    fn scenario_from_spec() {
        assert_eq!(stemmed("qualidades"), "qualid");
    }

    #[test]
    fn verb_conjugations_strip_in_step_2() {
        assert_eq!(stemmed("caminhávamos"), "caminh");
    }

    #[test]
    fn step_1_standard_suffix_chain() {
        assert_eq!(stemmed("geologias"), "geolog");
    }

    #[test]
    fn amente_chain_falls_back_to_ad() {
        assert_eq!(stemmed("felizmente"), "feliz");
    }

    #[test]
    fn c_cedilla_softens_at_end() {
        assert_eq!(stemmed("feliz"), "feliz");
    }

    #[test]
    fn tilde_round_trips_through_encoding() {
        assert_eq!(stemmed("organização"), "organiz");
    }

    #[test]
    fn step_3_deletes_final_i_after_ci_in_rv() {
        assert_eq!(stemmed("iniciava"), "inic");
    }

    #[test]
    fn words_too_short_pass_through() {
        assert_eq!(stemmed("lá"), "lá");
    }
}
