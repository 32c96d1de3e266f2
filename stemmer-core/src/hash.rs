//! Hash / unhash layer.
//!
//! Several languages have letters that alternate between vowel and
//! consonant roles depending on context (English Y, Dutch Y/I, German
//! Y/U, French Y/U/I, Italian U/I). The suffix tables are expressed over
//! "vowel" and "consonant" classes, so these letters are temporarily
//! rewritten to sentinel codepoints before rule application, and restored
//! afterward. No hash sentinel may escape a stemmer's return value.

use crate::char_class;
use crate::word::Word;

/// Reserved low-ASCII control codepoints used as sentinels. These never
/// appear in real-world indexed text, matching the reference's choice of
/// bell/tab/line-feed/vertical-tab/form-feed/carriage-return/shift-out.
const UPPER_Y_HASH: char = '\u{7}';
const LOWER_Y_HASH: char = '\u{9}';
const UPPER_I_HASH: char = '\u{A}';
const LOWER_I_HASH: char = '\u{B}';
const UPPER_U_HASH: char = '\u{C}';
const LOWER_U_HASH: char = '\u{D}';
const DIAERESIS_HASH: char = '\u{E}';

/// `true` if `ch` is the lowercase Y sentinel (English step 1c needs to tell
/// a hashed consonantal Y apart from the other sentinel kinds).
#[inline]
pub fn is_lower_y_hash(ch: char) -> bool {
    ch == LOWER_Y_HASH
}

/// `true` if `ch` is the uppercase Y sentinel.
#[inline]
pub fn is_upper_y_hash(ch: char) -> bool {
    ch == UPPER_Y_HASH
}

/// `true` if `ch` is either case of the hashed U sentinel (German's step 2
/// `et`-ending guard needs to treat a hashed U as a valid preceding letter).
#[inline]
pub fn is_u_hash(ch: char) -> bool {
    matches!(ch, UPPER_U_HASH | LOWER_U_HASH)
}

/// `true` if `ch` is one of the reserved sentinel codepoints.
#[inline]
pub fn is_hash_sentinel(ch: char) -> bool {
    matches!(
        ch,
        UPPER_Y_HASH
            | LOWER_Y_HASH
            | UPPER_I_HASH
            | LOWER_I_HASH
            | UPPER_U_HASH
            | LOWER_U_HASH
            | DIAERESIS_HASH
    )
}

fn hash_for(ch: char) -> Option<char> {
    match ch {
        'y' => Some(LOWER_Y_HASH),
        'Y' => Some(UPPER_Y_HASH),
        'i' => Some(LOWER_I_HASH),
        'I' => Some(UPPER_I_HASH),
        'u' => Some(LOWER_U_HASH),
        'U' => Some(UPPER_U_HASH),
        _ => None,
    }
}

/// English: initial `Y` becomes a sentinel; any `Y` preceded by a vowel
/// becomes a sentinel too (it is acting as a consonant in both cases).
pub fn hash_y(word: &mut Word, vowels: &[char]) {
    if word.len() < 2 {
        return;
    }
    if let Some(h) = word.at(0).filter(|c| matches!(c, 'y' | 'Y')).and_then(hash_for) {
        word.set(0, h);
    }
    let mut in_vowel = word.at(0).is_some_and(|c| char_class::is_one_of(c, vowels));
    for i in 1..word.len() {
        let ch = word.at(i).unwrap();
        if in_vowel && matches!(ch, 'y' | 'Y') {
            word.set(i, hash_for(ch).unwrap());
            in_vowel = false;
        } else if char_class::is_one_of(ch, vowels) {
            in_vowel = true;
        } else {
            in_vowel = false;
        }
    }
}

/// Reverses `hash_y`.
pub fn unhash_y(word: &mut Word) {
    word.replace_all(LOWER_Y_HASH, 'y');
    word.replace_all(UPPER_Y_HASH, 'Y');
}

/// Dutch: initial `Y` hashed; `Y` after a vowel hashed; `I` between two
/// vowels hashed.
pub fn hash_dutch_yi(word: &mut Word, vowels: &[char]) {
    if word.len() < 2 {
        return;
    }
    if matches!(word.at(0), Some('y') | Some('Y')) {
        word.set(0, hash_for(word.at(0).unwrap()).unwrap());
    }
    let mut in_vowel = word.at(0).is_some_and(|c| char_class::is_one_of(c, vowels));
    let last = word.len() - 1;
    for i in 1..last {
        let ch = word.at(i).unwrap();
        let next_is_vowel = word.at(i + 1).is_some_and(|c| char_class::is_one_of(c, vowels));
        if in_vowel && matches!(ch, 'i' | 'I') && next_is_vowel {
            word.set(i, hash_for(ch).unwrap());
            in_vowel = false;
        } else if in_vowel && matches!(ch, 'y' | 'Y') {
            word.set(i, hash_for(ch).unwrap());
            in_vowel = false;
        } else if char_class::is_one_of(ch, vowels) {
            in_vowel = true;
        } else {
            in_vowel = false;
        }
    }
    let ch = word.at(last).unwrap();
    if in_vowel && matches!(ch, 'y' | 'Y') {
        word.set(last, hash_for(ch).unwrap());
    }
}

/// Reverses `hash_dutch_yi`.
pub fn unhash_dutch_yi(word: &mut Word) {
    unhash_y(word);
    word.replace_all(LOWER_I_HASH, 'i');
    word.replace_all(UPPER_I_HASH, 'I');
}

/// German: `Y` or `U` between two vowels is hashed.
pub fn hash_german_yu(word: &mut Word, vowels: &[char]) {
    if word.len() < 2 {
        return;
    }
    let mut in_vowel = word.at(0).is_some_and(|c| char_class::is_one_of(c, vowels));
    for i in 1..word.len() - 1 {
        let ch = word.at(i).unwrap();
        let next_is_vowel = word.at(i + 1).is_some_and(|c| char_class::is_one_of(c, vowels));
        if in_vowel && char_class::is_one_of(ch, vowels) && next_is_vowel {
            if let Some(h) = hash_for(ch).filter(|_| matches!(ch, 'y' | 'Y' | 'u' | 'U')) {
                word.set(i, h);
            }
        } else if char_class::is_one_of(ch, vowels) {
            in_vowel = true;
        } else {
            in_vowel = false;
        }
    }
}

/// Reverses `hash_german_yu`.
pub fn unhash_german_yu(word: &mut Word) {
    unhash_y(word);
    word.replace_all(LOWER_U_HASH, 'u');
    word.replace_all(UPPER_U_HASH, 'U');
}

/// French: `U`/`I` between two vowels hashed; `Y` adjacent to any vowel
/// hashed; `U` after `Q` hashed.
pub fn hash_french_yui(word: &mut Word, vowels: &[char]) {
    if word.len() < 2 {
        return;
    }
    let mut in_vowel = false;
    let last = word.len() - 1;
    let mut i = 0;
    while i < last {
        let ch = word.at(i).unwrap();
        let next = word.at(i + 1).unwrap();
        let next_is_vowel = char_class::is_one_of(next, vowels);
        if in_vowel && char_class::is_one_of(ch, vowels) && next_is_vowel {
            if let Some(h) = hash_for(ch) {
                word.set(i, h);
                in_vowel = false;
            }
        } else if in_vowel && matches!(ch, 'y' | 'Y') {
            word.set(i, hash_for(ch).unwrap());
            in_vowel = false;
        } else if matches!(ch, 'y' | 'Y') && next_is_vowel && !matches!(next, 'y' | 'Y') {
            word.set(i, hash_for(ch).unwrap());
            in_vowel = false;
        } else if char_class::is_one_of(ch, vowels) {
            let prev_is_q = i > 0 && matches!(word.at(i - 1), Some('q') | Some('Q'));
            if matches!(ch, 'u' | 'U') && prev_is_q {
                word.set(i, hash_for(ch).unwrap());
                in_vowel = false;
            } else {
                in_vowel = true;
            }
        } else {
            in_vowel = false;
        }
        i += 1;
    }
    // final character
    let ch = word.at(last).unwrap();
    let prev_is_vowel = last > 0 && char_class::is_one_of(word.at(last - 1).unwrap(), vowels);
    let prev_is_q = last > 0 && matches!(word.at(last - 1), Some('q') | Some('Q'));
    if matches!(ch, 'y' | 'Y') && prev_is_vowel {
        word.set(last, hash_for(ch).unwrap());
    } else if matches!(ch, 'u' | 'U') && prev_is_q {
        word.set(last, hash_for(ch).unwrap());
    }
}

/// Reverses `hash_french_yui`.
pub fn unhash_french_yui(word: &mut Word) {
    unhash_y(word);
    word.replace_all(LOWER_U_HASH, 'u');
    word.replace_all(UPPER_U_HASH, 'U');
    word.replace_all(LOWER_I_HASH, 'i');
    word.replace_all(UPPER_I_HASH, 'I');
}

/// French: splits `ë`/`ï` (and uppercase) into a diaeresis sentinel plus the
/// plain vowel, so the rest of the pipeline never has to special-case them.
pub fn hash_french_ei_diaeresis(word: &mut Word) {
    let mut i = 0;
    while i < word.len() {
        let replacement = match word.at(i) {
            Some('ï') => Some('i'),
            Some('Ï') => Some('I'),
            Some('ë') => Some('e'),
            Some('Ë') => Some('E'),
            _ => None,
        };
        if let Some(plain) = replacement {
            word.set(i, plain);
            word.insert(i, DIAERESIS_HASH);
            i += 1; // skip over the sentinel we just inserted
        }
        i += 1;
    }
}

/// Reverses `hash_french_ei_diaeresis`.
pub fn unhash_french_ei_diaeresis(word: &mut Word) {
    let mut i = 0;
    while i < word.len() {
        if word.at(i) == Some(DIAERESIS_HASH) {
            word.erase(i, i + 1);
            let restored = match word.at(i) {
                Some('i') => Some('ï'),
                Some('I') => Some('Ï'),
                Some('e') => Some('ë'),
                Some('E') => Some('Ë'),
                _ => None,
            };
            if let Some(r) = restored {
                word.set(i, r);
            }
        }
        i += 1;
    }
}

/// Italian: `U`/`I` between two vowels hashed; `U` after `Q` hashed.
pub fn hash_italian_ui(word: &mut Word, vowels: &[char]) {
    if word.len() < 2 {
        return;
    }
    let mut in_vowel = word.at(0).is_some_and(|c| char_class::is_one_of(c, vowels));
    let last = word.len() - 1;
    for i in 1..last {
        let ch = word.at(i).unwrap();
        let next_is_vowel = char_class::is_one_of(word.at(i + 1).unwrap(), vowels);
        if in_vowel && matches!(ch, 'u' | 'U' | 'i' | 'I') && next_is_vowel {
            word.set(i, hash_for(ch).unwrap());
        } else if char_class::is_one_of(ch, vowels) {
            let prev_is_q = i > 0 && matches!(word.at(i - 1), Some('q') | Some('Q'));
            if matches!(ch, 'u' | 'U') && prev_is_q {
                word.set(i, hash_for(ch).unwrap());
                in_vowel = false;
            } else {
                in_vowel = true;
            }
        } else {
            in_vowel = false;
        }
    }
    let ch = word.at(last).unwrap();
    let prev_is_q = last > 0 && matches!(word.at(last - 1), Some('q') | Some('Q'));
    if matches!(ch, 'u' | 'U') && prev_is_q {
        word.set(last, hash_for(ch).unwrap());
    }
}

/// Reverses `hash_italian_ui`.
pub fn unhash_italian_ui(word: &mut Word) {
    word.replace_all(LOWER_U_HASH, 'u');
    word.replace_all(UPPER_U_HASH, 'U');
    word.replace_all(LOWER_I_HASH, 'i');
    word.replace_all(UPPER_I_HASH, 'I');
}
