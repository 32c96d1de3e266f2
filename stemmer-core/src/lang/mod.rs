//! Per-language stemmer implementations, one module per supported
//! language plus the no-op `none`.

pub mod danish;
pub mod dutch;
pub mod english;
pub mod finnish;
pub mod french;
pub mod german;
pub mod italian;
pub mod none;
pub mod norwegian;
pub mod portuguese;
pub mod russian;
pub mod spanish;
pub mod swedish;

use crate::options::StemOptions;
use crate::word::Word;
use crate::Language;

/// Runs `word` through the per-language algorithm selected by `language`.
///
/// `Language::None` dispatches to [`none::stem`], the no-op stemmer.
/// Every branch is a total function: no input can make `dispatch` panic.
pub fn dispatch(language: Language, word: &mut Word, options: &StemOptions) {
    match language {
        Language::None => none::stem(word, options),
        Language::Danish => danish::stem(word, options),
        Language::Dutch => dutch::stem(word, options),
        Language::English => english::stem(word, options),
        Language::Finnish => finnish::stem(word, options),
        Language::French => french::stem(word, options),
        Language::German => german::stem(word, options),
        Language::Italian => italian::stem(word, options),
        Language::Norwegian => norwegian::stem(word, options),
        Language::Portuguese => portuguese::stem(word, options),
        Language::Russian => russian::stem(word, options),
        Language::Spanish => spanish::stem(word, options),
        Language::Swedish => swedish::stem(word, options),
    }
}
