//! Script classification - picks the translation direction
//!
//! The classifier scans code points for membership in the CJK blocks used
//! here as a Chinese-script detector. Pure function, O(text length).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationDirection {
    ChineseToEnglish,
    EnglishToChinese,
}

/// CJK Unified Ideographs, Extension A, Extension B, and CJK Symbols and
/// Punctuation.
fn is_cjk(ch: char) -> bool {
    matches!(ch,
        '\u{4E00}'..='\u{9FFF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{20000}'..='\u{2A6DF}'
        | '\u{3000}'..='\u{303F}')
}

/// Any CJK code point in the text selects Chinese-to-English; everything
/// else is treated as foreign text to bring into Chinese.
pub fn classify(text: &str) -> TranslationDirection {
    if text.chars().any(is_cjk) {
        TranslationDirection::ChineseToEnglish
    } else {
        TranslationDirection::EnglishToChinese
    }
}
