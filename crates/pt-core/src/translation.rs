//! Translation request model and presentation payload.

use crate::language::TranslationDirection;

/// Fixed title used for every presentation, success or failure.
pub const RESULT_TITLE: &str = "翻译结果";

/// Fixed body presented when the translation request failed.
pub const FAILURE_BODY: &str = "翻译失败";

/// One request per captured selection; never shared between sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub direction: TranslationDirection,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, direction: TranslationDirection) -> Self {
        Self {
            text: text.into(),
            direction,
        }
    }

    /// Direction-specific system instruction sent with the request.
    pub fn system_instruction(&self) -> &'static str {
        match self.direction {
            TranslationDirection::ChineseToEnglish => {
                "你是翻译助手。将用户提供的中文文本翻译成英文，保留原文的段落结构，不要添加任何解释或评论，只输出译文。"
            }
            TranslationDirection::EnglishToChinese => {
                "你是翻译助手。将用户提供的外文文本翻译成中文，保留原文的段落结构，不要添加任何解释或评论，只输出译文。"
            }
        }
    }
}

/// Title and body handed to the presenter; the pipeline retains no
/// ownership afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub title: String,
    pub body: String,
}

impl Presentation {
    /// The full, untruncated translated text.
    pub fn success(body: impl Into<String>) -> Self {
        Self {
            title: RESULT_TITLE.to_string(),
            body: body.into(),
        }
    }

    /// Fixed placeholder shown for any translation failure.
    pub fn failure() -> Self {
        Self {
            title: RESULT_TITLE.to_string(),
            body: FAILURE_BODY.to_string(),
        }
    }
}
