//! Quiz question model and the parser that coerces model output into it.
//!
//! The model is instructed to emit a bare JSON array but is free to wrap it
//! in prose or markdown code fences. Parsing is a two-stage pipeline: a
//! lenient normalization stage that strips known wrapper patterns, then a
//! strict validation stage that only lets well-formed questions through.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Hard cap on questions returned to the client.
pub const MAX_QUESTIONS: usize = 5;

/// Fence markers, with an optional `json` tag on the opening fence.
static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```json\s*|\s*```").expect("fence pattern is valid"));

/// One validated multiple-choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Any condition where model output cannot be reduced to a non-empty,
/// validated question list. The display string becomes the `details`
/// field of the error response.
#[derive(Debug, Error)]
pub enum QuizParseError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("not an array")]
    NotAnArray,

    #[error("no valid questions")]
    NoValidQuestions,
}

/// Normalization stage: trim, strip code fences, and slice down to the
/// outermost JSON array.
///
/// Fences are removed by pattern matching, not markdown parsing. The
/// bracket slice runs from the first `[` to the last `]` when both exist
/// in that order; otherwise the text is left as-is for the parse stage to
/// reject.
pub fn normalize_response(raw: &str) -> String {
    let mut text = raw.trim().to_string();

    if text.contains("```") {
        text = CODE_FENCE.replace_all(&text, "").into_owned();
    }

    if let (Some(start), Some(end)) = (text.find('['), text.rfind(']')) {
        if end > start {
            text = text[start..=end].to_string();
        }
    }

    text
}

fn is_valid(question: &QuizQuestion) -> bool {
    !question.question.is_empty() && question.options.len() >= 2
}

/// Validation stage on top of [`normalize_response`]: parse the candidate
/// substring as JSON and keep at most [`MAX_QUESTIONS`] well-formed
/// entries, order preserved.
///
/// Items missing a question, with fewer than two options, or with a
/// non-integer `correctIndex` are dropped. An empty result is a failure,
/// never an empty quiz.
pub fn parse_quiz_response(raw: &str) -> Result<Vec<QuizQuestion>, QuizParseError> {
    let normalized = normalize_response(raw);
    let value: Value = serde_json::from_str(&normalized)?;

    let Value::Array(items) = value else {
        return Err(QuizParseError::NotAnArray);
    };

    let questions: Vec<QuizQuestion> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<QuizQuestion>(item).ok())
        .filter(is_valid)
        .take(MAX_QUESTIONS)
        .collect();

    if questions.is_empty() {
        return Err(QuizParseError::NoValidQuestions);
    }

    Ok(questions)
}
