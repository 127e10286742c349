use super::truncate_chars;
use crate::startup::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tutor_core::error::AppError;

/// Characters of source text kept when building the prompt.
const CONTENT_CHAR_LIMIT: usize = 3000;
/// Output token budget for summaries.
const SUMMARY_TOKEN_BUDGET: u32 = 500;

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// `POST /api/summarize`: summarize student-provided text.
pub async fn summarize(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, AppError> {
    let content = request
        .content
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::BadRequest("No content provided".to_string()))?;

    let truncated = truncate_chars(&content, CONTENT_CHAR_LIMIT);
    let prompt = format!(
        "Summarize the following text concisely for a student (max 200 words):\n\n{}",
        truncated
    );

    let summary = state
        .completions
        .complete(&prompt, SUMMARY_TOKEN_BUDGET)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Summarization failed");
            AppError::Internal {
                message: "Failed to summarize".to_string(),
                details: None,
            }
        })?;

    Ok(Json(SummarizeResponse { summary }))
}
