use super::truncate_chars;
use crate::models::quiz::{parse_quiz_response, QuizQuestion};
use crate::startup::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tutor_core::error::AppError;

/// Characters of source text kept when building the prompt. Tighter than
/// the summarize limit: the quiz prompt carries a format example too.
const SOURCE_CHAR_LIMIT: usize = 2000;
/// Output token budget for quiz generation.
const QUIZ_TOKEN_BUDGET: u32 = 800;

#[derive(Debug, Deserialize)]
pub struct GenerateQuizRequest {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuizResponse {
    pub questions: Vec<QuizQuestion>,
}

fn quiz_prompt(text: &str) -> String {
    format!(
        "Create 3 quick multiple-choice questions from this text. Return ONLY valid JSON array:\n\
         [{{\"question\":\"Q1?\",\"options\":[\"A\",\"B\",\"C\",\"D\"],\"correctIndex\":0,\"hint\":\"Short hint\",\"explanation\":\"Brief explanation\"}}]\n\
         \n\
         Text: {}",
        text
    )
}

/// `POST /api/generateQuiz`: generate multiple-choice questions from the
/// original content when present, falling back to a prior summary.
pub async fn generate_quiz(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuizRequest>,
) -> Result<Json<GenerateQuizResponse>, AppError> {
    tracing::debug!("Quiz request received");

    let source = request
        .content
        .filter(|c| !c.is_empty())
        .or_else(|| request.summary.filter(|s| !s.is_empty()))
        .ok_or_else(|| AppError::BadRequest("No content or summary provided".to_string()))?;

    let truncated = truncate_chars(&source, SOURCE_CHAR_LIMIT);

    let raw = state
        .completions
        .complete(&quiz_prompt(&truncated), QUIZ_TOKEN_BUDGET)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Quiz generation failed");
            AppError::Internal {
                message: "Failed to generate quiz".to_string(),
                details: None,
            }
        })?;

    // Parse failures are reported with a diagnostic, unlike provider
    // failures above; the two payload shapes stay distinct.
    let questions = parse_quiz_response(&raw).map_err(|e| {
        tracing::error!(error = %e, "Quiz response failed validation");
        AppError::Internal {
            message: "Failed to parse quiz response".to_string(),
            details: Some(e.to_string()),
        }
    })?;

    tracing::debug!(count = questions.len(), "Returning quiz questions");

    Ok(Json(GenerateQuizResponse { questions }))
}
