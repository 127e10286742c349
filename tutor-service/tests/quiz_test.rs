mod common;

use axum::http::StatusCode;
use common::{post_json, test_app};
use serde_json::json;
use std::sync::Arc;
use tutor_service::services::providers::mock::MockCompletionProvider;

const VALID_ARRAY: &str = r#"[{"question":"2+2?","options":["3","4","5","6"],"correctIndex":1,"hint":"math","explanation":"basic addition"}]"#;

#[tokio::test]
async fn missing_source_is_rejected_without_outbound_call() {
    let mock = Arc::new(MockCompletionProvider::returning("unused"));
    let app = test_app(mock.clone());

    let (status, body) = post_json(app, "/api/generateQuiz", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "No content or summary provided"}));
    assert!(mock.captured().is_empty());
}

#[tokio::test]
async fn fenced_completion_parses_to_questions() {
    let completion = format!("Here you go:\n```json\n{}\n```", VALID_ARRAY);
    let mock = Arc::new(MockCompletionProvider::returning(completion));
    let app = test_app(mock.clone());

    let (status, body) = post_json(
        app,
        "/api/generateQuiz",
        json!({"content": "Basic arithmetic."}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "questions": [{
                "question": "2+2?",
                "options": ["3", "4", "5", "6"],
                "correctIndex": 1,
                "hint": "math",
                "explanation": "basic addition"
            }]
        })
    );

    let calls = mock.captured();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].max_tokens, 800);
}

#[tokio::test]
async fn content_is_preferred_over_summary() {
    let mock = Arc::new(MockCompletionProvider::returning(VALID_ARRAY));
    let app = test_app(mock.clone());

    post_json(
        app,
        "/api/generateQuiz",
        json!({"content": "FULL-TEXT", "summary": "SUMMARY-TEXT"}),
    )
    .await;

    let calls = mock.captured();
    assert!(calls[0].prompt.contains("FULL-TEXT"));
    assert!(!calls[0].prompt.contains("SUMMARY-TEXT"));
}

#[tokio::test]
async fn summary_is_used_when_content_is_absent() {
    let mock = Arc::new(MockCompletionProvider::returning(VALID_ARRAY));
    let app = test_app(mock.clone());

    let (status, _) = post_json(
        app,
        "/api/generateQuiz",
        json!({"summary": "SUMMARY-TEXT"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(mock.captured()[0].prompt.contains("SUMMARY-TEXT"));
}

#[tokio::test]
async fn long_source_is_truncated_in_the_prompt() {
    let mock = Arc::new(MockCompletionProvider::returning(VALID_ARRAY));
    let app = test_app(mock.clone());

    let content = "b".repeat(2500);
    post_json(app, "/api/generateQuiz", json!({"content": content})).await;

    let expected_tail = format!("{}...", "b".repeat(2000));
    assert!(mock.captured()[0].prompt.ends_with(&expected_tail));
}

#[tokio::test]
async fn invalid_items_are_dropped_and_result_capped() {
    let items: Vec<String> = (0..7)
        .map(|i| format!(r#"{{"question":"Q{}?","options":["a","b"],"correctIndex":0}}"#, i))
        .collect();
    let completion = format!(
        r#"[{{"options":["a","b"],"correctIndex":0}},{}]"#,
        items.join(",")
    );
    let app = test_app(Arc::new(MockCompletionProvider::returning(completion)));

    let (status, body) = post_json(app, "/api/generateQuiz", json!({"content": "text"})).await;

    assert_eq!(status, StatusCode::OK);
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 5);
    assert_eq!(questions[0]["question"], "Q0?");
    assert_eq!(questions[4]["question"], "Q4?");
}

#[tokio::test]
async fn empty_array_is_a_parse_failure_not_an_empty_quiz() {
    let app = test_app(Arc::new(MockCompletionProvider::returning("[]")));

    let (status, body) = post_json(app, "/api/generateQuiz", json!({"content": "text"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": "Failed to parse quiz response", "details": "no valid questions"})
    );
}

#[tokio::test]
async fn non_array_output_is_a_parse_failure() {
    let object = r#"{"question":"Q?","options":["a","b"],"correctIndex":0}"#;
    let app = test_app(Arc::new(MockCompletionProvider::returning(object)));

    let (status, body) = post_json(app, "/api/generateQuiz", json!({"content": "text"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": "Failed to parse quiz response", "details": "not an array"})
    );
}

#[tokio::test]
async fn unparsable_output_reports_a_diagnostic() {
    let app = test_app(Arc::new(MockCompletionProvider::returning(
        "Sorry, I can't produce a quiz for that.",
    )));

    let (status, body) = post_json(app, "/api/generateQuiz", json!({"content": "text"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to parse quiz response");
    assert!(body["details"].as_str().unwrap().starts_with("invalid JSON"));
}

#[tokio::test]
async fn provider_failure_maps_to_generic_error_without_details() {
    let app = test_app(Arc::new(MockCompletionProvider::failing()));

    let (status, body) = post_json(app, "/api/generateQuiz", json!({"content": "text"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to generate quiz"}));
    assert!(body.get("details").is_none());
}
