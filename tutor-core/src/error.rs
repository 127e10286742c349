use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error taxonomy.
///
/// Every failure is caught at the handler boundary and rendered through
/// [`IntoResponse`]; nothing escapes to the transport layer uncaught and
/// nothing is fatal to the process.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or unusable request input. The message is the exact body
    /// text returned to the caller.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Request rejected by the admission gate. Carries an optional
    /// `Retry-After` value in seconds.
    #[error("too many requests")]
    TooManyRequests(String, Option<u64>),

    /// Any failure during handling. `message` is the fixed public text;
    /// `details` is only populated when the caller is meant to see a
    /// diagnostic. The underlying cause is logged server-side, never
    /// exposed here.
    #[error("internal error: {message}")]
    Internal {
        message: String,
        details: Option<String>,
    },

    /// Startup-time configuration failure.
    #[error("configuration error: {0}")]
    Config(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            details: Option<String>,
        }

        let (status, error, details, retry_after) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None, None),
            AppError::TooManyRequests(msg, retry) => {
                (StatusCode::TOO_MANY_REQUESTS, msg, None, retry)
            }
            AppError::Internal { message, details } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, details, None)
            }
            AppError::Config(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration error".to_string(),
                Some(err.to_string()),
                None,
            ),
        };

        let mut response = (status, Json(ErrorResponse { error, details })).into_response();

        if let Some(retry) = retry_after {
            response
                .headers_mut()
                .insert(axum::http::header::RETRY_AFTER, retry.into());
        }

        response
    }
}
