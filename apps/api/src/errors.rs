use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::matching::analysis::AnalysisError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Export error: {0}")]
    Export(#[from] csv::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            // Empty outcomes are warnings for the planner, not failures.
            AppError::Analysis(e @ AnalysisError::NoSkillsFound) => {
                tracing::warn!("{e}");
                (StatusCode::UNPROCESSABLE_ENTITY, "NO_SKILLS_FOUND", e.to_string())
            }
            AppError::Analysis(e @ AnalysisError::NoMatches) => {
                tracing::warn!("{e}");
                (StatusCode::UNPROCESSABLE_ENTITY, "NO_MATCHES", e.to_string())
            }
            AppError::Analysis(e @ AnalysisError::RosterUnavailable(_)) => {
                tracing::error!("{e}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "ROSTER_UNAVAILABLE",
                    "The employee roster could not be loaded".to_string(),
                )
            }
            AppError::Export(e) => {
                tracing::error!("Export error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXPORT_ERROR",
                    "The results could not be exported".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
