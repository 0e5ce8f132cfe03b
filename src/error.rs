use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to API clients. Every variant maps to one status code
/// and a `{"error": "..."}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing session cookie, or a token no user owns.
    #[error("Unauthorized")]
    Unauthenticated,

    /// Valid session, but the meal belongs to someone else. Same wire
    /// shape as `Unauthenticated`, kept distinct internally.
    #[error("Unauthorized")]
    Forbidden,

    #[error("Meal not found")]
    MealNotFound,

    #[error("{0}")]
    Validation(String),

    #[error("An unexpected error occurred")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Unauthenticated | ApiError::Forbidden => StatusCode::UNAUTHORIZED,
            ApiError::MealNotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(e) => {
                tracing::error!(error = %e, "request failed on a database error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
