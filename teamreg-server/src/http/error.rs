//! API error types with IntoResponse
//!
//! Every failure becomes the same JSON shape the registration form expects:
//! `{"success": false, "message": ..., "error": ...}` where `error` carries
//! the underlying cause.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Payload fields failed validation (400)
    Validation(ValidationError),

    /// Body is not JSON or doesn't have the expected shape (400)
    Malformed { message: String },

    /// No pooled connection became available in time (503)
    Unavailable(DbError),

    /// Insert or commit failed; the transaction was rolled back (500, logged)
    Database(DbError),

    /// Unknown route (404)
    NotFound { path: String },

    /// Internal error (500)
    Internal { message: String },
}

/// Failure response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: &'static str,
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Malformed { .. } => StatusCode::BAD_REQUEST,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::Validation(_) | Self::Malformed { .. } => "Invalid submission",
            Self::Unavailable(_) => "Service temporarily unavailable, please try again",
            Self::Database(_) => "Error submitting form",
            Self::NotFound { .. } => "Not found",
            Self::Internal { .. } => "Something broke!",
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Malformed { message } => message.clone(),
            Self::Unavailable(e) | Self::Database(e) => e.to_string(),
            Self::NotFound { path } => format!("no route for {}", path),
            Self::Internal { message } => message.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();

        match &self {
            Self::Validation(_) | Self::Malformed { .. } => {
                tracing::warn!(error = %detail, "Rejected submission")
            }
            Self::Unavailable(_) => tracing::warn!(error = %detail, "Database unavailable"),
            Self::Database(_) => tracing::error!(error = %detail, "Database error"),
            Self::Internal { .. } => tracing::error!(error = %detail, "Internal error"),
            Self::NotFound { .. } => {}
        }

        let body = ErrorBody {
            success: false,
            message: self.message(),
            error: detail,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        if e.is_transient() {
            Self::Unavailable(e)
        } else {
            Self::Database(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Empty { field: "startupName" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "startupName cannot be empty");
    }

    #[tokio::test]
    async fn pool_timeout_is_503() {
        let err = ApiError::from(DbError::Unavailable(sqlx::Error::PoolTimedOut));
        assert!(matches!(err, ApiError::Unavailable(_)));
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn write_failure_is_500_with_cause() {
        let err = ApiError::from(DbError::InsertTeam(sqlx::Error::RowNotFound));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Error submitting form");
        assert!(body["error"].as_str().unwrap().starts_with("failed to insert team"));
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::NotFound {
            path: "/nope".into(),
        };
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
