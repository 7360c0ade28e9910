//! Unified error handling for the HTTP surface.
//!
//! Every error renders as a `{ "msg": ... }` body with the status chosen
//! here, so handlers and services only ever return `AppError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application error type mapping to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// `sort_by` value outside the endpoint's whitelist.
    #[error("Invalid sort_by query")]
    InvalidSortColumn,

    /// `order` value that is neither `asc` nor `desc`.
    #[error("Invalid order query")]
    InvalidOrder,

    /// Topic filter that matched zero rows.
    #[error("Invalid topic query")]
    InvalidTopicFilter,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// Check if this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            AppError::InvalidSortColumn | AppError::InvalidOrder | AppError::InvalidTopicFilter => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database(e) => database_status(e),
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Unhandled error");
        }

        (status, Json(json!({ "msg": msg }))).into_response()
    }
}

/// Client faults reported by PostgreSQL (invalid text representation,
/// not-null violation, foreign-key violation) map to 400s with stable
/// messages; anything else is an opaque 500.
fn database_status(e: &sqlx::Error) -> (StatusCode, String) {
    if let sqlx::Error::Database(db_err) = e {
        match db_err.code().as_deref() {
            Some("22P02") => {
                return (StatusCode::BAD_REQUEST, "Received invalid type".to_string());
            }
            Some("23502") => {
                return (
                    StatusCode::BAD_REQUEST,
                    "Received null or undefined required element".to_string(),
                );
            }
            Some("23503") => {
                return (
                    StatusCode::BAD_REQUEST,
                    "Received invalid reference value".to_string(),
                );
            }
            _ => {}
        }
    }

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Something went wrong!".to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_errors_display_documented_messages() {
        assert_eq!(AppError::InvalidSortColumn.to_string(), "Invalid sort_by query");
        assert_eq!(AppError::InvalidOrder.to_string(), "Invalid order query");
        assert_eq!(AppError::InvalidTopicFilter.to_string(), "Invalid topic query");
    }

    #[test]
    fn not_found_displays_its_message() {
        let err = AppError::NotFound("Article does not exist".to_string());
        assert_eq!(err.to_string(), "Article does not exist");
        assert!(err.is_not_found());
    }

    #[test]
    fn app_error_from_sqlx() {
        let sqlx_err = sqlx::Error::RowNotFound;
        let err: AppError = sqlx_err.into();
        assert!(matches!(err, AppError::Database(_)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn unclassified_database_error_is_opaque() {
        let (status, msg) = database_status(&sqlx::Error::RowNotFound);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(msg, "Something went wrong!");
    }
}
