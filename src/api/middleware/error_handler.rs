//! Error handler for converting AppError into HTTP responses.
//!
//! Implements `IntoResponse` for `AppError` so handlers can bubble
//! errors with `?` and still answer with the uniform envelope. Server
//! faults reply with a sanitized message; the underlying cause goes to
//! the log, not the wire.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::ApiResponse;
use crate::error::AppError;

/// Maps an AppError variant to its HTTP status and envelope message.
pub fn status_and_message(error: &AppError) -> (StatusCode, String) {
    match error {
        AppError::NotFound { .. } => (StatusCode::NOT_FOUND, error.to_string()),
        AppError::Duplicate { .. } => (StatusCode::CONFLICT, error.to_string()),
        AppError::Validation { .. } => (StatusCode::BAD_REQUEST, error.to_string()),
        AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
        AppError::Unauthorized { message } => (StatusCode::UNAUTHORIZED, message.clone()),
        AppError::Database { operation, .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database operation failed: {}", operation),
        ),
        AppError::Configuration { key, .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Configuration error: {}", key),
        ),
        AppError::ConnectionPool { .. } => (
            StatusCode::SERVICE_UNAVAILABLE,
            "Database connection unavailable".to_string(),
        ),
        AppError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "An internal error occurred".to_string(),
        ),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(&self);

        // Client errors carry their own message; server faults answer
        // sanitized, so log the cause before it is lost.
        if status.is_server_error() {
            tracing::error!(
                error = %self,
                source = ?std::error::Error::source(&self),
                "Request failed"
            );
        }

        ApiResponse::message(status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = AppError::NotFound {
            entity: "service".to_string(),
            field: "id".to_string(),
            value: "7f2c1b4e-9a33-4f6a-8d15-02e57c2d8a01".to_string(),
        };
        let (status, message) = status_and_message(&error);
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(message.contains("service"));
        assert!(message.contains("7f2c1b4e"));
    }

    #[test]
    fn test_duplicate_maps_to_409() {
        let error = AppError::Duplicate {
            entity: "services".to_string(),
            field: "service_id".to_string(),
            value: "abc".to_string(),
        };
        let (status, _) = status_and_message(&error);
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[test]
    fn test_bad_request_keeps_decode_message() {
        let error = AppError::BadRequest {
            message: "Failed to deserialize the JSON body".to_string(),
        };
        let (status, message) = status_and_message(&error);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Failed to deserialize the JSON body");
    }

    #[test]
    fn test_validation_maps_to_400() {
        let error = AppError::Validation {
            field: "rollback_steps".to_string(),
            reason: "must be greater than 0".to_string(),
        };
        let (status, _) = status_and_message(&error);
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unauthorized_maps_to_401() {
        let error = AppError::Unauthorized {
            message: "Token has expired".to_string(),
        };
        let (status, message) = status_and_message(&error);
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(message, "Token has expired");
    }

    #[test]
    fn test_database_error_is_sanitized() {
        let error = AppError::Database {
            operation: "insert service".to_string(),
            source: anyhow::anyhow!("connection refused at 10.0.0.5:5432"),
        };
        let (status, message) = status_and_message(&error);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Database operation failed: insert service");
        assert!(!message.contains("10.0.0.5"));
    }

    #[test]
    fn test_pool_error_maps_to_503() {
        let error = AppError::ConnectionPool {
            source: anyhow::anyhow!("pool timed out"),
        };
        let (status, message) = status_and_message(&error);
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(message, "Database connection unavailable");
    }

    #[test]
    fn test_internal_error_is_sanitized() {
        let error = AppError::Internal {
            source: anyhow::anyhow!("stack trace with secrets"),
        };
        let (status, message) = status_and_message(&error);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "An internal error occurred");
    }

    #[test]
    fn test_into_response_uses_envelope() {
        let error = AppError::NotFound {
            entity: "review".to_string(),
            field: "id".to_string(),
            value: "x".to_string(),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
