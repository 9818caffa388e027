//! Uniform JSON envelope for API responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Response envelope shared by every endpoint, success and error alike.
///
/// `responseCode` mirrors the HTTP status so clients that only read the
/// body still see the outcome. `data` is omitted entirely when a handler
/// has no payload to return.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub response_message: String,
    pub response_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 200 envelope carrying a payload.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            response_message: message.into(),
            response_code: StatusCode::OK.as_u16(),
            data: Some(data),
        }
    }

    /// 201 envelope carrying the created resource.
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            response_message: message.into(),
            response_code: StatusCode::CREATED.as_u16(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Envelope without a payload, for deletes, liveness and errors.
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            response_message: message.into(),
            response_code: status.as_u16(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.response_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
