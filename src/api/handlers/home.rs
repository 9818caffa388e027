//! Liveness and documentation endpoints.
//!
//! These routes stay open even when bearer-token auth is enabled, so
//! load balancers and tooling can always reach them.

use axum::{http::StatusCode, response::Json, routing::get, Router};

use crate::api::doc::{ApiDoc, HOME_TAG};
use crate::api::dto::ApiResponse;
use crate::state::AppState;
use utoipa::OpenApi;

/// Creates the liveness and documentation routes.
pub fn home_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/health-check", get(health_check))
        .route("/openapi.json", get(openapi_spec))
}

/// Root banner endpoint.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner")
    ),
    tag = HOME_TAG
)]
pub async fn home() -> ApiResponse<()> {
    ApiResponse::message(StatusCode::OK, "TidyHub Cleaning Service")
}

/// Liveness check endpoint.
///
/// A static reply; if the process can answer, it is alive.
#[utoipa::path(
    get,
    path = "/health-check",
    responses(
        (status = 200, description = "Service is alive")
    ),
    tag = HOME_TAG
)]
pub async fn health_check() -> ApiResponse<()> {
    ApiResponse::message(StatusCode::OK, "TidyHub Cleaning Service Health Check")
}

/// Serves the generated OpenAPI document.
pub async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_home_banner() {
        let response = home().await;
        assert_eq!(response.response_code, 200);
        assert_eq!(response.response_message, "TidyHub Cleaning Service");
    }

    #[tokio::test]
    async fn test_health_check_banner() {
        let response = health_check().await;
        assert_eq!(
            response.response_message,
            "TidyHub Cleaning Service Health Check"
        );
    }

    #[tokio::test]
    async fn test_openapi_document_lists_routes() {
        let Json(doc) = openapi_spec().await;
        assert!(doc.paths.paths.contains_key("/services/v1/"));
        assert!(doc.paths.paths.contains_key("/requests/v1/{request_id}"));
    }
}
