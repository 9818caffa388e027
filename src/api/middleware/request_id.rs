//! Request ID middleware for request correlation.
//!
//! Every request gets a unique identifier, either taken from the
//! incoming `x-request-id` header or freshly generated. The identifier
//! is stored in request extensions for downstream handlers and echoed
//! on the response.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Header name for request ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID stored in request extensions for downstream access.
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// Ensures every request carries a request ID.
///
/// A caller-provided `x-request-id` header wins; otherwise a new UUID v4
/// is generated. The ID is added to the response headers either way.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{middleware, Extension, Router};
    use tower::ServiceExt;

    async fn echo_request_id(Extension(id): Extension<RequestId>) -> String {
        id.0
    }

    fn test_router() -> Router {
        Router::new()
            .route("/probe", get(echo_request_id))
            .layer(middleware::from_fn(request_id_middleware))
    }

    #[tokio::test]
    async fn test_preserves_caller_request_id() {
        let request = Request::builder()
            .uri("/probe")
            .header(REQUEST_ID_HEADER, "trace-me-42")
            .body(Body::empty())
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(REQUEST_ID_HEADER).unwrap(),
            "trace-me-42"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"trace-me-42");
    }

    #[tokio::test]
    async fn test_generates_request_id_when_missing() {
        let request = Request::builder()
            .uri("/probe")
            .body(Body::empty())
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();

        let header = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
            .unwrap();
        assert!(Uuid::parse_str(&header).is_ok());
    }
}
