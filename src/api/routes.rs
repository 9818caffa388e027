//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::http::Method;
use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::api::handlers::home::home_routes;
use crate::api::handlers::requests::request_routes;
use crate::api::handlers::reviews::review_routes;
use crate::api::handlers::services::service_routes;
use crate::api::middleware::{auth_middleware, logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// The home and health-check endpoints are always open. The resource
/// endpoint groups pick up a bearer-token layer when auth is enabled.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. Request ID middleware (runs first) - generates/propagates request IDs
/// 2. Logging middleware (runs second) - logs requests with request IDs
/// 3. CORS layer
///
/// # Routes
/// - `/services/v1` - Cleaning service catalog
/// - `/requests/v1` - Booking requests and cleaner assignment
/// - `/reviews/v1` - Reviews
pub fn create_router(state: AppState) -> Router {
    let mut resource_routes = Router::new()
        .merge(service_routes())
        .merge(request_routes())
        .merge(review_routes());

    if state.auth.enabled {
        resource_routes = resource_routes.layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));
    }

    Router::new()
        .merge(home_routes())
        .merge(resource_routes)
        .layer(cors_layer())
        // Middleware is applied in reverse order - last added runs first
        // So logging runs after request_id has set the ID
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// Allows any origin, mirroring the browser clients the service is built for.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}
