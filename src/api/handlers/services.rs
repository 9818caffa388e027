//! Service-offering CRUD handlers.

use axum::{extract::State, http::StatusCode, routing::get, Router};
use uuid::Uuid;

use crate::api::doc::SERVICE_TAG;
use crate::api::dto::{ApiResponse, CreateServicePayload, UpdateServicePayload};
use crate::api::extract::{ApiJson, ApiPath};
use crate::error::AppError;
use crate::models::Service;
use crate::state::AppState;

/// Creates service-offering routes.
///
/// Routes:
/// - POST   /services/v1/              - Create a new service
/// - GET    /services/v1/              - List all services
/// - GET    /services/v1/{service_id}  - Get service by ID
/// - PUT    /services/v1/{service_id}  - Update service by ID
/// - DELETE /services/v1/{service_id}  - Delete service by ID
pub fn service_routes() -> Router<AppState> {
    Router::new()
        .route("/services/v1/", get(list_services).post(create_service))
        .route(
            "/services/v1/{service_id}",
            get(get_service).put(update_service).delete(delete_service),
        )
}

/// Create a new service offering.
#[utoipa::path(
    post,
    path = "/services/v1/",
    request_body = CreateServicePayload,
    responses(
        (status = 201, description = "Service created"),
        (status = 400, description = "Malformed request body")
    ),
    tag = SERVICE_TAG
)]
pub async fn create_service(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateServicePayload>,
) -> Result<ApiResponse<Service>, AppError> {
    let service = state
        .services
        .catalog
        .create_service(payload.into_new_service())
        .await?;
    Ok(ApiResponse::created("Service created successfully", service))
}

/// Fetch a single service offering.
#[utoipa::path(
    get,
    path = "/services/v1/{service_id}",
    params(
        ("service_id" = Uuid, Path, description = "Service identifier")
    ),
    responses(
        (status = 200, description = "Service found"),
        (status = 404, description = "Service not found")
    ),
    tag = SERVICE_TAG
)]
pub async fn get_service(
    State(state): State<AppState>,
    ApiPath(service_id): ApiPath<Uuid>,
) -> Result<ApiResponse<Service>, AppError> {
    let service = state.services.catalog.get_service(service_id).await?;
    Ok(ApiResponse::ok("Service found", service))
}

/// List all service offerings.
#[utoipa::path(
    get,
    path = "/services/v1/",
    responses(
        (status = 200, description = "Services found")
    ),
    tag = SERVICE_TAG
)]
pub async fn list_services(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<Service>>, AppError> {
    let services = state.services.catalog.list_services().await?;
    Ok(ApiResponse::ok("Services found", services))
}

/// Update a service offering.
///
/// The identifier comes from the path; the body carries the full set of
/// mutable fields.
#[utoipa::path(
    put,
    path = "/services/v1/{service_id}",
    params(
        ("service_id" = Uuid, Path, description = "Service identifier")
    ),
    request_body = UpdateServicePayload,
    responses(
        (status = 200, description = "Service updated"),
        (status = 404, description = "Service not found")
    ),
    tag = SERVICE_TAG
)]
pub async fn update_service(
    State(state): State<AppState>,
    ApiPath(service_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateServicePayload>,
) -> Result<ApiResponse<Service>, AppError> {
    let service = state
        .services
        .catalog
        .update_service(service_id, payload.into_update_service())
        .await?;
    Ok(ApiResponse::ok("Service updated successfully", service))
}

/// Delete a service offering.
#[utoipa::path(
    delete,
    path = "/services/v1/{service_id}",
    params(
        ("service_id" = Uuid, Path, description = "Service identifier")
    ),
    responses(
        (status = 200, description = "Service deleted"),
        (status = 404, description = "Service not found")
    ),
    tag = SERVICE_TAG
)]
pub async fn delete_service(
    State(state): State<AppState>,
    ApiPath(service_id): ApiPath<Uuid>,
) -> Result<ApiResponse<()>, AppError> {
    let deleted = state.services.catalog.delete_service(service_id).await?;
    if deleted {
        Ok(ApiResponse::message(
            StatusCode::OK,
            "Service deleted successfully",
        ))
    } else {
        Err(AppError::NotFound {
            entity: "service".to_string(),
            field: "id".to_string(),
            value: service_id.to_string(),
        })
    }
}
