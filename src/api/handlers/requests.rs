//! Booking request CRUD and assignment handlers.

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Router};
use uuid::Uuid;

use crate::api::doc::REQUEST_TAG;
use crate::api::dto::{ApiResponse, CreateRequestPayload, UpdateRequestPayload};
use crate::api::extract::{ApiJson, ApiPath};
use crate::error::AppError;
use crate::models::Request;
use crate::state::AppState;

/// Creates booking request routes.
///
/// Routes:
/// - POST   /requests/v1/                                              - Create a new request
/// - GET    /requests/v1/                                              - List all requests
/// - GET    /requests/v1/{request_id}                                  - Get request by ID
/// - PUT    /requests/v1/{request_id}                                  - Update request by ID
/// - DELETE /requests/v1/{request_id}                                  - Delete request by ID
/// - POST   /requests/v1/{request_id}/assign-cleaner/{cleaner_id}      - Assign a cleaner
/// - GET    /requests/v1/client/{client_id}                            - Requests by client
/// - GET    /requests/v1/cleaner/{cleaner_id}                          - Requests by cleaner
pub fn request_routes() -> Router<AppState> {
    Router::new()
        .route("/requests/v1/", get(list_requests).post(create_request))
        .route(
            "/requests/v1/{request_id}",
            get(get_request).put(update_request).delete(delete_request),
        )
        .route(
            "/requests/v1/{request_id}/assign-cleaner/{cleaner_id}",
            post(assign_cleaner),
        )
        .route("/requests/v1/client/{client_id}", get(get_requests_by_client))
        .route(
            "/requests/v1/cleaner/{cleaner_id}",
            get(get_requests_by_cleaner),
        )
}

/// Create a new booking request.
#[utoipa::path(
    post,
    path = "/requests/v1/",
    request_body = CreateRequestPayload,
    responses(
        (status = 201, description = "Request created"),
        (status = 400, description = "Malformed request body")
    ),
    tag = REQUEST_TAG
)]
pub async fn create_request(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateRequestPayload>,
) -> Result<ApiResponse<Request>, AppError> {
    let request = state
        .services
        .requests
        .create_request(payload.into_new_request())
        .await?;
    Ok(ApiResponse::created("Request created successfully", request))
}

/// Fetch a single booking request.
#[utoipa::path(
    get,
    path = "/requests/v1/{request_id}",
    params(
        ("request_id" = Uuid, Path, description = "Request identifier")
    ),
    responses(
        (status = 200, description = "Request found"),
        (status = 404, description = "Request not found")
    ),
    tag = REQUEST_TAG
)]
pub async fn get_request(
    State(state): State<AppState>,
    ApiPath(request_id): ApiPath<Uuid>,
) -> Result<ApiResponse<Request>, AppError> {
    let request = state.services.requests.get_request(request_id).await?;
    Ok(ApiResponse::ok("Request found", request))
}

/// List all booking requests.
#[utoipa::path(
    get,
    path = "/requests/v1/",
    responses(
        (status = 200, description = "Requests found")
    ),
    tag = REQUEST_TAG
)]
pub async fn list_requests(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<Request>>, AppError> {
    let requests = state.services.requests.list_requests().await?;
    Ok(ApiResponse::ok("Requests found", requests))
}

/// Update a booking request.
#[utoipa::path(
    put,
    path = "/requests/v1/{request_id}",
    params(
        ("request_id" = Uuid, Path, description = "Request identifier")
    ),
    request_body = UpdateRequestPayload,
    responses(
        (status = 200, description = "Request updated"),
        (status = 404, description = "Request not found")
    ),
    tag = REQUEST_TAG
)]
pub async fn update_request(
    State(state): State<AppState>,
    ApiPath(request_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateRequestPayload>,
) -> Result<ApiResponse<Request>, AppError> {
    let request = state
        .services
        .requests
        .update_request(request_id, payload.into_update_request())
        .await?;
    Ok(ApiResponse::ok("Request updated successfully", request))
}

/// Delete a booking request.
#[utoipa::path(
    delete,
    path = "/requests/v1/{request_id}",
    params(
        ("request_id" = Uuid, Path, description = "Request identifier")
    ),
    responses(
        (status = 200, description = "Request deleted"),
        (status = 404, description = "Request not found")
    ),
    tag = REQUEST_TAG
)]
pub async fn delete_request(
    State(state): State<AppState>,
    ApiPath(request_id): ApiPath<Uuid>,
) -> Result<ApiResponse<()>, AppError> {
    let deleted = state.services.requests.delete_request(request_id).await?;
    if deleted {
        Ok(ApiResponse::message(
            StatusCode::OK,
            "Request deleted successfully",
        ))
    } else {
        Err(AppError::NotFound {
            entity: "request".to_string(),
            field: "id".to_string(),
            value: request_id.to_string(),
        })
    }
}

/// Assign a cleaner to a booking request.
///
/// Writes only the cleaner column and returns the updated row.
#[utoipa::path(
    post,
    path = "/requests/v1/{request_id}/assign-cleaner/{cleaner_id}",
    params(
        ("request_id" = Uuid, Path, description = "Request identifier"),
        ("cleaner_id" = String, Path, description = "Cleaner to assign")
    ),
    responses(
        (status = 200, description = "Cleaner assigned"),
        (status = 404, description = "Request not found")
    ),
    tag = REQUEST_TAG
)]
pub async fn assign_cleaner(
    State(state): State<AppState>,
    ApiPath((request_id, cleaner_id)): ApiPath<(Uuid, String)>,
) -> Result<ApiResponse<Request>, AppError> {
    let request = state
        .services
        .requests
        .assign_cleaner(request_id, &cleaner_id)
        .await?;
    Ok(ApiResponse::ok("Cleaner assigned successfully", request))
}

/// List booking requests created by a client.
#[utoipa::path(
    get,
    path = "/requests/v1/client/{client_id}",
    params(
        ("client_id" = String, Path, description = "Client identifier")
    ),
    responses(
        (status = 200, description = "Requests found for client")
    ),
    tag = REQUEST_TAG
)]
pub async fn get_requests_by_client(
    State(state): State<AppState>,
    ApiPath(client_id): ApiPath<String>,
) -> Result<ApiResponse<Vec<Request>>, AppError> {
    let requests = state.services.requests.requests_by_client(&client_id).await?;
    Ok(ApiResponse::ok("Requests found for client", requests))
}

/// List booking requests assigned to a cleaner.
#[utoipa::path(
    get,
    path = "/requests/v1/cleaner/{cleaner_id}",
    params(
        ("cleaner_id" = String, Path, description = "Cleaner identifier")
    ),
    responses(
        (status = 200, description = "Requests found for cleaner")
    ),
    tag = REQUEST_TAG
)]
pub async fn get_requests_by_cleaner(
    State(state): State<AppState>,
    ApiPath(cleaner_id): ApiPath<String>,
) -> Result<ApiResponse<Vec<Request>>, AppError> {
    let requests = state
        .services
        .requests
        .requests_by_cleaner(&cleaner_id)
        .await?;
    Ok(ApiResponse::ok("Requests found for cleaner", requests))
}
