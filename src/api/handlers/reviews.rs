//! Review handlers.

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Router};
use uuid::Uuid;

use crate::api::doc::REVIEW_TAG;
use crate::api::dto::{ApiResponse, CreateReviewPayload, UpdateReviewPayload};
use crate::api::extract::{ApiJson, ApiPath};
use crate::error::AppError;
use crate::models::Review;
use crate::state::AppState;

/// Creates review routes.
///
/// Routes:
/// - POST   /reviews/v1/                          - Create a new review
/// - GET    /reviews/v1/{review_id}               - Get review by ID
/// - PUT    /reviews/v1/{review_id}               - Update review by ID
/// - DELETE /reviews/v1/{review_id}               - Delete review by ID
/// - GET    /reviews/v1/client/{client_id}        - Reviews written by a client
/// - GET    /reviews/v1/cleaner/{cleaner_id}      - Reviews received by a cleaner
pub fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/reviews/v1/", post(create_review))
        .route(
            "/reviews/v1/{review_id}",
            get(get_review).put(update_review).delete(delete_review),
        )
        .route("/reviews/v1/client/{client_id}", get(get_reviews_by_client))
        .route(
            "/reviews/v1/cleaner/{cleaner_id}",
            get(get_reviews_by_cleaner),
        )
}

/// Create a new review.
#[utoipa::path(
    post,
    path = "/reviews/v1/",
    request_body = CreateReviewPayload,
    responses(
        (status = 201, description = "Review created"),
        (status = 400, description = "Malformed request body")
    ),
    tag = REVIEW_TAG
)]
pub async fn create_review(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateReviewPayload>,
) -> Result<ApiResponse<Review>, AppError> {
    let review = state
        .services
        .reviews
        .create_review(payload.into_new_review())
        .await?;
    Ok(ApiResponse::created("Review created successfully", review))
}

/// Fetch a single review.
#[utoipa::path(
    get,
    path = "/reviews/v1/{review_id}",
    params(
        ("review_id" = Uuid, Path, description = "Review identifier")
    ),
    responses(
        (status = 200, description = "Review found"),
        (status = 404, description = "Review not found")
    ),
    tag = REVIEW_TAG
)]
pub async fn get_review(
    State(state): State<AppState>,
    ApiPath(review_id): ApiPath<Uuid>,
) -> Result<ApiResponse<Review>, AppError> {
    let review = state.services.reviews.get_review(review_id).await?;
    Ok(ApiResponse::ok("Review found", review))
}

/// Update a review.
#[utoipa::path(
    put,
    path = "/reviews/v1/{review_id}",
    params(
        ("review_id" = Uuid, Path, description = "Review identifier")
    ),
    request_body = UpdateReviewPayload,
    responses(
        (status = 200, description = "Review updated"),
        (status = 404, description = "Review not found")
    ),
    tag = REVIEW_TAG
)]
pub async fn update_review(
    State(state): State<AppState>,
    ApiPath(review_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateReviewPayload>,
) -> Result<ApiResponse<Review>, AppError> {
    let review = state
        .services
        .reviews
        .update_review(review_id, payload.into_update_review())
        .await?;
    Ok(ApiResponse::ok("Review updated successfully", review))
}

/// Delete a review.
#[utoipa::path(
    delete,
    path = "/reviews/v1/{review_id}",
    params(
        ("review_id" = Uuid, Path, description = "Review identifier")
    ),
    responses(
        (status = 200, description = "Review deleted"),
        (status = 404, description = "Review not found")
    ),
    tag = REVIEW_TAG
)]
pub async fn delete_review(
    State(state): State<AppState>,
    ApiPath(review_id): ApiPath<Uuid>,
) -> Result<ApiResponse<()>, AppError> {
    let deleted = state.services.reviews.delete_review(review_id).await?;
    if deleted {
        Ok(ApiResponse::message(
            StatusCode::OK,
            "Review deleted successfully",
        ))
    } else {
        Err(AppError::NotFound {
            entity: "review".to_string(),
            field: "id".to_string(),
            value: review_id.to_string(),
        })
    }
}

/// List reviews written by a client.
#[utoipa::path(
    get,
    path = "/reviews/v1/client/{client_id}",
    params(
        ("client_id" = String, Path, description = "Client identifier")
    ),
    responses(
        (status = 200, description = "Reviews found for client")
    ),
    tag = REVIEW_TAG
)]
pub async fn get_reviews_by_client(
    State(state): State<AppState>,
    ApiPath(client_id): ApiPath<String>,
) -> Result<ApiResponse<Vec<Review>>, AppError> {
    let reviews = state.services.reviews.reviews_by_client(&client_id).await?;
    Ok(ApiResponse::ok("Reviews found for client", reviews))
}

/// List reviews received by a cleaner.
#[utoipa::path(
    get,
    path = "/reviews/v1/cleaner/{cleaner_id}",
    params(
        ("cleaner_id" = String, Path, description = "Cleaner identifier")
    ),
    responses(
        (status = 200, description = "Reviews found for cleaner")
    ),
    tag = REVIEW_TAG
)]
pub async fn get_reviews_by_cleaner(
    State(state): State<AppState>,
    ApiPath(cleaner_id): ApiPath<String>,
) -> Result<ApiResponse<Vec<Review>>, AppError> {
    let reviews = state.services.reviews.reviews_by_cleaner(&cleaner_id).await?;
    Ok(ApiResponse::ok("Reviews found for cleaner", reviews))
}
