//! Review DTOs for API requests.

use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{NewReview, UpdateReview};

/// Request body for creating a review.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReviewPayload {
    pub request_id: Uuid,
    pub client_id: String,
    pub cleaner_id: String,
    pub rating: String,
    pub comment: String,
}

impl CreateReviewPayload {
    /// Converts the payload into a NewReview model for database insertion.
    pub fn into_new_review(self) -> NewReview {
        NewReview::new(
            self.request_id,
            self.client_id,
            self.cleaner_id,
            self.rating,
            self.comment,
        )
    }
}

/// Request body for updating a review.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateReviewPayload {
    pub request_id: Uuid,
    pub client_id: String,
    pub cleaner_id: String,
    pub rating: String,
    pub comment: String,
}

impl UpdateReviewPayload {
    /// Converts the payload into an UpdateReview changeset.
    pub fn into_update_review(self) -> UpdateReview {
        UpdateReview::new(
            self.request_id,
            self.client_id,
            self.cleaner_id,
            self.rating,
            self.comment,
        )
    }
}
