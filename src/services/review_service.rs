//! Review service for business logic operations.

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{NewReview, Review, UpdateReview};
use crate::repositories::ReviewRepository;

#[derive(Clone)]
pub struct ReviewService {
    repo: ReviewRepository,
}

impl ReviewService {
    pub fn new(repo: ReviewRepository) -> Self {
        Self { repo }
    }

    /// Creates a new review.
    pub async fn create_review(&self, new_review: NewReview) -> AppResult<Review> {
        self.repo.create(new_review).await
    }

    /// Gets a review by its ID, or `NotFound`.
    pub async fn get_review(&self, id: Uuid) -> AppResult<Review> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "review".to_string(),
                field: "id".to_string(),
                value: id.to_string(),
            })
    }

    /// Lists reviews written by a client.
    pub async fn reviews_by_client(&self, client_id: &str) -> AppResult<Vec<Review>> {
        self.repo.find_by_client(client_id).await
    }

    /// Lists reviews received by a cleaner.
    pub async fn reviews_by_cleaner(&self, cleaner_id: &str) -> AppResult<Vec<Review>> {
        self.repo.find_by_cleaner(cleaner_id).await
    }

    /// Updates a review, or `NotFound` when no row matched.
    pub async fn update_review(&self, id: Uuid, changes: UpdateReview) -> AppResult<Review> {
        self.repo
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "review".to_string(),
                field: "id".to_string(),
                value: id.to_string(),
            })
    }

    /// Deletes a review, returning whether a row was removed.
    pub async fn delete_review(&self, id: Uuid) -> AppResult<bool> {
        let affected = self.repo.delete(id).await?;
        Ok(affected > 0)
    }
}
