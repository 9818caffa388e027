//! Review repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewReview, Review, UpdateReview};

#[derive(Clone)]
pub struct ReviewRepository {
    pool: AsyncDbPool,
}

impl ReviewRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Inserts a new review.
    pub async fn create(&self, new_review: NewReview) -> Result<Review, AppError> {
        use crate::schema::reviews::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(reviews)
            .values(&new_review)
            .returning(Review::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a review by its identifier.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, AppError> {
        use crate::schema::reviews::dsl::*;
        let mut conn = self.pool.get().await?;

        reviews
            .filter(review_id.eq(id))
            .select(Review::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists reviews written by a client.
    pub async fn find_by_client(&self, client: &str) -> Result<Vec<Review>, AppError> {
        use crate::schema::reviews::dsl::*;
        let mut conn = self.pool.get().await?;

        reviews
            .filter(client_id.eq(client))
            .select(Review::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists reviews received by a cleaner.
    pub async fn find_by_cleaner(&self, cleaner: &str) -> Result<Vec<Review>, AppError> {
        use crate::schema::reviews::dsl::*;
        let mut conn = self.pool.get().await?;

        reviews
            .filter(cleaner_id.eq(cleaner))
            .select(Review::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Overwrites the mutable columns of a review.
    pub async fn update(
        &self,
        id: Uuid,
        changes: UpdateReview,
    ) -> Result<Option<Review>, AppError> {
        use crate::schema::reviews::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(reviews.filter(review_id.eq(id)))
            .set(&changes)
            .returning(Review::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Deletes a review, returning the number of affected rows.
    pub async fn delete(&self, id: Uuid) -> Result<usize, AppError> {
        use crate::schema::reviews::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(reviews.filter(review_id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
