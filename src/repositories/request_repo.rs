//! Booking request repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewRequest, Request, UpdateRequest};

/// Request repository holding an async connection pool.
#[derive(Clone)]
pub struct RequestRepository {
    pool: AsyncDbPool,
}

impl RequestRepository {
    /// Creates a new RequestRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Inserts a new booking request.
    pub async fn create(&self, new_request: NewRequest) -> Result<Request, AppError> {
        use crate::schema::requests::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(requests)
            .values(&new_request)
            .returning(Request::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a booking request by its identifier.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Request>, AppError> {
        use crate::schema::requests::dsl::*;
        let mut conn = self.pool.get().await?;

        requests
            .filter(request_id.eq(id))
            .select(Request::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists all booking requests.
    pub async fn list_all(&self) -> Result<Vec<Request>, AppError> {
        use crate::schema::requests::dsl::*;
        let mut conn = self.pool.get().await?;

        requests
            .select(Request::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists booking requests created by a client.
    pub async fn find_by_client(&self, client: &str) -> Result<Vec<Request>, AppError> {
        use crate::schema::requests::dsl::*;
        let mut conn = self.pool.get().await?;

        requests
            .filter(client_id.eq(client))
            .select(Request::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists booking requests assigned to a cleaner.
    pub async fn find_by_cleaner(&self, cleaner: &str) -> Result<Vec<Request>, AppError> {
        use crate::schema::requests::dsl::*;
        let mut conn = self.pool.get().await?;

        requests
            .filter(cleaner_id.eq(cleaner))
            .select(Request::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Overwrites the mutable columns of a booking request.
    ///
    /// # Returns
    /// `Some(Request)` with the updated row, or `None` when no row matched
    pub async fn update(
        &self,
        id: Uuid,
        changes: UpdateRequest,
    ) -> Result<Option<Request>, AppError> {
        use crate::schema::requests::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(requests.filter(request_id.eq(id)))
            .set(&changes)
            .returning(Request::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Assigns a cleaner to a booking request.
    ///
    /// Only the cleaner column is written; the row is otherwise untouched,
    /// including `updated_at`.
    pub async fn assign_cleaner(
        &self,
        id: Uuid,
        cleaner: &str,
    ) -> Result<Option<Request>, AppError> {
        use crate::schema::requests::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(requests.filter(request_id.eq(id)))
            .set(cleaner_id.eq(cleaner))
            .returning(Request::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Deletes a booking request.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn delete(&self, id: Uuid) -> Result<usize, AppError> {
        use crate::schema::requests::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(requests.filter(request_id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
