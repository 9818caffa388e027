//! Service catalog repository for async database operations.
//!
//! Provides CRUD operations for the services table using diesel_async.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewService, Service, UpdateService};

/// Service repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap
/// (just reference count increment). No need for `Arc<ServiceRepository>`.
#[derive(Clone)]
pub struct ServiceRepository {
    pool: AsyncDbPool,
}

impl ServiceRepository {
    /// Creates a new ServiceRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Inserts a new service into the catalog.
    ///
    /// # Arguments
    /// * `new_service` - The fully stamped row to insert
    ///
    /// # Returns
    /// The created service as stored in the database
    pub async fn create(&self, new_service: NewService) -> Result<Service, AppError> {
        use crate::schema::services::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(services)
            .values(&new_service)
            .returning(Service::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a service by its identifier.
    ///
    /// # Returns
    /// `Some(Service)` if found, `None` otherwise
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Service>, AppError> {
        use crate::schema::services::dsl::*;
        let mut conn = self.pool.get().await?;

        services
            .filter(service_id.eq(id))
            .select(Service::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists all services in the catalog.
    pub async fn list_all(&self) -> Result<Vec<Service>, AppError> {
        use crate::schema::services::dsl::*;
        let mut conn = self.pool.get().await?;

        services
            .select(Service::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Overwrites the mutable columns of a service.
    ///
    /// # Arguments
    /// * `id` - The service identifier
    /// * `changes` - The replacement column values
    ///
    /// # Returns
    /// `Some(Service)` with the updated row, or `None` when no row matched
    pub async fn update(
        &self,
        id: Uuid,
        changes: UpdateService,
    ) -> Result<Option<Service>, AppError> {
        use crate::schema::services::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(services.filter(service_id.eq(id)))
            .set(&changes)
            .returning(Service::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Deletes a service from the catalog.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn delete(&self, id: Uuid) -> Result<usize, AppError> {
        use crate::schema::services::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(services.filter(service_id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
