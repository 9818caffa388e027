//! Catalog service for business logic operations.
//!
//! Provides a higher-level API for cleaning service offerings,
//! encapsulating business rules and coordinating with the repository
//! layer.

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{NewService, Service, UpdateService};
use crate::repositories::ServiceRepository;

/// Catalog service for handling service-offering business logic.
///
/// This service wraps the `ServiceRepository` and provides business-level
/// operations. Since `ServiceRepository` uses `Arc` internally via the
/// connection pool, cloning is cheap.
#[derive(Clone)]
pub struct CatalogService {
    repo: ServiceRepository,
}

impl CatalogService {
    /// Creates a new CatalogService with the given repository.
    pub fn new(repo: ServiceRepository) -> Self {
        Self { repo }
    }

    /// Creates a new service offering.
    ///
    /// # Arguments
    /// * `new_service` - The service data to create
    ///
    /// # Returns
    /// The created service with generated id and timestamps
    pub async fn create_service(&self, new_service: NewService) -> AppResult<Service> {
        self.repo.create(new_service).await
    }

    /// Gets a service offering by its ID.
    ///
    /// # Arguments
    /// * `id` - The service's ID
    ///
    /// # Returns
    /// The service if found, or `NotFound` error
    pub async fn get_service(&self, id: Uuid) -> AppResult<Service> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "service".to_string(),
                field: "id".to_string(),
                value: id.to_string(),
            })
    }

    /// Lists all service offerings.
    ///
    /// # Returns
    /// A vector of all services
    pub async fn list_services(&self) -> AppResult<Vec<Service>> {
        self.repo.list_all().await
    }

    /// Updates a service offering.
    ///
    /// # Arguments
    /// * `id` - The service's ID
    /// * `changes` - The new column values
    ///
    /// # Returns
    /// The updated service, or `NotFound` error when no row matched
    pub async fn update_service(&self, id: Uuid, changes: UpdateService) -> AppResult<Service> {
        self.repo
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "service".to_string(),
                field: "id".to_string(),
                value: id.to_string(),
            })
    }

    /// Deletes a service offering.
    ///
    /// # Arguments
    /// * `id` - The service's ID
    ///
    /// # Returns
    /// `true` if the service was deleted, `false` if not found
    pub async fn delete_service(&self, id: Uuid) -> AppResult<bool> {
        let affected = self.repo.delete(id).await?;
        Ok(affected > 0)
    }
}
