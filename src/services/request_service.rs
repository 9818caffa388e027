//! Booking request service for business logic operations.

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{NewRequest, Request, UpdateRequest};
use crate::repositories::RequestRepository;

/// Service for handling booking request business logic.
#[derive(Clone)]
pub struct RequestService {
    repo: RequestRepository,
}

impl RequestService {
    pub fn new(repo: RequestRepository) -> Self {
        Self { repo }
    }

    /// Creates a new booking request.
    pub async fn create_request(&self, new_request: NewRequest) -> AppResult<Request> {
        self.repo.create(new_request).await
    }

    /// Gets a booking request by its ID, or `NotFound`.
    pub async fn get_request(&self, id: Uuid) -> AppResult<Request> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "request".to_string(),
                field: "id".to_string(),
                value: id.to_string(),
            })
    }

    /// Lists all booking requests.
    pub async fn list_requests(&self) -> AppResult<Vec<Request>> {
        self.repo.list_all().await
    }

    /// Lists booking requests created by a client.
    pub async fn requests_by_client(&self, client_id: &str) -> AppResult<Vec<Request>> {
        self.repo.find_by_client(client_id).await
    }

    /// Lists booking requests assigned to a cleaner.
    pub async fn requests_by_cleaner(&self, cleaner_id: &str) -> AppResult<Vec<Request>> {
        self.repo.find_by_cleaner(cleaner_id).await
    }

    /// Updates a booking request, or `NotFound` when no row matched.
    pub async fn update_request(&self, id: Uuid, changes: UpdateRequest) -> AppResult<Request> {
        self.repo
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "request".to_string(),
                field: "id".to_string(),
                value: id.to_string(),
            })
    }

    /// Assigns a cleaner to a booking request.
    ///
    /// Writes only the cleaner column, leaving the rest of the row as
    /// the client submitted it.
    pub async fn assign_cleaner(&self, id: Uuid, cleaner_id: &str) -> AppResult<Request> {
        self.repo
            .assign_cleaner(id, cleaner_id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "request".to_string(),
                field: "id".to_string(),
                value: id.to_string(),
            })
    }

    /// Deletes a booking request.
    ///
    /// # Returns
    /// `true` if the request was deleted, `false` if not found
    pub async fn delete_request(&self, id: Uuid) -> AppResult<bool> {
        let affected = self.repo.delete(id).await?;
        Ok(affected > 0)
    }
}
