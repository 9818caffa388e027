//! Booking request DTOs for API requests.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{NewRequest, UpdateRequest};

/// Request body for creating a booking request.
///
/// `cleaner_id` may be omitted; a request without one is unassigned until
/// the assign-cleaner endpoint is called.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRequestPayload {
    pub client_id: String,
    #[serde(default)]
    pub cleaner_id: String,
    pub service_id: Uuid,
    pub requested_date: DateTime<Utc>,
    pub status: String,
}

impl CreateRequestPayload {
    /// Converts the payload into a NewRequest model for database insertion.
    pub fn into_new_request(self) -> NewRequest {
        NewRequest::new(
            self.client_id,
            self.cleaner_id,
            self.service_id,
            self.requested_date,
            self.status,
        )
    }
}

/// Request body for updating a booking request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRequestPayload {
    pub client_id: String,
    #[serde(default)]
    pub cleaner_id: String,
    pub service_id: Uuid,
    pub requested_date: DateTime<Utc>,
    pub status: String,
}

impl UpdateRequestPayload {
    /// Converts the payload into an UpdateRequest changeset.
    pub fn into_update_request(self) -> UpdateRequest {
        UpdateRequest::new(
            self.client_id,
            self.cleaner_id,
            self.service_id,
            self.requested_date,
            self.status,
        )
    }
}
