//! Service-offering DTOs for API requests.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::{NewService, UpdateService};

/// Request body for creating a service offering.
///
/// Identifiers and timestamps are server-generated, so the payload only
/// carries the descriptive fields.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateServicePayload {
    pub name: String,
    pub description: String,
    pub price_per_hour: f64,
}

impl CreateServicePayload {
    /// Converts the payload into a NewService model for database insertion.
    pub fn into_new_service(self) -> NewService {
        NewService::new(self.name, self.description, self.price_per_hour)
    }
}

/// Request body for updating a service offering.
///
/// Carries the full set of mutable fields; the identifier comes from the
/// request path.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateServicePayload {
    pub name: String,
    pub description: String,
    pub price_per_hour: f64,
}

impl UpdateServicePayload {
    /// Converts the payload into an UpdateService changeset.
    pub fn into_update_service(self) -> UpdateService {
        UpdateService::new(self.name, self.description, self.price_per_hour)
    }
}
