use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Booking request linking a client, an optional cleaner and a catalog service.
///
/// `cleaner_id` stays empty until a cleaner is assigned. `service_id` is a
/// soft reference; the row is kept even if the service is deleted later.
#[derive(Debug, Queryable, Selectable, Serialize, Deserialize, Clone, ToSchema)]
#[diesel(table_name = crate::schema::requests)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Request {
    pub request_id: Uuid,
    pub client_id: String,
    pub cleaner_id: String,
    pub service_id: Uuid,
    pub requested_date: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// NewRequest model for inserting new records.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::requests)]
pub struct NewRequest {
    pub request_id: Uuid,
    pub client_id: String,
    pub cleaner_id: String,
    pub service_id: Uuid,
    pub requested_date: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewRequest {
    pub fn new(
        client_id: String,
        cleaner_id: String,
        service_id: Uuid,
        requested_date: DateTime<Utc>,
        status: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            request_id: Uuid::new_v4(),
            client_id,
            cleaner_id,
            service_id,
            requested_date,
            status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// UpdateRequest model for full-row updates.
#[derive(Debug, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::requests)]
pub struct UpdateRequest {
    pub client_id: String,
    pub cleaner_id: String,
    pub service_id: Uuid,
    pub requested_date: DateTime<Utc>,
    pub status: String,
    pub updated_at: DateTime<Utc>,
}

impl UpdateRequest {
    pub fn new(
        client_id: String,
        cleaner_id: String,
        service_id: Uuid,
        requested_date: DateTime<Utc>,
        status: String,
    ) -> Self {
        Self {
            client_id,
            cleaner_id,
            service_id,
            requested_date,
            status,
            updated_at: Utc::now(),
        }
    }
}
