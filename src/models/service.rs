use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Cleaning service offering as stored in the catalog.
/// Derives Queryable for SELECT operations and Selectable for type-safe column selection.
#[derive(Debug, Queryable, Selectable, Serialize, Deserialize, Clone, ToSchema)]
#[diesel(table_name = crate::schema::services)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Service {
    pub service_id: Uuid,
    pub name: String,
    pub description: String,
    pub price_per_hour: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// NewService model for inserting new records.
/// Carries the full row; the identifier and timestamps are stamped at construction.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::services)]
pub struct NewService {
    pub service_id: Uuid,
    pub name: String,
    pub description: String,
    pub price_per_hour: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewService {
    /// Builds an insertable row with a fresh identifier and matching timestamps.
    pub fn new(name: String, description: String, price_per_hour: f64) -> Self {
        let now = Utc::now();
        Self {
            service_id: Uuid::new_v4(),
            name,
            description,
            price_per_hour,
            created_at: now,
            updated_at: now,
        }
    }
}

/// UpdateService model for full-row updates.
/// Every mutable column is overwritten and updated_at is refreshed.
#[derive(Debug, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::services)]
pub struct UpdateService {
    pub name: String,
    pub description: String,
    pub price_per_hour: f64,
    pub updated_at: DateTime<Utc>,
}

impl UpdateService {
    pub fn new(name: String, description: String, price_per_hour: f64) -> Self {
        Self {
            name,
            description,
            price_per_hour,
            updated_at: Utc::now(),
        }
    }
}
