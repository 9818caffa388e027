use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Review left by a client for a completed booking request.
#[derive(Debug, Queryable, Selectable, Serialize, Deserialize, Clone, ToSchema)]
#[diesel(table_name = crate::schema::reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Review {
    pub review_id: Uuid,
    pub request_id: Uuid,
    pub client_id: String,
    pub cleaner_id: String,
    pub rating: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// NewReview model for inserting new records.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::reviews)]
pub struct NewReview {
    pub review_id: Uuid,
    pub request_id: Uuid,
    pub client_id: String,
    pub cleaner_id: String,
    pub rating: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewReview {
    pub fn new(
        request_id: Uuid,
        client_id: String,
        cleaner_id: String,
        rating: String,
        comment: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            review_id: Uuid::new_v4(),
            request_id,
            client_id,
            cleaner_id,
            rating,
            comment,
            created_at: now,
            updated_at: now,
        }
    }
}

/// UpdateReview model for full-row updates.
#[derive(Debug, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::reviews)]
pub struct UpdateReview {
    pub request_id: Uuid,
    pub client_id: String,
    pub cleaner_id: String,
    pub rating: String,
    pub comment: String,
    pub updated_at: DateTime<Utc>,
}

impl UpdateReview {
    pub fn new(
        request_id: Uuid,
        client_id: String,
        cleaner_id: String,
        rating: String,
        comment: String,
    ) -> Self {
        Self {
            request_id,
            client_id,
            cleaner_id,
            rating,
            comment,
            updated_at: Utc::now(),
        }
    }
}
