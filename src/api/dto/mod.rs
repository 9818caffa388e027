//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `envelope` - The uniform response envelope
//! - `service` - Service-offering request payloads
//! - `request` - Booking request payloads
//! - `review` - Review request payloads

mod envelope;
mod request;
mod review;
mod service;

pub use envelope::ApiResponse;
pub use request::{CreateRequestPayload, UpdateRequestPayload};
pub use review::{CreateReviewPayload, UpdateReviewPayload};
pub use service::{CreateServicePayload, UpdateServicePayload};
