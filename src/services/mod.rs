//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

mod catalog_service;
mod request_service;
mod review_service;

pub use catalog_service::CatalogService;
pub use request_service::RequestService;
pub use review_service::ReviewService;

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since underlying pools use `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub catalog: CatalogService,
    pub requests: RequestService,
    pub reviews: ReviewService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            catalog: CatalogService::new(repos.services),
            requests: RequestService::new(repos.requests),
            reviews: ReviewService::new(repos.reviews),
        }
    }
}
