//! Repository layer for database access.

mod request_repo;
mod review_repo;
mod service_repo;

pub use request_repo::RequestRepository;
pub use review_repo::ReviewRepository;
pub use service_repo::ServiceRepository;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for dependency injection.
#[derive(Clone)]
pub struct Repositories {
    pub services: ServiceRepository,
    pub requests: RequestRepository,
    pub reviews: ReviewRepository,
}

impl Repositories {
    /// Creates all repositories sharing the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            services: ServiceRepository::new(pool.clone()),
            requests: RequestRepository::new(pool.clone()),
            reviews: ReviewRepository::new(pool),
        }
    }
}
