//! Application state for Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use crate::config::AuthConfig;
use crate::db::AsyncDbPool;
use crate::repositories::Repositories;
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// This struct is designed to be used with Axum's State extractor.
/// Cloning is cheap since Services holds its pool behind an Arc.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Auth configuration for bearer-token validation
    pub auth: AuthConfig,
}

impl AppState {
    /// Creates a new AppState from a database connection pool and auth config.
    ///
    /// Initializes all repositories and services from the provided pool.
    ///
    /// # Arguments
    /// * `pool` - The async database connection pool
    /// * `auth` - Auth configuration for bearer-token validation
    ///
    /// # Example
    /// ```ignore
    /// let pool = establish_async_connection_pool(&settings.database).await?;
    /// let state = AppState::new(pool, settings.auth.clone());
    /// ```
    pub fn new(pool: AsyncDbPool, auth: AuthConfig) -> Self {
        let repos = Repositories::new(pool);
        let services = Services::new(repos);
        Self { services, auth }
    }
}
