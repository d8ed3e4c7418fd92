//! Application State - shared state handed to every route and middleware

use crate::core::logging::{AppLogger, TracingLogger};
use crate::repositories::{NationalParkRepository, PoolType, TrailRepository, UserRepository};
use std::sync::Arc;

/// Global application state shared by all routes and middleware
pub struct AppState {
    /// Repository for national parks
    pub national_park: NationalParkRepository,

    /// Repository for trails
    pub trail: TrailRepository,

    /// Repository for users
    pub user: UserRepository,

    /// Secret key used to sign JWT tokens
    pub jwt_secret: String,

    /// Work factor used when hashing new passwords
    pub bcrypt_cost: u32,

    /// Logger constructed at startup
    pub log: Arc<dyn AppLogger>,
}

impl AppState {
    /// Creates a new AppState, building every repository on top of the
    /// given connection pool.
    ///
    /// # Arguments
    /// * `pool` - Shared connection pool
    /// * `jwt_secret` - Secret key for signing JWT tokens
    pub fn new(pool: PoolType, jwt_secret: String) -> Self {
        Self {
            national_park: NationalParkRepository::new(pool.clone()),
            trail: TrailRepository::new(pool.clone()),
            user: UserRepository::new(pool),
            jwt_secret,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            log: Arc::new(TracingLogger),
        }
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    pub fn with_logger(mut self, log: Arc<dyn AppLogger>) -> Self {
        self.log = log;
        self
    }
}
