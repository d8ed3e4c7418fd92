//! Core Module - infrastructure shared by the whole application
//!
//! - Authentication and JWT
//! - Configuration
//! - Error handling
//! - Logging
//! - Application state

pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod state;

// Re-exports
pub use auth::{
    ADMIN_ROLE, Claims, authentication_middleware, decode_jwt, encode_jwt, role_middleware,
};
pub use config::Config;
pub use error::AppError;
pub use logging::{AppLogger, TracingLogger};
pub use state::AppState;
