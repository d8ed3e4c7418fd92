//! Services module - HTTP handlers
//!
//! One sub-module per resource.

pub mod national_park;
pub mod trail;
pub mod user;

// Re-exports
pub use national_park::{
    create_national_park, delete_national_park, first_national_park, get_national_park,
    list_national_parks, update_national_park,
};
pub use trail::{
    create_trail, delete_trail, get_trail, list_trails, list_trails_in_national_park,
    update_trail,
};
pub use user::{authenticate, authenticate_user, current_user, register, register_user};

use crate::AppState;
use crate::core::AppError;
use axum::{
    extract::{Json, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}

/// Unwraps a JSON body, turning a missing, `null` or malformed body into 400
pub(crate) fn require_body<T>(
    payload: Result<Json<Option<T>>, JsonRejection>,
) -> Result<T, AppError> {
    match payload? {
        Json(Some(body)) => Ok(body),
        Json(None) => Err(AppError::bad_request("Request body is required")),
    }
}
