//! User services - authentication and registration

use super::require_body;
use crate::core::{ADMIN_ROLE, AppError, AppState, encode_jwt};
use crate::dtos::{AuthenticationDTO, CreateUserDTO, UserDTO};
use crate::entities::User;
use crate::repositories::Create;
use axum::{
    Extension,
    extract::{Json, State, rejection::JsonRejection},
};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

/// Checks the credentials and issues a token.
///
/// The username must match exactly. Returns `Ok(None)` when the user does not
/// exist or the password is wrong, without telling the two apart.
#[instrument(skip(state, password))]
pub async fn authenticate(
    state: &AppState,
    username: &str,
    password: &str,
) -> Result<Option<UserDTO>, AppError> {
    let Some(user) = state.user.find_by_username(username).await? else {
        return Ok(None);
    };

    if !user.verify_password(password) {
        return Ok(None);
    }

    let token = encode_jwt(user.id, &user.role, &state.jwt_secret)?;
    Ok(Some(UserDTO::from(user).with_token(token)))
}

/// Creates an `Admin` user. The returned user has no token, the caller has to
/// authenticate to get one.
#[instrument(skip(state, password))]
pub async fn register(
    state: &AppState,
    username: &str,
    password: &str,
) -> Result<UserDTO, AppError> {
    if !state.user.is_unique_username(username).await? {
        state.log.warning("Username already exist");
        return Err(AppError::bad_request("Username already exist"));
    }

    let password_hash = User::hash_password(password, state.bcrypt_cost).map_err(|e| {
        state.log.error_with(&e, "Failed to hash password");
        AppError::internal_server_error("Error while registering the user")
    })?;

    let new_user = CreateUserDTO {
        username: username.to_string(),
        password: password_hash,
        role: ADMIN_ROLE.to_string(),
    };

    let created_user = state.user.create(&new_user).await.map_err(|e| {
        state.log.error_with(&e, "Failed to save user");
        AppError::internal_server_error("Error while registering the user")
    })?;

    state.log.information("User registered");
    Ok(UserDTO::from(created_user))
}

pub async fn authenticate_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Option<AuthenticationDTO>>, JsonRejection>,
) -> Result<Json<UserDTO>, AppError> {
    let body = require_body(payload)?;
    body.validate()?;

    state.log.debug("Enter Authentication");
    match authenticate(&state, &body.username, &body.password).await? {
        Some(user) => {
            state.log.debug("Exit Authentication");
            Ok(Json(user))
        }
        None => {
            state.log.debug("Username or Password is incorrect.");
            Err(AppError::bad_request("Username or Password is incorrect."))
        }
    }
}

pub async fn register_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Option<AuthenticationDTO>>, JsonRejection>,
) -> Result<Json<UserDTO>, AppError> {
    let body = require_body(payload)?;
    body.validate()?;

    let user = register(&state, &body.username, &body.password).await?;
    Ok(Json(user))
}

/// The caller, as loaded by the authentication middleware
pub async fn current_user(Extension(current_user): Extension<User>) -> Json<UserDTO> {
    Json(UserDTO::from(current_user))
}
