use crate::core::{AppError, AppState};
use crate::repositories::Read;
use axum::extract::State;
use axum::{Error, body::Body, extract::Request, http, http::HeaderMap, http::Response, middleware::Next};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Tokens stay valid for a week after issuance
pub const TOKEN_LIFETIME_DAYS: i64 = 7;

/// Role given to every registered user and required by admin-only routes
pub const ADMIN_ROLE: &str = "Admin";

// jwt payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user id
    pub role: String,
    pub iat: usize, // Issued at time of the token
    pub exp: usize, // Expiry time of the token
}

impl Claims {
    /// The subject parsed back into a user id
    pub fn user_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }
}

/// Signs an HS256 token carrying the user id as subject and the role claim
#[instrument(skip(secret), fields(user_id = %user_id, role = %role))]
pub fn encode_jwt(user_id: i32, role: &str, secret: &str) -> Result<String, Error> {
    debug!("Encoding JWT token for user");
    let now = Utc::now();
    let expire = Duration::days(TOKEN_LIFETIME_DAYS);
    let claim = Claims {
        sub: user_id.to_string(),
        role: role.to_string(),
        iat: now.timestamp() as usize,
        exp: (now + expire).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claim,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map(|token| {
        info!("JWT token encoded successfully");
        token
    })
    .map_err(|e| {
        error!("Failed to encode JWT token: {:?}", e);
        Error::new("Error in encoding jwt token")
    })
}

#[instrument(skip(jwt_token, secret))]
pub fn decode_jwt(jwt_token: &str, secret: &str) -> Result<TokenData<Claims>, Error> {
    debug!("Decoding JWT token");
    decode(
        jwt_token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data: TokenData<Claims>| {
        debug!("JWT token decoded successfully for subject: {}", data.claims.sub);
        data
    })
    .map_err(|e| {
        warn!("Failed to decode JWT token: {:?}", e);
        Error::new("Error in decoding jwt token")
    })
}

/// Extracts the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(http::header::AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Some(token),
        _ => None,
    }
}

/// Middleware that validates the bearer token and loads the caller.
/// On success both the `User` and its `Claims` are put in the request extensions.
#[instrument(skip(state, req, next))]
pub async fn authentication_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running authentication middleware");
    let token = bearer_token(req.headers()).ok_or_else(|| {
        warn!("Missing or malformed authorization header");
        AppError::unauthorized("Please add the JWT token to the header")
    })?;

    let claims = decode_jwt(token, &state.jwt_secret)
        .map_err(|_| AppError::unauthorized("Unable to decode token"))?
        .claims;

    let user_id = claims.user_id().ok_or_else(|| {
        warn!("Token subject is not a user id: {}", claims.sub);
        AppError::unauthorized("Unable to decode token")
    })?;

    let current_user = match state.user.read(&user_id).await? {
        Some(user) => {
            info!("User authenticated: {}", user.username);
            user
        }
        None => {
            warn!("User not found in database: {}", user_id);
            return Err(AppError::unauthorized("You are not an authorized user"));
        }
    };

    req.extensions_mut().insert(current_user);
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Middleware that lets the request through only when the token carries the
/// role given as state, e.g. `from_fn_with_state(ADMIN_ROLE, role_middleware)`.
/// Must run after `authentication_middleware`.
#[instrument(skip(req, next))]
pub async fn role_middleware(
    State(required_role): State<&'static str>,
    req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running role middleware");
    let claims = req.extensions().get::<Claims>().ok_or_else(|| {
        warn!("Claims not found in request extensions");
        AppError::unauthorized("User not authenticated")
    })?;

    require_role(claims, &[required_role])?;

    Ok(next.run(req).await)
}

/// Checks that the token role is one of `allowed_roles`
///
/// # Returns
/// * `Ok(())` if the role is allowed
/// * `Err(AppError)` with 403 otherwise
pub fn require_role(claims: &Claims, allowed_roles: &[&str]) -> Result<(), AppError> {
    if !allowed_roles.contains(&claims.role.as_str()) {
        warn!(
            "Subject {} has insufficient role {}, required one of: {:?}",
            claims.sub, claims.role, allowed_roles
        );
        return Err(AppError::forbidden("Insufficient role").with_details(format!(
            "This action requires one of the following roles: {:?}",
            allowed_roles
        )));
    }

    debug!("Role check passed for subject {} with role {}", claims.sub, claims.role);
    Ok(())
}
