//! User DTOs

use crate::entities::User;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// User as returned to the client. The password is always blank and the token
/// is only set by a successful authentication.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDTO {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub role: String,
    pub token: Option<String>,
}

impl From<User> for UserDTO {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            username: value.username,
            password: String::new(), // never sent back
            role: value.role,
            token: None,
        }
    }
}

impl UserDTO {
    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }
}

/// Credentials for authenticate and register
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct AuthenticationDTO {
    #[validate(
        length(min = 1, message = "Username is required"),
        custom(function = "crate::dtos::not_blank")
    )]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// DTO for inserting a user (password already hashed)
#[derive(Debug, Clone)]
pub struct CreateUserDTO {
    pub username: String,
    pub password: String,
    pub role: String,
}
