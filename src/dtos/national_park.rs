//! National park DTOs

use crate::entities::NationalPark;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Park as exposed to the client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NationalParkDTO {
    pub id: i32,
    pub name: String,
    pub state: String,
    pub created: DateTime<Utc>,
    pub established: NaiveDate,
    pub picture: Option<String>,
}

impl From<NationalPark> for NationalParkDTO {
    fn from(value: NationalPark) -> Self {
        Self {
            id: value.id,
            name: value.name,
            state: value.state,
            created: value.created,
            established: value.established,
            picture: value.picture,
        }
    }
}

/// Body of create and update requests. The id and creation time are owned by
/// the server, an `id` sent by the client is ignored.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertNationalParkDTO {
    #[validate(
        length(min = 1, max = 200, message = "Name must be between 1 and 200 characters"),
        custom(function = "crate::dtos::not_blank")
    )]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "State must be between 1 and 100 characters"))]
    pub state: String,

    pub established: NaiveDate,

    #[serde(default)]
    pub picture: Option<String>,
}
