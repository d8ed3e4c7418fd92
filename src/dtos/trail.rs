//! Trail DTOs

use crate::dtos::NationalParkDTO;
use crate::entities::{Difficulty, Trail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Trail as exposed to the client, with its park when it was loaded
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrailDTO {
    pub id: i32,
    pub name: String,
    pub distance: f64,
    pub elevation: f64,
    pub difficulty: Difficulty,
    pub national_park_id: i32,
    pub created: DateTime<Utc>,
    pub national_park: Option<NationalParkDTO>,
}

impl From<Trail> for TrailDTO {
    fn from(value: Trail) -> Self {
        Self {
            id: value.id,
            name: value.name,
            distance: value.distance,
            elevation: value.elevation,
            difficulty: value.difficulty,
            national_park_id: value.national_park_id,
            created: value.created,
            national_park: value.national_park.map(NationalParkDTO::from),
        }
    }
}

/// Body of create and update requests (no id, no embedded park)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertTrailDTO {
    #[validate(
        length(min = 1, max = 200, message = "Name must be between 1 and 200 characters"),
        custom(function = "crate::dtos::not_blank")
    )]
    pub name: String,

    #[validate(range(min = 0.0, message = "Distance cannot be negative"))]
    pub distance: f64,

    pub elevation: f64,

    pub difficulty: Difficulty,

    pub national_park_id: i32,
}
