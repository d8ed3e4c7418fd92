//! Trail entity

use super::{Difficulty, NationalPark};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Trail {
    pub id: i32,
    pub name: String,
    pub distance: f64,
    pub elevation: f64,
    pub difficulty: Difficulty,
    pub national_park_id: i32,
    pub created: DateTime<Utc>,
    /// Owning park, filled when the trail is loaded together with its park
    pub national_park: Option<NationalPark>,
}
