//! NationalPark entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct NationalPark {
    pub id: i32,
    pub name: String,
    pub state: String,
    pub created: DateTime<Utc>,
    pub established: NaiveDate,
    /// Image reference (path or URL), not the image itself
    pub picture: Option<String>,
}
