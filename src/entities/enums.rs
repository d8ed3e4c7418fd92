//! Enumerations used by the entities

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    Moderate,
    Difficult,
    Experienced,
}
