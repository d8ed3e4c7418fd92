//! Entities module - domain entities
//!
//! Every entity maps to one table of the store.

pub mod enums;
pub mod national_park;
pub mod trail;
pub mod user;

// Re-exports
pub use enums::Difficulty;
pub use national_park::NationalPark;
pub use trail::Trail;
pub use user::User;
