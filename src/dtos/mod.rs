//! DTOs module - Data Transfer Objects
//!
//! DTOs are the wire shapes, kept apart from the entities. Mapping is done by
//! the `From` impls next to each DTO.

pub mod national_park;
pub mod trail;
pub mod user;

// Re-exports
pub use national_park::{NationalParkDTO, UpsertNationalParkDTO};
pub use trail::{TrailDTO, UpsertTrailDTO};
pub use user::{AuthenticationDTO, CreateUserDTO, UserDTO};

use std::borrow::Cow;
use validator::ValidationError;

/// Rejects names made only of whitespace. Names are unique once trimmed, so a
/// blank one would collapse to an empty key.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::from("Must contain something other than whitespace"));
        return Err(error);
    }
    Ok(())
}
