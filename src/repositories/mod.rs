//! Repositories module - one repository per entity
//!
//! Queries are plain runtime `sqlx::query*` calls bound with `?` placeholders,
//! so the crate builds without a live database.
//!
//!   Rows          Method                 Returns
//!   none          .execute(..)           QueryResult (rows affected, last rowid)
//!   zero or one   .fetch_optional(..)    Option<T>
//!   exactly one   .fetch_one(..)         T, RowNotFound otherwise
//!   many          .fetch_all(..)         Vec<T>
//!
//! Errors are propagated with `?` to the handlers, which turn them into status codes.

pub mod national_park;
pub mod traits;
pub mod trail;
pub mod user;

pub use traits::{Create, Delete, Read, Update};

pub use national_park::NationalParkRepository;
pub use trail::TrailRepository;
pub use user::UserRepository;

// pool type shared by every repository
pub type PoolType = sqlx::SqlitePool;

/// Uniqueness key for a name: surrounding whitespace removed, Unicode lowercased.
/// Stored next to the name and compared instead of it.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Converts the rowid of an insert into an entity id, failing instead of truncating
pub(crate) fn inserted_id(rowid: i64) -> Result<i32, sqlx::Error> {
    i32::try_from(rowid).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_key_folds_unicode_case() {
        assert_eq!(name_key("Écrins"), name_key("écrins"));
        assert_eq!(name_key("ÉCRINS"), "écrins");
    }

    #[test]
    fn name_key_trims_any_whitespace() {
        assert_eq!(name_key("Glacier\t"), "glacier");
        assert_eq!(name_key("\n alice\r\n"), "alice");
        assert_eq!(name_key("\u{a0}Zion\u{2003}"), "zion");
        assert_eq!(name_key("Half Dome"), "half dome");
    }

    #[test]
    fn inserted_id_rejects_rowids_beyond_i32() {
        assert_eq!(inserted_id(42).unwrap(), 42);
        let too_big = i64::from(i32::MAX) + 1;
        assert!(matches!(inserted_id(too_big), Err(sqlx::Error::Decode(_))));
    }
}
