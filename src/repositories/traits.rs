//! Common repository traits
//!
//! Generic interfaces for store operations. Every write is committed by the
//! statement itself: a call that returns `Ok` has been persisted, whatever the
//! number of affected rows.

/// Trait for inserting new entities
///
/// # Type Parameters
/// * `Entity` - Type of the returned entity (with the id assigned by the store)
/// * `CreateDTO` - DTO for creation (no id, it is generated)
pub trait Create<Entity, CreateDTO> {
    /// Inserts a new entity
    ///
    /// # Returns
    /// * `Ok(Entity)` - Created entity with its generated id
    /// * `Err(sqlx::Error)` - The insert failed
    async fn create(&self, data: &CreateDTO) -> Result<Entity, sqlx::Error>;
}

/// Trait for reading a single entity by primary key
pub trait Read<Entity, Id> {
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity found
    /// * `Ok(None)` - No entity with that id
    /// * `Err(sqlx::Error)` - Error during reading
    async fn read(&self, id: &Id) -> Result<Option<Entity>, sqlx::Error>;
}

/// Trait for replacing an existing entity
///
/// # Type Parameters
/// * `Entity` - Type of the updated entity
/// * `UpdateDTO` - DTO carrying every mutable field
/// * `Id` - Type of the primary key
pub trait Update<Entity, UpdateDTO, Id> {
    /// Overwrites every mutable field of the entity with `data`
    ///
    /// # Returns
    /// * `Ok(Entity)` - Updated entity
    /// * `Err(sqlx::Error)` - Error during update (`RowNotFound` if the id does not exist)
    async fn update(&self, id: &Id, data: &UpdateDTO) -> Result<Entity, sqlx::Error>;
}

/// Trait for deleting entities
pub trait Delete<Id> {
    /// Deleting an id that does not exist is not an error
    async fn delete(&self, id: &Id) -> Result<(), sqlx::Error>;
}
