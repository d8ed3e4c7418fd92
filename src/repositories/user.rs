//! UserRepository - store access for users

use super::{Create, PoolType, Read, inserted_id, name_key};
use crate::dtos::CreateUserDTO;
use crate::entities::User;
use sqlx::Error;
use tracing::{debug, info, instrument};

pub struct UserRepository {
    connection_pool: PoolType,
}

impl UserRepository {
    pub fn new(connection_pool: PoolType) -> UserRepository {
        Self { connection_pool }
    }

    /// Exact, case sensitive username match (used for authentication)
    #[instrument(skip(self))]
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, Error> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password, role FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(user)
    }

    /// True when no user has this name, ignoring case and surrounding whitespace
    #[instrument(skip(self))]
    pub async fn is_unique_username(&self, username: &str) -> Result<bool, Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username_key = ?")
            .bind(name_key(username))
            .fetch_one(&self.connection_pool)
            .await?;

        Ok(count == 0)
    }
}

impl Create<User, CreateUserDTO> for UserRepository {
    #[instrument(skip(self, data), fields(username = %data.username))]
    async fn create(&self, data: &CreateUserDTO) -> Result<User, Error> {
        debug!("Creating new user");
        let result = sqlx::query(
            "INSERT INTO users (username, username_key, password, role) VALUES (?, ?, ?, ?)",
        )
        .bind(&data.username)
        .bind(name_key(&data.username))
        .bind(&data.password)
        .bind(&data.role)
        .execute(&self.connection_pool)
        .await?;

        let new_id = inserted_id(result.last_insert_rowid())?;
        info!("User created with id {}", new_id);

        Ok(User {
            id: new_id,
            username: data.username.clone(),
            password: data.password.clone(),
            role: data.role.clone(),
        })
    }
}

impl Read<User, i32> for UserRepository {
    #[instrument(skip(self), fields(user_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<User>, Error> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password, role FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(user)
    }
}
