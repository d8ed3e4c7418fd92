//! TrailRepository - store access for trails
//!
//! Reads always join the owning national park so handlers can return it
//! embedded in the trail.

use super::{Create, Delete, PoolType, Read, Update, inserted_id, name_key};
use crate::dtos::UpsertTrailDTO;
use crate::entities::{NationalPark, Trail};
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Error, FromRow, Row};
use tracing::{debug, info, instrument};

const SELECT_TRAIL_WITH_PARK: &str = r#"
    SELECT
        t.id,
        t.name,
        t.distance,
        t.elevation,
        t.difficulty,
        t.national_park_id,
        t.created,
        np.id AS park_id,
        np.name AS park_name,
        np.state AS park_state,
        np.created AS park_created,
        np.established AS park_established,
        np.picture AS park_picture
    FROM trails t
    INNER JOIN national_parks np ON np.id = t.national_park_id
"#;

impl<'r> FromRow<'r, SqliteRow> for Trail {
    fn from_row(row: &'r SqliteRow) -> Result<Self, Error> {
        let national_park = NationalPark {
            id: row.try_get("park_id")?,
            name: row.try_get("park_name")?,
            state: row.try_get("park_state")?,
            created: row.try_get("park_created")?,
            established: row.try_get("park_established")?,
            picture: row.try_get("park_picture")?,
        };

        Ok(Trail {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            distance: row.try_get("distance")?,
            elevation: row.try_get("elevation")?,
            difficulty: row.try_get("difficulty")?,
            national_park_id: row.try_get("national_park_id")?,
            created: row.try_get("created")?,
            national_park: Some(national_park),
        })
    }
}

pub struct TrailRepository {
    connection_pool: PoolType,
}

impl TrailRepository {
    pub fn new(connection_pool: PoolType) -> Self {
        Self { connection_pool }
    }

    /// All trails with their park, ordered by id
    #[instrument(skip(self))]
    pub async fn read_all(&self) -> Result<Vec<Trail>, Error> {
        debug!("Reading all trails");
        let trails = sqlx::query_as::<_, Trail>(&format!("{SELECT_TRAIL_WITH_PARK} ORDER BY t.id"))
            .fetch_all(&self.connection_pool)
            .await?;

        debug!("Found {} trails", trails.len());
        Ok(trails)
    }

    /// Trails belonging to one park, ordered by id
    #[instrument(skip(self), fields(national_park_id = %national_park_id))]
    pub async fn read_in_national_park(&self, national_park_id: &i32) -> Result<Vec<Trail>, Error> {
        debug!("Reading trails of national park");
        let trails = sqlx::query_as::<_, Trail>(&format!(
            "{SELECT_TRAIL_WITH_PARK} WHERE t.national_park_id = ? ORDER BY t.id"
        ))
        .bind(national_park_id)
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} trails in national park", trails.len());
        Ok(trails)
    }

    /// Name lookup ignoring case and surrounding whitespace, see `name_key`
    #[instrument(skip(self))]
    pub async fn exists_by_name(&self, name: &str) -> Result<bool, Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM trails WHERE name_key = ?")
            .bind(name_key(name))
            .fetch_one(&self.connection_pool)
            .await?;

        Ok(count > 0)
    }

    #[instrument(skip(self))]
    pub async fn exists(&self, id: &i32) -> Result<bool, Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM trails WHERE id = ?")
            .bind(id)
            .fetch_one(&self.connection_pool)
            .await?;

        Ok(count > 0)
    }
}

impl Create<Trail, UpsertTrailDTO> for TrailRepository {
    #[instrument(skip(self, data), fields(name = %data.name, national_park_id = %data.national_park_id))]
    async fn create(&self, data: &UpsertTrailDTO) -> Result<Trail, Error> {
        debug!("Creating new trail");
        let result = sqlx::query(
            r#"
            INSERT INTO trails (name, name_key, distance, elevation, difficulty, national_park_id, created)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.name)
        .bind(name_key(&data.name))
        .bind(data.distance)
        .bind(data.elevation)
        .bind(data.difficulty)
        .bind(data.national_park_id)
        .bind(Utc::now())
        .execute(&self.connection_pool)
        .await?;

        let new_id = inserted_id(result.last_insert_rowid())?;
        info!("Trail created with id {}", new_id);

        // read back to pick up the park
        self.read(&new_id).await?.ok_or(Error::RowNotFound)
    }
}

impl Read<Trail, i32> for TrailRepository {
    #[instrument(skip(self), fields(trail_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Trail>, Error> {
        debug!("Reading trail by id");
        let trail = sqlx::query_as::<_, Trail>(&format!("{SELECT_TRAIL_WITH_PARK} WHERE t.id = ?"))
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await?;

        Ok(trail)
    }
}

impl Update<Trail, UpsertTrailDTO, i32> for TrailRepository {
    #[instrument(skip(self, data), fields(trail_id = %id))]
    async fn update(&self, id: &i32, data: &UpsertTrailDTO) -> Result<Trail, Error> {
        debug!("Updating trail");
        sqlx::query(
            r#"
            UPDATE trails
            SET name = ?, name_key = ?, distance = ?, elevation = ?, difficulty = ?,
                national_park_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&data.name)
        .bind(name_key(&data.name))
        .bind(data.distance)
        .bind(data.elevation)
        .bind(data.difficulty)
        .bind(data.national_park_id)
        .bind(id)
        .execute(&self.connection_pool)
        .await?;

        info!("Trail updated");
        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

impl Delete<i32> for TrailRepository {
    #[instrument(skip(self), fields(trail_id = %id))]
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        debug!("Deleting trail");
        sqlx::query("DELETE FROM trails WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        info!("Trail deleted");
        Ok(())
    }
}
