//! NationalParkRepository - store access for national parks

use super::{Create, Delete, PoolType, Read, Update, inserted_id, name_key};
use crate::dtos::UpsertNationalParkDTO;
use crate::entities::NationalPark;
use chrono::Utc;
use sqlx::Error;
use tracing::{debug, info, instrument};

pub struct NationalParkRepository {
    connection_pool: PoolType,
}

impl NationalParkRepository {
    pub fn new(connection_pool: PoolType) -> Self {
        Self { connection_pool }
    }

    /// All parks ordered by id
    #[instrument(skip(self))]
    pub async fn read_all(&self) -> Result<Vec<NationalPark>, Error> {
        debug!("Reading all national parks");
        let parks = sqlx::query_as::<_, NationalPark>(
            r#"
            SELECT id, name, state, created, established, picture
            FROM national_parks
            ORDER BY id
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} national parks", parks.len());
        Ok(parks)
    }

    /// Name lookup ignoring case and surrounding whitespace, see `name_key`
    #[instrument(skip(self))]
    pub async fn exists_by_name(&self, name: &str) -> Result<bool, Error> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM national_parks WHERE name_key = ?")
                .bind(name_key(name))
                .fetch_one(&self.connection_pool)
                .await?;

        Ok(count > 0)
    }

    #[instrument(skip(self))]
    pub async fn exists(&self, id: &i32) -> Result<bool, Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM national_parks WHERE id = ?")
            .bind(id)
            .fetch_one(&self.connection_pool)
            .await?;

        Ok(count > 0)
    }
}

impl Create<NationalPark, UpsertNationalParkDTO> for NationalParkRepository {
    #[instrument(skip(self, data), fields(name = %data.name))]
    async fn create(&self, data: &UpsertNationalParkDTO) -> Result<NationalPark, Error> {
        debug!("Creating new national park");
        let created = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO national_parks (name, name_key, state, created, established, picture)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.name)
        .bind(name_key(&data.name))
        .bind(&data.state)
        .bind(created)
        .bind(data.established)
        .bind(&data.picture)
        .execute(&self.connection_pool)
        .await?;

        let new_id = inserted_id(result.last_insert_rowid())?;
        info!("National park created with id {}", new_id);

        Ok(NationalPark {
            id: new_id,
            name: data.name.clone(),
            state: data.state.clone(),
            created,
            established: data.established,
            picture: data.picture.clone(),
        })
    }
}

impl Read<NationalPark, i32> for NationalParkRepository {
    #[instrument(skip(self), fields(national_park_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<NationalPark>, Error> {
        debug!("Reading national park by id");
        let park = sqlx::query_as::<_, NationalPark>(
            r#"
            SELECT id, name, state, created, established, picture
            FROM national_parks
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(park)
    }
}

impl Update<NationalPark, UpsertNationalParkDTO, i32> for NationalParkRepository {
    #[instrument(skip(self, data), fields(national_park_id = %id))]
    async fn update(&self, id: &i32, data: &UpsertNationalParkDTO) -> Result<NationalPark, Error> {
        debug!("Updating national park");
        sqlx::query(
            r#"
            UPDATE national_parks
            SET name = ?, name_key = ?, state = ?, established = ?, picture = ?
            WHERE id = ?
            "#,
        )
        .bind(&data.name)
        .bind(name_key(&data.name))
        .bind(&data.state)
        .bind(data.established)
        .bind(&data.picture)
        .bind(id)
        .execute(&self.connection_pool)
        .await?;

        info!("National park updated");
        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

impl Delete<i32> for NationalParkRepository {
    /// Trails of the park go with it (ON DELETE CASCADE)
    #[instrument(skip(self), fields(national_park_id = %id))]
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        debug!("Deleting national park");
        sqlx::query("DELETE FROM national_parks WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        info!("National park deleted");
        Ok(())
    }
}
