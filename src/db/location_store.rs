use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::{Location, NewLocation},
};

/// Location store for database operations
#[derive(Clone)]
pub struct LocationStore {
    pool: DbPool,
}

impl LocationStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list_locations(&self) -> Result<Vec<Location>> {
        let locations = sqlx::query_as::<_, Location>("SELECT location_id, name FROM location")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(locations)
    }

    /// Insert a location. Fails if `location_id` is already taken.
    pub async fn create_location(&self, location: &NewLocation) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO location (location_id, name) VALUES (?, ?)")
            .bind(&location.location_id)
            .bind(&location.name)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await?;

        tracing::info!(location_id = %location.location_id, "Location created");
        Ok(())
    }
}
