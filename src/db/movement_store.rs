use chrono::Utc;

use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::{Location, Movement, MovementFormData, NewMovement, ProductOption},
};

/// Store for the append-only movement ledger
#[derive(Clone)]
pub struct MovementStore {
    pool: DbPool,
}

impl MovementStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// List movements joined with their product.
    ///
    /// Movements whose product does not exist are left out by the inner join.
    pub async fn list_movements(&self) -> Result<Vec<Movement>> {
        let movements = sqlx::query_as::<_, Movement>(
            r#"
            SELECT pm.movement_id, pm.timestamp, pm.product_id, p.name AS product_name,
                   pm.from_location, fl.name AS from_location_name,
                   pm.to_location, tl.name AS to_location_name,
                   pm.qty
            FROM product_movement pm
            JOIN product p ON pm.product_id = p.product_id
            LEFT JOIN location fl ON pm.from_location = fl.location_id
            LEFT JOIN location tl ON pm.to_location = tl.location_id
            ORDER BY pm.timestamp, pm.movement_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(movements)
    }

    /// Product and location choices for the movement form, read over one connection
    pub async fn movement_form_data(&self) -> Result<MovementFormData> {
        let mut conn = self.pool.acquire().await?;

        let products = sqlx::query_as::<_, ProductOption>("SELECT product_id, name FROM product")
            .fetch_all(&mut *conn)
            .await?;
        let locations = sqlx::query_as::<_, Location>("SELECT location_id, name FROM location")
            .fetch_all(&mut *conn)
            .await?;

        Ok(MovementFormData {
            products,
            locations,
        })
    }

    /// Record a movement and return its generated id.
    ///
    /// The timestamp is taken right before the insert. Product and location ids
    /// are stored as given, without checking that they exist.
    pub async fn create_movement(&self, movement: &NewMovement) -> Result<i64> {
        let mut tx = self.pool.begin().await?;

        let timestamp = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO product_movement (product_id, from_location, to_location, qty, timestamp)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&movement.product_id)
        .bind(movement.from_location())
        .bind(movement.to_location())
        .bind(movement.qty)
        .bind(timestamp)
        .execute(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        tx.commit().await?;

        let movement_id = result.last_insert_rowid();
        tracing::info!(
            movement_id,
            product_id = %movement.product_id,
            from_location = ?movement.from_location(),
            to_location = ?movement.to_location(),
            qty = movement.qty,
            "Movement recorded"
        );
        Ok(movement_id)
    }
}
