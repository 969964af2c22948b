use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::{NewProduct, Product},
};

/// Product store for database operations
#[derive(Clone)]
pub struct ProductStore {
    pool: DbPool,
}

impl ProductStore {
    /// Create a new ProductStore with the provided database pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a list of all products, in storage order
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        let products =
            sqlx::query_as::<_, Product>("SELECT product_id, name, description FROM product")
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::Database)?;

        Ok(products)
    }

    /// Insert a product. Fails if `product_id` is already taken.
    pub async fn create_product(&self, product: &NewProduct) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO product (product_id, name, description) VALUES (?, ?, ?)")
            .bind(&product.product_id)
            .bind(&product.name)
            .bind(&product.description)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await?;

        tracing::info!(product_id = %product.product_id, "Product created");
        Ok(())
    }
}
