use anyhow::Result;
use sqlx::{Pool, Sqlite, migrate::MigrateDatabase, sqlite::SqlitePoolOptions};
use std::time::Duration;

pub mod location_store;
pub mod movement_store;
pub mod product_store;
pub mod report_store;
pub mod tables;

pub use location_store::LocationStore;
pub use movement_store::MovementStore;
pub use product_store::ProductStore;
pub use report_store::ReportStore;

use tables::{LocationTable, MovementTable, ProductTable};

pub type DbPool = Pool<Sqlite>;

/// Initialize the database connection pool
pub async fn init_db_pool(database_url: &str, max_connections: u32) -> Result<DbPool> {
    // Create the database if it doesn't exist
    if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
        tracing::info!("Creating database {}", database_url);
        Sqlite::create_database(database_url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await?;

    setup_database(&pool).await?;

    Ok(pool)
}

/// Set up the database schema
async fn setup_database(pool: &DbPool) -> Result<()> {
    for statement in [
        ProductTable::create_table(),
        LocationTable::create_table(),
        MovementTable::create_table(),
    ] {
        sqlx::query(&statement).execute(pool).await?;
    }

    Ok(())
}

/// Verify that a connection can be acquired and used
pub async fn health_check(pool: &DbPool) -> Result<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
