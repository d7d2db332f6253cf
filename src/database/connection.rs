use crate::{config::DatabaseConfig, error::Result};
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Opens the pool and brings the `products` table up to date.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        "Connecting to product database"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(config.connect_options())
        .await?;

    let migrator = sqlx::migrate!();
    migrator.run(&pool).await?;

    tracing::info!(
        migrations = migrator.iter().count(),
        pool_size = config.max_connections,
        "Product table ready"
    );

    Ok(pool)
}

pub async fn check_health(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
