//! Database connection pool management
//!
//! Uses sqlx's `Any` driver so the same pool type serves PostgreSQL in
//! production and SQLite for local runs and tests. The pool is created once
//! at startup, handed to request handlers by reference, and closed at
//! shutdown.

use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;

use crate::config::{DatabaseConfig, PoolConfig};

/// Create the connection pool described by `config`.
///
/// # Errors
///
/// Returns an error if the first connection cannot be established.
///
/// # Example
///
/// ```ignore
/// let config = DatabaseConfig::from_env()?;
/// let pool = create_pool(&config).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> Result<AnyPool, sqlx::Error> {
    create_pool_with_options(&config.url, config.pool).await
}

/// Create a connection pool for `database_url` with explicit pool settings.
pub async fn create_pool_with_options(
    database_url: &str,
    pool: PoolConfig,
) -> Result<AnyPool, sqlx::Error> {
    sqlx::any::install_default_drivers();

    let created = AnyPoolOptions::new()
        .max_connections(pool.max_connections)
        .acquire_timeout(pool.acquire_timeout)
        .connect(database_url)
        .await?;

    tracing::info!(
        max_connections = pool.max_connections,
        acquire_timeout_ms = pool.acquire_timeout.as_millis() as u64,
        "Database pool created"
    );
    Ok(created)
}

/// Round-trip a trivial query to prove the pool can hand out a connection.
pub async fn ping(pool: &AnyPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
