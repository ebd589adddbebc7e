//! Command implementations for the teamreg CLI

pub mod migrate;
pub mod serve;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use teamreg_server::db::{create_pool, ping, AnyPool};
use teamreg_server::{Backend, DatabaseConfig};

pub use migrate::{run_migrate, MigrateArgs};
pub use serve::{run_serve, ServeArgs};

/// Database connection options shared by every command
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// Database URL, postgres://... or sqlite:... (falls back to DB_HOST/DB_USER/DB_DATABASE)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of pooled connections
    #[arg(long, env = "DB_MAX_CONNECTIONS")]
    pub max_connections: Option<u32>,

    /// Seconds a request waits for a free connection before failing
    #[arg(long, env = "DB_ACQUIRE_TIMEOUT_SECS")]
    pub acquire_timeout_secs: Option<u64>,
}

impl DatabaseArgs {
    /// Resolve flags and environment into a database configuration.
    pub fn resolve(&self) -> Result<DatabaseConfig> {
        let config = match &self.database_url {
            Some(url) => DatabaseConfig::new(url.clone()),
            None => DatabaseConfig::from_env(),
        }
        .context("Invalid database configuration")?;

        let mut pool = config.pool;
        if let Some(n) = self.max_connections {
            anyhow::ensure!(n > 0, "--max-connections must be at least 1");
            pool.max_connections = n;
        }
        if let Some(secs) = self.acquire_timeout_secs {
            pool.acquire_timeout = Duration::from_secs(secs);
        }

        Ok(config.with_pool(pool))
    }

    /// Create the pool and check that the database answers.
    pub async fn connect(&self) -> Result<(AnyPool, Backend)> {
        let config = self.resolve()?;
        tracing::info!(
            url = %config.redacted_url(),
            backend = config.backend.as_str(),
            max_connections = config.pool.max_connections,
            "Connecting to database"
        );

        let pool = create_pool(&config)
            .await
            .context("Failed to create database pool")?;
        ping(&pool)
            .await
            .context("Database is not reachable")?;
        tracing::info!("Connected to database");

        Ok((pool, config.backend))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_pool_settings() {
        let args = DatabaseArgs {
            database_url: Some("sqlite://teams.db".into()),
            max_connections: Some(3),
            acquire_timeout_secs: Some(5),
        };

        let config = args.resolve().unwrap();

        assert_eq!(config.backend, Backend::Sqlite);
        assert_eq!(config.pool.max_connections, 3);
        assert_eq!(config.pool.acquire_timeout, Duration::from_secs(5));
    }

    #[test]
    fn zero_connections_is_rejected() {
        let args = DatabaseArgs {
            database_url: Some("sqlite://teams.db".into()),
            max_connections: Some(0),
            acquire_timeout_secs: None,
        };

        assert!(args.resolve().is_err());
    }
}
