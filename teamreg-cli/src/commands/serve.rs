//! HTTP server command
//!
//! Connects to the database, applies the schema and serves
//! `POST /api/submit-form` until Ctrl+C or SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use teamreg_server::db::{migrations, AnyPool};
use teamreg_server::Backend;
use teamreg_server::http::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3001)
    #[arg(long, short = 'b', env = "TEAMREG_BIND", default_value = "127.0.0.1:3001")]
    pub bind: SocketAddr,

    /// Port to listen on, overriding the port in --bind
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Allowed CORS origin; repeat or comma-separate (default: localhost:3000/3001)
    #[arg(long = "cors-origin", env = "TEAMREG_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    /// Don't create missing tables at startup
    #[arg(long)]
    pub skip_migrations: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        let mut config = ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
            ..ServerConfig::default()
        };
        if let Some(port) = self.port {
            config.bind_addr.set_port(port);
        }
        if !self.cors_origins.is_empty() {
            config.cors_origins = self.cors_origins.clone();
        }
        config
    }
}

/// Create missing tables; the pool is closed if that fails.
async fn apply_schema(pool: &AnyPool, backend: Backend) -> Result<()> {
    let result = migrations::run(pool, backend)
        .await
        .context("Failed to apply database schema");
    if result.is_err() {
        pool.close().await;
    }
    result
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.server_config();
    let (pool, backend) = args.database.connect().await?;

    if args.skip_migrations {
        tracing::info!("Skipping schema migrations");
    } else {
        apply_schema(&pool, backend).await?;
    }

    tracing::info!("Starting teamreg server on {}", config.bind_addr);

    // Run server (blocks until shutdown, closes the pool on the way out)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
