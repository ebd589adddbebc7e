//! Schema command

use anyhow::{Context, Result};
use clap::Parser;
use teamreg_server::db::migrations;

use super::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Create the `teams` and `team_members` tables if they are missing
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let (pool, backend) = args.database.connect().await?;

    let result = migrations::run(&pool, backend)
        .await
        .context("Failed to apply database schema");
    pool.close().await;
    result?;

    println!("Schema is up to date ({})", backend.as_str());
    Ok(())
}
