//! Schema for the `teams` and `team_members` tables
//!
//! Statements are idempotent (`IF NOT EXISTS`) and run one at a time, so
//! calling `run` on every startup is safe.

use sqlx::AnyPool;

use crate::config::Backend;

const POSTGRES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS teams (
        id BIGSERIAL PRIMARY KEY,
        startup_name TEXT NOT NULL,
        country TEXT NOT NULL,
        city TEXT NOT NULL,
        university TEXT NOT NULL,
        sdg TEXT NOT NULL,
        hp_history TEXT NOT NULL DEFAULT '[]',
        lead_source TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS team_members (
        id BIGSERIAL PRIMARY KEY,
        team_id BIGINT NOT NULL REFERENCES teams(id) ON DELETE CASCADE,
        member_type TEXT NOT NULL,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT NOT NULL,
        country TEXT NOT NULL,
        city TEXT NOT NULL,
        university TEXT NOT NULL,
        is_different_university BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        UNIQUE (team_id, member_type)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_team_members_team_id ON team_members(team_id)",
];

const SQLITE: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS teams (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        startup_name TEXT NOT NULL,
        country TEXT NOT NULL,
        city TEXT NOT NULL,
        university TEXT NOT NULL,
        sdg TEXT NOT NULL,
        hp_history TEXT NOT NULL DEFAULT '[]',
        lead_source TEXT NOT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS team_members (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        team_id INTEGER NOT NULL REFERENCES teams(id) ON DELETE CASCADE,
        member_type TEXT NOT NULL,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT NOT NULL,
        country TEXT NOT NULL,
        city TEXT NOT NULL,
        university TEXT NOT NULL,
        is_different_university BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
        UNIQUE (team_id, member_type)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_team_members_team_id ON team_members(team_id)",
];

/// Create the registration tables if they don't exist yet.
pub async fn run(pool: &AnyPool, backend: Backend) -> Result<(), sqlx::Error> {
    tracing::info!(backend = backend.as_str(), "Running registration migrations...");

    let statements = match backend {
        Backend::Postgres => POSTGRES,
        Backend::Sqlite => SQLITE,
    };

    for statement in statements {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Migrations complete");
    Ok(())
}
