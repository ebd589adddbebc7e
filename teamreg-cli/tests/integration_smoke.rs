//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

const DB_VARS: &[&str] = &[
    "DATABASE_URL",
    "DB_HOST",
    "DB_PORT",
    "DB_USER",
    "DB_PASSWORD",
    "DB_DATABASE",
    "DB_MAX_CONNECTIONS",
    "DB_ACQUIRE_TIMEOUT_SECS",
];

/// `teamreg` running in an empty directory with no database settings inherited.
fn teamreg(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("teamreg").unwrap();
    cmd.current_dir(dir.path());
    for var in DB_VARS {
        cmd.env_remove(var);
    }
    cmd
}

// === Help Tests ===

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("teamreg").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("teamreg").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--cors-permissive"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_migrate_help() {
    let mut cmd = Command::cargo_bin("teamreg").unwrap();
    cmd.arg("migrate").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Maximum number of pooled connections"));
}

// === Migrate Tests ===

#[test]
fn test_migrate_creates_sqlite_schema() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("teams.db").display());

    for _ in 0..2 {
        teamreg(&dir)
            .arg("migrate")
            .arg("--database-url")
            .arg(&url)
            .assert()
            .success()
            .stdout(predicate::str::contains("Schema is up to date (sqlite)"));
    }

    assert!(dir.path().join("teams.db").exists());
}

#[test]
fn test_migrate_rejects_unknown_scheme() {
    let dir = tempfile::tempdir().unwrap();

    teamreg(&dir)
        .arg("migrate")
        .arg("--database-url")
        .arg("mysql://localhost/registrations")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported database URL scheme"));
}

#[test]
fn test_migrate_requires_database_settings() {
    let dir = tempfile::tempdir().unwrap();

    teamreg(&dir)
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_serve_rejects_zero_connections() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("teams.db").display());

    teamreg(&dir)
        .args(["serve", "--database-url", &url, "--max-connections", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--max-connections must be at least 1"));
}
