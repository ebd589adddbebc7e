//! teamreg-server: competition registration service
//!
//! Accepts a team registration (startup metadata plus up to four members)
//! over HTTP and stores it in the `teams` and `team_members` tables in one
//! transaction: either every row is written or none is.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{Backend, ConfigError, DatabaseConfig, PoolConfig};
pub use http::{build_router, run_server, AppState, ServerConfig};
