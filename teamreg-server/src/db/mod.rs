//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - One bounded pool per process, created at startup and closed at shutdown
//! - Transactions for multi-step operations
//! - Rely on DB constraints; a violated constraint aborts the whole write

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options, ping};
pub use sqlx::AnyPool;
pub use repos::*;
