//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the shared pool; one connection per operation
//! - Uses transactions for multi-step operations
//! - Surfaces the underlying driver error, never masks a failed write

pub mod teams;

pub use teams::{DbError, TeamRepo};
