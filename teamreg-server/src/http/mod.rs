//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost origins by default)
//! - Request tracing
//! - Panic capture into the JSON error shape
//! - Graceful shutdown, then the pool is closed

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use error::ApiError;
