//! HTTP layer
//!
//! Axum server with:
//! - The `/api/v1` trivia routes
//! - Permissive CORS plus the legacy allow-headers/methods on every response
//! - Request tracing
//! - Graceful shutdown
//! - JSON error envelopes

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
