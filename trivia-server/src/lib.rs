//! trivia-server: HTTP API for a trivia question bank
//!
//! Lists categories, pages through questions, searches them by substring,
//! creates and deletes them, and serves quiz questions that skip the ones
//! already asked.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod service;
pub mod store;

pub use config::{ApiConfig, ConfigError, DatabaseConfig, TriviaConfig};
pub use http::{build_router, run_server, ServerConfig};
pub use service::TriviaService;
pub use store::{MemoryStore, PgStore, TriviaStore};
