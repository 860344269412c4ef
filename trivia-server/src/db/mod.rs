//! Database layer - connection pool, schema and repositories
//!
//! Repositories borrow the pool and issue one statement per call,
//! except seeding which runs in a transaction.

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
