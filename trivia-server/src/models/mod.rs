//! Domain models for the trivia API
//!
//! Rows are read straight into these types by the Postgres repositories
//! and serialized as-is into response bodies.

pub mod category;
pub mod pagination;
pub mod question;
pub mod quiz;
pub mod validation;

pub use category::{default_categories, Category, DEFAULT_CATEGORIES};
pub use pagination::{PageParams, Paginated, Pagination, DEFAULT_PER_PAGE, MAX_PER_PAGE};
pub use question::{NewQuestion, Question};
pub use quiz::{CategoryRef, QuizCategory, QuizRequest};
pub use validation::ValidationError;
