//! Store trait and implementations
//!
//! The query layer talks to persistence only through [`TriviaStore`]:
//! - [`PgStore`]: Postgres via the sqlx repositories
//! - [`MemoryStore`]: in-process tables for tests and `serve --in-memory`

mod memory;
mod postgres;

use async_trait::async_trait;

use crate::db::DbError;
use crate::models::{Category, NewQuestion, Paginated, Pagination, Question};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Persistence primitives over categories and questions.
///
/// Every list is in ascending id order.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories.
    async fn categories(&self) -> Result<Vec<Category>, DbError>;

    /// One category, or [`DbError::NotFound`].
    async fn category(&self, id: i32) -> Result<Category, DbError>;

    /// A window of questions plus the total question count.
    async fn question_page(&self, page: Pagination) -> Result<Paginated<Question>, DbError>;

    /// Number of questions, optionally within one category.
    async fn count_questions(&self, category: Option<i32>) -> Result<i64, DbError>;

    /// Questions whose text contains `term`, case-sensitively.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError>;

    /// Questions filed under `category`.
    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, DbError>;

    /// Lowest-id question whose id is not in `previous`, optionally within `category`.
    async fn next_unseen_question(
        &self,
        previous: &[i32],
        category: Option<i32>,
    ) -> Result<Option<Question>, DbError>;

    /// Insert a question and return its new id.
    async fn insert_question(&self, question: &NewQuestion) -> Result<i32, DbError>;

    /// Delete a question, or [`DbError::NotFound`] if the id is unknown.
    async fn delete_question(&self, id: i32) -> Result<(), DbError>;
}
