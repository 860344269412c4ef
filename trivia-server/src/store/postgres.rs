use async_trait::async_trait;
use sqlx::PgPool;

use super::TriviaStore;
use crate::db::{CategoryRepo, DbError, QuestionRepo};
use crate::models::{Category, NewQuestion, Paginated, Pagination, Question};

/// Postgres-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn questions(&self) -> QuestionRepo<'_> {
        QuestionRepo::new(&self.pool)
    }

    fn categories_repo(&self) -> CategoryRepo<'_> {
        CategoryRepo::new(&self.pool)
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn categories(&self) -> Result<Vec<Category>, DbError> {
        self.categories_repo().list().await
    }

    async fn category(&self, id: i32) -> Result<Category, DbError> {
        self.categories_repo().get(id).await
    }

    async fn question_page(&self, page: Pagination) -> Result<Paginated<Question>, DbError> {
        self.questions().page(page).await
    }

    async fn count_questions(&self, category: Option<i32>) -> Result<i64, DbError> {
        self.questions().count(category).await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError> {
        self.questions().search(term).await
    }

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, DbError> {
        self.questions().by_category(category).await
    }

    async fn next_unseen_question(
        &self,
        previous: &[i32],
        category: Option<i32>,
    ) -> Result<Option<Question>, DbError> {
        self.questions().next_unseen(previous, category).await
    }

    async fn insert_question(&self, question: &NewQuestion) -> Result<i32, DbError> {
        self.questions().insert(question).await
    }

    async fn delete_question(&self, id: i32) -> Result<(), DbError> {
        self.questions().delete(id).await
    }
}
