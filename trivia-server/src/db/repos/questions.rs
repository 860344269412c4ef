//! Question repository
//!
//! Every list is ordered by id so paging and the quiz pick are stable.

use sqlx::PgPool;

use super::DbError;
use crate::models::{NewQuestion, Paginated, Pagination, Question};

const COLUMNS: &str = "id, question, answer, category, difficulty";

/// Build a `LIKE` pattern that matches `term` literally anywhere in the text.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// One page of questions plus the total row count.
    ///
    /// The total comes from its own query: a window function would report
    /// zero for pages past the end.
    pub async fn page(&self, page: Pagination) -> Result<Paginated<Question>, DbError> {
        let items = sqlx::query_as::<_, Question>(&format!(
            "SELECT {COLUMNS} FROM questions ORDER BY id LIMIT $1 OFFSET $2"
        ))
        .bind(i64::from(page.limit()))
        .bind(page.offset() as i64)
        .fetch_all(self.pool)
        .await?;

        let total = self.count(None).await?;

        Ok(Paginated { items, total })
    }

    /// Count questions, optionally only those in one category.
    pub async fn count(&self, category: Option<i32>) -> Result<i64, DbError> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM questions WHERE ($1::INT4 IS NULL OR category = $1)",
        )
        .bind(category)
        .fetch_one(self.pool)
        .await?;

        Ok(total)
    }

    /// Questions whose text contains `term` (case-sensitive).
    pub async fn search(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            r"SELECT {COLUMNS} FROM questions WHERE question LIKE $1 ESCAPE '\' ORDER BY id"
        ))
        .bind(like_pattern(term))
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// All questions filed under `category`.
    pub async fn by_category(&self, category: i32) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {COLUMNS} FROM questions WHERE category = $1 ORDER BY id"
        ))
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Lowest-id question not in `previous`, optionally within `category`.
    pub async fn next_unseen(
        &self,
        previous: &[i32],
        category: Option<i32>,
    ) -> Result<Option<Question>, DbError> {
        let question = sqlx::query_as::<_, Question>(&format!(
            r#"
            SELECT {COLUMNS} FROM questions
            WHERE id <> ALL($1)
              AND ($2::INT4 IS NULL OR category = $2)
            ORDER BY id
            LIMIT 1
            "#
        ))
        .bind(previous)
        .bind(category)
        .fetch_optional(self.pool)
        .await?;

        Ok(question)
    }

    /// Insert a question, returning the assigned id.
    pub async fn insert(&self, new: &NewQuestion) -> Result<i32, DbError> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(new.question.as_deref())
        .bind(new.answer.as_deref())
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// Delete a question by id.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("question", id));
        }

        Ok(())
    }
}
