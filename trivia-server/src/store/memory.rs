use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::TriviaStore;
use crate::db::DbError;
use crate::models::{Category, NewQuestion, Paginated, Pagination, Question};

/// In-process store.
///
/// Question ids come from a counter and are never reused, matching a
/// `SERIAL` column.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    last_question_id: i32,
}

fn matches_category(question: &Question, category: Option<i32>) -> bool {
    category.is_none() || question.category == category
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `categories` and no questions.
    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let tables = Tables {
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
            ..Default::default()
        };
        Self {
            tables: RwLock::new(tables),
        }
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn categories(&self) -> Result<Vec<Category>, DbError> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn category(&self, id: i32) -> Result<Category, DbError> {
        self.tables
            .read()
            .await
            .categories
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::not_found("category", id))
    }

    async fn question_page(&self, page: Pagination) -> Result<Paginated<Question>, DbError> {
        let tables = self.tables.read().await;
        let items = tables
            .questions
            .values()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(page.limit() as usize)
            .cloned()
            .collect();

        Ok(Paginated {
            items,
            total: tables.questions.len() as i64,
        })
    }

    async fn count_questions(&self, category: Option<i32>) -> Result<i64, DbError> {
        let tables = self.tables.read().await;
        let count = tables
            .questions
            .values()
            .filter(|q| matches_category(q, category))
            .count();
        Ok(count as i64)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.question.as_deref().is_some_and(|text| text.contains(term)))
            .cloned()
            .collect())
    }

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.category == Some(category))
            .cloned()
            .collect())
    }

    async fn next_unseen_question(
        &self,
        previous: &[i32],
        category: Option<i32>,
    ) -> Result<Option<Question>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .find(|q| !previous.contains(&q.id) && matches_category(q, category))
            .cloned())
    }

    async fn insert_question(&self, question: &NewQuestion) -> Result<i32, DbError> {
        let mut tables = self.tables.write().await;
        tables.last_question_id += 1;
        let id = tables.last_question_id;
        tables
            .questions
            .insert(id, question.clone().into_question(id));
        Ok(id)
    }

    async fn delete_question(&self, id: i32) -> Result<(), DbError> {
        self.tables
            .write()
            .await
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DbError::not_found("question", id))
    }
}
