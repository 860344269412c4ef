//! Query layer
//!
//! [`TriviaService`] owns no state beyond its config and a handle to the
//! store; each call is one logical operation against the store.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::db::DbError;
use crate::models::{Category, NewQuestion, Pagination, Question};
use crate::store::TriviaStore;

/// One page of the question listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// Count of all questions, not just this page
    pub total: i64,
    pub categories: Vec<Category>,
}

/// Questions of a single category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQuestions {
    /// `None` when no category row has the requested id
    pub category: Option<Category>,
    pub questions: Vec<Question>,
}

/// Outcome of a quiz pick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizPick {
    /// `None` once every question in scope has been asked
    pub question: Option<Question>,
    /// Questions in the quiz's scope (one category or all)
    pub total_in_scope: i64,
}

impl QuizPick {
    pub fn is_exhausted(&self) -> bool {
        self.question.is_none()
    }
}

#[derive(Clone)]
pub struct TriviaService {
    store: Arc<dyn TriviaStore>,
    config: ApiConfig,
}

impl TriviaService {
    pub fn new(store: Arc<dyn TriviaStore>, config: ApiConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
        self.store.categories().await
    }

    /// Page `page` (1-indexed) of all questions. Pages past the end are empty.
    pub async fn list_questions(&self, page: u32) -> Result<QuestionPage, DbError> {
        let window = Pagination::new(page, self.config.questions_per_page);
        let page = self.store.question_page(window).await?;
        let categories = self.store.categories().await?;

        Ok(QuestionPage {
            questions: page.items,
            total: page.total,
            categories,
        })
    }

    pub async fn questions_by_term(&self, term: &str) -> Result<Vec<Question>, DbError> {
        self.store.search_questions(term).await
    }

    /// Questions whose category field equals `category_id`. The id is not
    /// checked against the category table; an unknown id has no questions.
    pub async fn questions_by_category(
        &self,
        category_id: i32,
    ) -> Result<CategoryQuestions, DbError> {
        let category = match self.store.category(category_id).await {
            Ok(category) => Some(category),
            Err(DbError::NotFound { .. }) => {
                tracing::debug!(category_id, "no such category");
                None
            }
            Err(e) => return Err(e),
        };
        let questions = self.store.questions_in_category(category_id).await?;
        Ok(CategoryQuestions {
            category,
            questions,
        })
    }

    /// First question not yet asked, optionally restricted to one category.
    pub async fn quiz_pick(
        &self,
        previous: &[i32],
        category: Option<i32>,
    ) -> Result<QuizPick, DbError> {
        let question = self.store.next_unseen_question(previous, category).await?;
        let total_in_scope = self.store.count_questions(category).await?;

        if question.is_none() {
            tracing::debug!(?category, asked = previous.len(), "quiz exhausted");
        }

        Ok(QuizPick {
            question,
            total_in_scope,
        })
    }

    pub async fn insert_question(&self, question: &NewQuestion) -> Result<i32, DbError> {
        let id = self.store.insert_question(question).await?;
        tracing::debug!(id, "question created");
        Ok(id)
    }

    pub async fn delete_question(&self, id: i32) -> Result<(), DbError> {
        self.store.delete_question(id).await?;
        tracing::debug!(id, "question deleted");
        Ok(())
    }

    pub async fn count_questions(&self) -> Result<i64, DbError> {
        self.store.count_questions(None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn new_question(text: &str, category: i32) -> NewQuestion {
        NewQuestion {
            question: Some(text.into()),
            answer: Some("answer".into()),
            category: Some(category),
            difficulty: Some(1),
        }
    }

    fn service(store: MemoryStore) -> TriviaService {
        TriviaService::new(Arc::new(store), ApiConfig::default())
    }

    async fn twelve_question_service() -> TriviaService {
        let svc = service(MemoryStore::with_categories([
            Category::new(1, "Science"),
            Category::new(2, "Art"),
        ]));
        for i in 1..=12 {
            svc.insert_question(&new_question(&format!("question {i}"), 1 + i % 2))
                .await
                .unwrap();
        }
        svc
    }

    #[tokio::test]
    async fn second_page_holds_the_remainder() {
        let svc = twelve_question_service().await;

        let page = svc.list_questions(2).await.unwrap();
        assert_eq!(page.total, 12);
        assert_eq!(
            page.questions.iter().map(|q| q.id).collect::<Vec<_>>(),
            vec![11, 12]
        );
        assert_eq!(page.categories.len(), 2);
    }

    #[tokio::test]
    async fn every_page_is_bounded() {
        let svc = twelve_question_service().await;

        for page in 1..=4 {
            let result = svc.list_questions(page).await.unwrap();
            assert!(result.questions.len() <= 10);
            assert_eq!(result.total, 12);
        }
        assert!(svc.list_questions(3).await.unwrap().questions.is_empty());
    }

    #[tokio::test]
    async fn page_size_follows_config() {
        let store = MemoryStore::new();
        for i in 0..5 {
            store.insert_question(&new_question(&format!("q{i}"), 1)).await.unwrap();
        }
        let svc = TriviaService::new(
            Arc::new(store),
            ApiConfig {
                questions_per_page: 2,
            },
        );

        assert_eq!(svc.list_questions(3).await.unwrap().questions.len(), 1);
    }

    #[tokio::test]
    async fn insert_and_delete_move_count_by_one() {
        let svc = twelve_question_service().await;

        let id = svc.insert_question(&new_question("fresh", 1)).await.unwrap();
        assert!(id > 12);
        assert_eq!(svc.count_questions().await.unwrap(), 13);

        svc.delete_question(id).await.unwrap();
        assert_eq!(svc.count_questions().await.unwrap(), 12);

        let err = svc.delete_question(id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn search_matches_substring_only() {
        let svc = service(MemoryStore::new());
        let taj = svc
            .insert_question(&new_question("Where is the Taj Mahal?", 3))
            .await
            .unwrap();
        svc.insert_question(&new_question("Who painted the Mona Lisa?", 2))
            .await
            .unwrap();

        let found = svc.questions_by_term("Taj").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, taj);
        assert!(found.iter().all(|q| q.question.as_deref().unwrap().contains("Taj")));
    }

    #[tokio::test]
    async fn category_listing_matches_category_field() {
        let svc = twelve_question_service().await;

        let art = svc.questions_by_category(2).await.unwrap();
        assert_eq!(art.category.map(|c| c.kind).as_deref(), Some("Art"));
        assert_eq!(art.questions.len(), 6);
        assert!(art.questions.iter().all(|q| q.category == Some(2)));

        let unknown = svc.questions_by_category(99).await.unwrap();
        assert_eq!(unknown.category, None);
        assert!(unknown.questions.is_empty());
    }

    #[tokio::test]
    async fn questions_filed_under_missing_category_are_listed() {
        let svc = twelve_question_service().await;
        let orphan = svc.insert_question(&new_question("orphan", 42)).await.unwrap();

        let result = svc.questions_by_category(42).await.unwrap();
        assert_eq!(result.category, None);
        assert_eq!(result.questions.iter().map(|q| q.id).collect::<Vec<_>>(), vec![orphan]);
    }

    #[tokio::test]
    async fn quiz_never_repeats_and_stays_in_category() {
        let svc = service(MemoryStore::new());
        for i in 0..6 {
            svc.insert_question(&new_question(&format!("q{i}"), if i < 3 { 3 } else { 4 }))
                .await
                .unwrap();
        }

        let pick = svc.quiz_pick(&[1, 2], Some(3)).await.unwrap();
        assert_eq!(pick.question.as_ref().map(|q| q.id), Some(3));
        assert_eq!(pick.total_in_scope, 3);

        let pick = svc.quiz_pick(&[1, 2, 3], Some(4)).await.unwrap();
        let question = pick.question.unwrap();
        assert!(![1, 2, 3].contains(&question.id));
        assert_eq!(question.category, Some(4));
    }

    #[tokio::test]
    async fn quiz_reports_exhaustion() {
        let svc = service(MemoryStore::new());
        for i in 0..3 {
            svc.insert_question(&new_question(&format!("q{i}"), 3)).await.unwrap();
        }

        let pick = svc.quiz_pick(&[1, 2, 3], Some(3)).await.unwrap();
        assert!(pick.is_exhausted());
        assert_eq!(pick.total_in_scope, 3);

        let pick = svc.quiz_pick(&[], Some(5)).await.unwrap();
        assert!(pick.is_exhausted());
        assert_eq!(pick.total_in_scope, 0);
    }
}
