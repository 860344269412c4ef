//! Trivia questions

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Question row.
///
/// Every column except `id` is nullable: the create endpoint stores
/// whatever the client sent, including nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

/// Body of `POST /api/v1/questions`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewQuestion {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub category: Option<i32>,
    #[serde(default)]
    pub difficulty: Option<i32>,
}

impl NewQuestion {
    /// Materialize as a row with the id the store assigned.
    pub fn into_question(self, id: i32) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}
