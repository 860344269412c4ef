//! Quiz endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{Question, QuizRequest};

/// Quiz response. `question` is null once the quiz is exhausted.
#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
    pub total_questions: i64,
}

/// POST /api/v1/quizzes
async fn next_quiz_question(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let category = req.category_id()?;
    let pick = state.service.quiz_pick(req.previous(), category).await?;

    Ok(Json(QuizResponse {
        success: true,
        question: pick.question,
        total_questions: pick.total_in_scope,
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/v1/quizzes", post(next_quiz_question))
}
