//! Question endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::{IdPath, JsonBody, Page};
use crate::http::server::AppState;
use crate::models::{Category, NewQuestion, Question};

/// Paginated question listing
#[derive(Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: i64,
    pub categories: Vec<Category>,
}

#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i32,
    pub total_questions: i64,
}

#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i32,
    pub total_questions: i64,
}

/// Search request
#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// GET /api/v1/questions?page=N
async fn list_questions(
    State(state): State<Arc<AppState>>,
    Page(page): Page,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let result = state.service.list_questions(page).await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: result.questions,
        total_questions: result.total,
        categories: result.categories,
    }))
}

/// POST /api/v1/questions
async fn create_question(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<NewQuestion>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let created = state.service.insert_question(&req).await?;
    let total_questions = state.service.count_questions().await?;

    Ok(Json(CreatedResponse {
        success: true,
        created,
        total_questions,
    }))
}

/// DELETE /api/v1/questions/{question_id}
async fn delete_question(
    State(state): State<Arc<AppState>>,
    IdPath(question_id): IdPath,
) -> Result<Json<DeletedResponse>, ApiError> {
    state.service.delete_question(question_id).await?;
    let total_questions = state.service.count_questions().await?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted: question_id,
        total_questions,
    }))
}

/// POST /api/v1/questions/search
async fn search_questions(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let questions = state.service.questions_by_term(&req.search_term).await?;

    Ok(Json(SearchResponse {
        success: true,
        total_questions: questions.len(),
        questions,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/v1/questions", get(list_questions).post(create_question))
        .route("/api/v1/questions/search", post(search_questions))
        .route("/api/v1/questions/{question_id}", delete(delete_question))
}
