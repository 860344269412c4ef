//! Category endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::IdPath;
use crate::http::server::AppState;
use crate::models::{Category, Question};

/// Category list response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<Category>,
}

/// Questions-in-category response
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Category name, `null` for an id with no category row
    pub current_category: Option<String>,
}

/// GET /api/v1/categories
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.service.list_categories().await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// GET /api/v1/categories/{category_id}/questions
async fn category_questions(
    State(state): State<Arc<AppState>>,
    IdPath(category_id): IdPath,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let result = state.service.questions_by_category(category_id).await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: result.questions.len(),
        questions: result.questions,
        current_category: result.category.map(|c| c.kind),
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/v1/categories", get(list_categories))
        .route(
            "/api/v1/categories/{category_id}/questions",
            get(category_questions),
        )
}
