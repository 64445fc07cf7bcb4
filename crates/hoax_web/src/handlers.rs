use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use hoax_core::{Article, CategoryRequest, DetectionResult};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Missing and `null` fields fall back to the defaults below.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub category: Option<String>,
}

impl GenerateRequest {
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(CategoryRequest::RANDOM)
    }
}

#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateAndDetect {
    pub article: Article,
    pub detection: DetectionResult,
    pub detection_correct: bool,
}

pub async fn list_categories() -> impl IntoResponse {
    Json(json!({ "categories": CategoryRequest::names() }))
}

pub async fn generate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(request) = payload?;
    let article = state.generator.generate(request.category(), &mut state.rng())?;
    Ok(Json(json!({ "success": true, "article": article })))
}

pub async fn detect(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DetectRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(request) = payload?;
    let content = request.content.as_deref().unwrap_or_default();
    if content.is_empty() {
        return Err(ApiError::BadRequest("Content is required".to_string()));
    }

    let title = request.title.as_deref().unwrap_or_default();
    let result = state.detector.detect(content, title);
    Ok(Json(json!({ "success": true, "result": result })))
}

pub async fn generate_and_detect(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(request) = payload?;
    let article = state.generator.generate(request.category(), &mut state.rng())?;
    let detection = state.detector.detect(&article.content, &article.title);
    let detection_correct = detection.is_fake == article.is_fake;

    info!("⚖️ Generate and detect completed - Detection correct: {}", detection_correct);

    let result = GenerateAndDetect {
        article,
        detection,
        detection_correct,
    };
    Ok(Json(json!({ "success": true, "result": result })))
}
