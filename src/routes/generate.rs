use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;
use crate::generate::{CaseStudyBrief, ContentGenerator};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct PostRequest {
    pub prompt: String,
}

#[derive(Deserialize)]
pub struct CaseStudyRequest {
    pub title: String,
    pub category: String,
    pub objective: String,
    pub approach: Option<String>,
}

#[derive(Deserialize)]
pub struct ImageDescriptionRequest {
    pub context: String,
}

#[derive(Deserialize)]
pub struct ProjectIdeaRequest {
    pub category: String,
    pub style: Option<String>,
}

pub async fn post(
    State(state): State<SharedState>,
    Json(req): Json<PostRequest>,
) -> Result<impl IntoResponse, AppError> {
    let content = generator(&state)?.journal_post(&req.prompt).await?;
    Ok(Json(json!({ "success": true, "data": { "content": content } })))
}

pub async fn case_study(
    State(state): State<SharedState>,
    Json(req): Json<CaseStudyRequest>,
) -> Result<impl IntoResponse, AppError> {
    let brief = CaseStudyBrief {
        title: req.title,
        category: req.category,
        objective: req.objective,
        approach: req.approach,
    };
    let content = generator(&state)?.case_study(&brief).await?;
    Ok(Json(json!({ "success": true, "data": { "content": content } })))
}

pub async fn project_idea(
    State(state): State<SharedState>,
    Json(req): Json<ProjectIdeaRequest>,
) -> Result<impl IntoResponse, AppError> {
    let content = generator(&state)?
        .project_idea(&req.category, req.style.as_deref())
        .await?;
    Ok(Json(json!({ "success": true, "data": { "content": content } })))
}

pub async fn image_description(
    State(state): State<SharedState>,
    Json(req): Json<ImageDescriptionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let content = generator(&state)?.image_description(&req.context).await?;
    Ok(Json(json!({ "success": true, "data": { "content": content } })))
}

fn generator(state: &SharedState) -> Result<&ContentGenerator, AppError> {
    state
        .generator
        .as_ref()
        .ok_or_else(|| AppError::Unavailable("Content generation is not configured".to_string()))
}
