use std::str::FromStr;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::db;
use crate::db::projects::ProjectFilter;
use crate::error::AppError;
use crate::models::{Category, ProjectDraft, ProjectPatch};
use crate::slug::validate_slug;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
    pub featured: Option<String>,
    pub published: Option<String>,
}

/// Year arrives as a number or a numeric string; either way it is
/// coerced to an integer before it reaches the repository.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum YearInput {
    Int(i32),
    Str(String),
}

impl YearInput {
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            YearInput::Int(n) => Some(*n),
            YearInput::Str(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Deserialize)]
pub struct CreateProject {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub year: Option<YearInput>,
    pub images: Option<Vec<String>>,
    pub client: Option<String>,
    pub tags: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpdateProject {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub year: Option<YearInput>,
    pub images: Option<Vec<String>>,
    pub client: Option<String>,
    pub tags: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
}

pub async fn list(
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let mut filter = ProjectFilter::default();

    if let Some(ref cat) = params.category {
        match Category::from_str(cat) {
            Ok(c) => filter.category = Some(c),
            // An unknown category matches nothing; no store call needed.
            Err(()) => {
                return Ok(Json(json!({
                    "success": true,
                    "data": [],
                    "count": 0,
                })));
            }
        }
    }
    if params.featured.as_deref() == Some("true") {
        filter.featured = Some(true);
    }
    if params.published.as_deref() == Some("true") {
        filter.published = Some(true);
    }

    let projects = db::projects::list(&state.pool, filter).await?;

    Ok(Json(json!({
        "success": true,
        "data": projects,
        "count": projects.len(),
    })))
}

pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<CreateProject>,
) -> Result<impl IntoResponse, AppError> {
    let draft = validate_create(req)?;

    let project = db::projects::create(&state.pool, &draft)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("A project with this slug already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "data": project,
            "message": "Project created successfully",
        })),
    ))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let project = db::projects::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    Ok(Json(json!({ "success": true, "data": project })))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProject>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    db::projects::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    let patch = validate_update(req)?;

    let project = db::projects::update(&state.pool, id, &patch)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("A project with this slug already exists".to_string())
            }
            _ => AppError::Database(e),
        })?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    Ok(Json(json!({
        "success": true,
        "data": project,
        "message": "Project updated successfully",
    })))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    db::projects::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    let deleted = db::projects::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Project not found".to_string()));
    }

    Ok(Json(json!({
        "success": true,
        "message": "Project deleted successfully",
    })))
}

/// Ids are parsed before any store call; a malformed id never reaches
/// the repository.
fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest("Invalid project ID format".to_string()))
}

fn validate_create(req: CreateProject) -> Result<ProjectDraft, AppError> {
    let mut missing = Vec::new();

    // Empty strings count as missing, matching the loose truthiness
    // checks this API replaced.
    let require = |field: &Option<String>, name: &str, missing: &mut Vec<String>| {
        match field {
            Some(v) if !v.trim().is_empty() => {}
            _ => missing.push(name.to_string()),
        }
    };

    require(&req.slug, "slug", &mut missing);
    require(&req.title, "title", &mut missing);
    require(&req.description, "description", &mut missing);
    require(&req.content, "content", &mut missing);
    require(&req.category, "category", &mut missing);
    if req.year.is_none() {
        missing.push("year".to_string());
    }

    if !missing.is_empty() {
        return Err(AppError::Validation(missing));
    }

    let slug = req.slug.unwrap();
    validate_slug(&slug).map_err(AppError::BadRequest)?;

    let category = Category::from_str(req.category.as_deref().unwrap())
        .map_err(|_| AppError::BadRequest("Unknown category".to_string()))?;

    let year = req
        .year
        .unwrap()
        .as_i32()
        .ok_or_else(|| AppError::BadRequest("Year must be an integer".to_string()))?;

    Ok(ProjectDraft {
        slug,
        title: req.title.unwrap(),
        description: req.description.unwrap(),
        content: req.content.unwrap(),
        category,
        images: req.images.unwrap_or_default(),
        client: req.client.unwrap_or_default(),
        year,
        tags: req.tags.unwrap_or_default(),
        featured: req.featured.unwrap_or(false),
        published: req.published.unwrap_or(false),
    })
}

fn validate_update(req: UpdateProject) -> Result<ProjectPatch, AppError> {
    if let Some(ref slug) = req.slug {
        validate_slug(slug).map_err(AppError::BadRequest)?;
    }

    let category = match req.category.as_deref() {
        Some(raw) => Some(
            Category::from_str(raw)
                .map_err(|_| AppError::BadRequest("Unknown category".to_string()))?,
        ),
        None => None,
    };

    let year = match req.year {
        Some(ref y) => Some(
            y.as_i32()
                .ok_or_else(|| AppError::BadRequest("Year must be an integer".to_string()))?,
        ),
        None => None,
    };

    Ok(ProjectPatch {
        slug: req.slug,
        title: req.title,
        description: req.description,
        content: req.content,
        category,
        images: req.images,
        client: req.client,
        year,
        tags: req.tags,
        featured: req.featured,
        published: req.published,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_create() -> CreateProject {
        CreateProject {
            slug: Some("foo".to_string()),
            title: Some("Foo".to_string()),
            description: Some("d".to_string()),
            content: Some("c".to_string()),
            category: Some("branding".to_string()),
            year: Some(YearInput::Int(2024)),
            images: None,
            client: None,
            tags: None,
            featured: None,
            published: None,
        }
    }

    #[test]
    fn create_defaults_optional_fields() {
        let draft = validate_create(minimal_create()).unwrap();
        assert!(draft.images.is_empty());
        assert!(draft.tags.is_empty());
        assert_eq!(draft.client, "");
        assert!(!draft.featured);
        assert!(!draft.published);
    }

    #[test]
    fn create_enumerates_missing_fields() {
        let mut req = minimal_create();
        req.title = None;
        req.year = None;
        req.description = Some("   ".to_string());

        match validate_create(req) {
            Err(AppError::Validation(fields)) => {
                assert_eq!(fields, vec!["title", "description", "year"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn create_rejects_unknown_category() {
        let mut req = minimal_create();
        req.category = Some("sculpture".to_string());
        assert!(matches!(
            validate_create(req),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn year_coerces_from_string() {
        assert_eq!(YearInput::Str("2024".to_string()).as_i32(), Some(2024));
        assert_eq!(YearInput::Str("soon".to_string()).as_i32(), None);
        assert_eq!(YearInput::Int(1999).as_i32(), Some(1999));
    }

    #[test]
    fn update_with_no_fields_is_empty_patch() {
        let req = UpdateProject {
            slug: None,
            title: None,
            description: None,
            content: None,
            category: None,
            year: None,
            images: None,
            client: None,
            tags: None,
            featured: None,
            published: None,
        };
        let patch = validate_update(req).unwrap();
        assert!(patch.slug.is_none() && patch.title.is_none() && patch.year.is_none());
    }

    #[test]
    fn bad_id_is_rejected_before_any_lookup() {
        assert!(parse_id("not-a-uuid").is_err());
        assert!(parse_id("0198c9a0-0000-7000-8000-000000000000").is_ok());
    }
}
