use std::str::FromStr;

use askama::Template;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use chrono::Datelike;
use serde::Deserialize;
use uuid::Uuid;

use crate::db;
use crate::error::AppError;
use crate::models::{Category, Project, ProjectDraft, ProjectPatch};
use crate::slug::slugify;
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
struct DashboardTemplate {
    projects: Vec<Project>,
    total: usize,
    published: usize,
    featured: usize,
    drafts: usize,
    q: String,
    selected: String,
    categories: Vec<Category>,
    flash: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/form.html")]
struct FormTemplate {
    heading: String,
    action: String,
    error: Option<String>,
    categories: Vec<Category>,
    title: String,
    slug: String,
    description: String,
    content: String,
    category: String,
    client: String,
    year: String,
    images: String,
    tags: String,
    featured: bool,
    published: bool,
}

impl FormTemplate {
    fn create() -> Self {
        FormTemplate {
            heading: "New Project".to_string(),
            action: "/admin/projects".to_string(),
            error: None,
            categories: Category::ALL.to_vec(),
            title: String::new(),
            slug: String::new(),
            description: String::new(),
            content: String::new(),
            category: Category::WebDesign.as_str().to_string(),
            client: String::new(),
            year: chrono::Utc::now().year().to_string(),
            images: String::new(),
            tags: String::new(),
            featured: false,
            published: false,
        }
    }

    fn edit(project: &Project) -> Self {
        FormTemplate {
            heading: format!("Edit \u{201c}{}\u{201d}", project.title),
            action: format!("/admin/projects/{}", project.id),
            error: None,
            categories: Category::ALL.to_vec(),
            title: project.title.clone(),
            slug: project.slug.clone(),
            description: project.description.clone(),
            content: project.content.clone(),
            category: project.category.as_str().to_string(),
            client: project.client.clone(),
            year: project.year.to_string(),
            images: project.images.join("\n"),
            tags: project.tags.join("\n"),
            featured: project.featured,
            published: project.published,
        }
    }

    fn resubmit(self, form: &ProjectForm, error: String) -> Self {
        FormTemplate {
            error: Some(error),
            title: form.title.clone(),
            slug: form.slug.clone(),
            description: form.description.clone(),
            content: form.content.clone(),
            category: form.category.clone(),
            client: form.client.clone(),
            year: form.year.clone(),
            images: form.images.clone(),
            tags: form.tags.clone(),
            featured: form.featured.is_some(),
            published: form.published.is_some(),
            ..self
        }
    }
}

#[derive(Deserialize)]
pub struct DashboardParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub flash: Option<String>,
}

/// Case-insensitive substring match against title, description, or any
/// tag, combined with an exact category match unless "all" is selected.
pub fn filter_projects(projects: &[Project], query: &str, category: &str) -> Vec<Project> {
    let needle = query.trim().to_lowercase();

    projects
        .iter()
        .filter(|p| {
            let text_match = needle.is_empty()
                || p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
                || p.tags.iter().any(|t| t.to_lowercase().contains(&needle));

            let category_match =
                category.is_empty() || category == "all" || p.category.as_str() == category;

            text_match && category_match
        })
        .cloned()
        .collect()
}

pub async fn dashboard(
    State(state): State<SharedState>,
    Query(params): Query<DashboardParams>,
) -> Result<impl IntoResponse, AppError> {
    let all = db::projects::list(&state.pool, Default::default()).await?;

    let q = params.q.unwrap_or_default();
    let selected = params.category.unwrap_or_else(|| "all".to_string());

    let flash = params.flash.as_deref().map(|f| {
        match f {
            "created" => "Project created successfully",
            "updated" => "Project updated successfully",
            "deleted" => "Project deleted successfully",
            _ => "Done",
        }
        .to_string()
    });

    let template = DashboardTemplate {
        total: all.len(),
        published: all.iter().filter(|p| p.published).count(),
        featured: all.iter().filter(|p| p.featured).count(),
        drafts: all.iter().filter(|p| !p.published).count(),
        projects: filter_projects(&all, &q, &selected),
        q,
        selected,
        categories: Category::ALL.to_vec(),
        flash,
    };
    Ok(Html(template.render().unwrap_or_default()))
}

pub async fn new_form() -> impl IntoResponse {
    Html(FormTemplate::create().render().unwrap_or_default())
}

pub async fn edit_form(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let project = db::projects::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    Ok(Html(FormTemplate::edit(&project).render().unwrap_or_default()))
}

/// Raw form fields; checkboxes are absent when unchecked, list fields
/// arrive as newline- or comma-separated text.
#[derive(Debug, Deserialize)]
pub struct ProjectForm {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub category: String,
    pub client: String,
    pub year: String,
    pub images: String,
    pub tags: String,
    pub featured: Option<String>,
    pub published: Option<String>,
}

pub async fn create_submit(
    State(state): State<SharedState>,
    Form(form): Form<ProjectForm>,
) -> Result<Response, AppError> {
    let draft = match build_draft(&form) {
        Ok(draft) => draft,
        Err(msg) => {
            let template = FormTemplate::create().resubmit(&form, msg);
            return Ok(Html(template.render().unwrap_or_default()).into_response());
        }
    };

    match db::projects::create(&state.pool, &draft).await {
        Ok(_) => Ok(Redirect::to("/admin?flash=created").into_response()),
        Err(sqlx::Error::Database(ref db_err)) if db_err.is_unique_violation() => {
            let template = FormTemplate::create()
                .resubmit(&form, "A project with this slug already exists".to_string());
            Ok(Html(template.render().unwrap_or_default()).into_response())
        }
        Err(e) => Err(AppError::Database(e)),
    }
}

pub async fn update_submit(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Form(form): Form<ProjectForm>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;

    let existing = db::projects::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    let draft = match build_draft(&form) {
        Ok(draft) => draft,
        Err(msg) => {
            let template = FormTemplate::edit(&existing).resubmit(&form, msg);
            return Ok(Html(template.render().unwrap_or_default()).into_response());
        }
    };

    // The form posts every field, so the patch is total; id and
    // created_at still cannot be touched.
    let patch = ProjectPatch {
        slug: Some(draft.slug),
        title: Some(draft.title),
        description: Some(draft.description),
        content: Some(draft.content),
        category: Some(draft.category),
        images: Some(draft.images),
        client: Some(draft.client),
        year: Some(draft.year),
        tags: Some(draft.tags),
        featured: Some(draft.featured),
        published: Some(draft.published),
    };

    match db::projects::update(&state.pool, id, &patch).await {
        Ok(Some(_)) => Ok(Redirect::to("/admin?flash=updated").into_response()),
        Ok(None) => Err(AppError::NotFound("Project not found".to_string())),
        Err(sqlx::Error::Database(ref db_err)) if db_err.is_unique_violation() => {
            let template = FormTemplate::edit(&existing)
                .resubmit(&form, "A project with this slug already exists".to_string());
            Ok(Html(template.render().unwrap_or_default()).into_response())
        }
        Err(e) => Err(AppError::Database(e)),
    }
}

pub async fn delete_submit(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let deleted = db::projects::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Project not found".to_string()));
    }

    Ok(Redirect::to("/admin?flash=deleted"))
}

fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest("Invalid project ID format".to_string()))
}

/// A blank slug is re-derived from the title. Slug edits are otherwise
/// left alone: retyping the title does not silently replace a slug the
/// operator customized.
fn build_draft(form: &ProjectForm) -> Result<ProjectDraft, String> {
    if form.title.trim().is_empty()
        || form.description.trim().is_empty()
        || form.content.trim().is_empty()
    {
        return Err("Title, description, and content are required".to_string());
    }

    let slug = if form.slug.trim().is_empty() {
        slugify(&form.title)
    } else {
        form.slug.trim().to_string()
    };
    if slug.is_empty() {
        return Err("Could not derive a slug from this title".to_string());
    }

    let category =
        Category::from_str(&form.category).map_err(|_| "Unknown category".to_string())?;

    let year = form
        .year
        .trim()
        .parse()
        .unwrap_or_else(|_| chrono::Utc::now().year());

    Ok(ProjectDraft {
        slug,
        title: form.title.trim().to_string(),
        description: form.description.trim().to_string(),
        content: form.content.trim().to_string(),
        category,
        images: parse_list(&form.images, false),
        client: form.client.trim().to_string(),
        year,
        tags: parse_list(&form.tags, true),
        featured: form.featured.is_some(),
        published: form.published.is_some(),
    })
}

/// Splits on newlines and commas, trims, drops empties; optionally
/// de-duplicates while preserving order (tags are a set, images are an
/// ordered list).
fn parse_list(input: &str, dedupe: bool) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in input.split(['\n', ',']) {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        if dedupe && out.iter().any(|existing| existing == item) {
            continue;
        }
        out.push(item.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn project(title: &str, description: &str, category: Category, tags: &[&str]) -> Project {
        Project {
            id: Uuid::now_v7(),
            slug: slugify(title),
            title: title.to_string(),
            description: description.to_string(),
            content: String::new(),
            category,
            images: vec![],
            client: String::new(),
            year: 2024,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            featured: false,
            published: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn search_matches_title_case_insensitively() {
        let projects = vec![
            project("Abstract Gold Series", "digital art", Category::Illustration, &[]),
            project("Luxury Brand Identity", "identity system", Category::Branding, &[]),
        ];

        let hits = filter_projects(&projects, "gold", "all");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Abstract Gold Series");
    }

    #[test]
    fn search_matches_tags_and_description() {
        let projects = vec![
            project("Poster Set", "minimalist series", Category::Illustration, &["print"]),
            project("App Redesign", "mobile banking", Category::UiUx, &["figma"]),
        ];

        assert_eq!(filter_projects(&projects, "figma", "all").len(), 1);
        assert_eq!(filter_projects(&projects, "minimalist", "all").len(), 1);
    }

    #[test]
    fn category_filter_combines_with_search() {
        let projects = vec![
            project("Gold Poster", "a", Category::Illustration, &[]),
            project("Gold Website", "b", Category::WebDesign, &[]),
        ];

        let hits = filter_projects(&projects, "gold", "web-design");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Gold Website");
    }

    #[test]
    fn empty_query_and_all_category_match_everything() {
        let projects = vec![
            project("One", "a", Category::Motion, &[]),
            project("Two", "b", Category::Photography, &[]),
        ];
        assert_eq!(filter_projects(&projects, "", "all").len(), 2);
        assert_eq!(filter_projects(&projects, "  ", "").len(), 2);
    }

    #[test]
    fn list_parsing_trims_and_dedupes_tags() {
        let tags = parse_list("print,  print \n poster\n\n", true);
        assert_eq!(tags, vec!["print", "poster"]);

        // Images keep duplicates and order.
        let images = parse_list("/a.jpg\n/b.jpg\n/a.jpg", false);
        assert_eq!(images, vec!["/a.jpg", "/b.jpg", "/a.jpg"]);
    }

    #[test]
    fn blank_slug_is_derived_from_title() {
        let form = ProjectForm {
            title: "My New Project!!".to_string(),
            slug: String::new(),
            description: "d".to_string(),
            content: "c".to_string(),
            category: "branding".to_string(),
            client: String::new(),
            year: "2024".to_string(),
            images: String::new(),
            tags: String::new(),
            featured: None,
            published: Some("on".to_string()),
        };

        let draft = build_draft(&form).unwrap();
        assert_eq!(draft.slug, "my-new-project");
        assert!(draft.published);
        assert!(!draft.featured);
    }

    #[test]
    fn custom_slug_is_left_alone() {
        let form = ProjectForm {
            title: "My New Project!!".to_string(),
            slug: "keep-this-slug".to_string(),
            description: "d".to_string(),
            content: "c".to_string(),
            category: "branding".to_string(),
            client: String::new(),
            year: "2024".to_string(),
            images: String::new(),
            tags: String::new(),
            featured: None,
            published: None,
        };

        assert_eq!(build_draft(&form).unwrap().slug, "keep-this-slug");
    }
}
