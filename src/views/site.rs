use std::str::FromStr;

use askama::Template;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect};
use axum::Form;
use serde::Deserialize;

use crate::content::{self, JournalPost};
use crate::db;
use crate::db::projects::ProjectFilter;
use crate::error::AppError;
use crate::models::{Category, Project};
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "site/home.html")]
struct HomeTemplate {
    featured: Vec<Project>,
}

#[derive(Template)]
#[template(path = "site/work.html")]
struct WorkTemplate {
    projects: Vec<Project>,
    categories: Vec<Category>,
    selected: String,
}

#[derive(Template)]
#[template(path = "site/work_detail.html")]
struct WorkDetailTemplate {
    project: Option<Project>,
}

#[derive(Template)]
#[template(path = "site/journal.html")]
struct JournalTemplate {
    posts: Vec<JournalPost>,
}

#[derive(Template)]
#[template(path = "site/journal_detail.html")]
struct JournalDetailTemplate {
    post: Option<JournalPost>,
}

#[derive(Template)]
#[template(path = "site/about.html")]
struct AboutTemplate;

#[derive(Template)]
#[template(path = "site/contact.html")]
struct ContactTemplate {
    sent: bool,
}

pub async fn home(State(state): State<SharedState>) -> Result<impl IntoResponse, AppError> {
    let featured = db::projects::featured(&state.pool, 6).await?;
    let template = HomeTemplate { featured };
    Ok(Html(template.render().unwrap_or_default()))
}

#[derive(Deserialize)]
pub struct WorkParams {
    pub category: Option<String>,
}

pub async fn work(
    State(state): State<SharedState>,
    Query(params): Query<WorkParams>,
) -> Result<impl IntoResponse, AppError> {
    let selected = params.category.unwrap_or_else(|| "all".to_string());

    let projects = match Category::from_str(&selected) {
        Ok(category) => db::projects::by_category(&state.pool, category).await?,
        Err(()) => {
            let filter = ProjectFilter {
                published: Some(true),
                ..Default::default()
            };
            db::projects::list(&state.pool, filter).await?
        }
    };

    let template = WorkTemplate {
        projects,
        categories: Category::ALL.to_vec(),
        selected,
    };
    Ok(Html(template.render().unwrap_or_default()))
}

/// Unknown slugs render a placeholder inside the normal page shell
/// rather than an HTTP 404, so navigation stays intact.
pub async fn work_detail(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let project = db::projects::find_by_slug(&state.pool, &slug)
        .await?
        .filter(|p| p.published);

    let template = WorkDetailTemplate { project };
    Ok(Html(template.render().unwrap_or_default()))
}

pub async fn journal() -> impl IntoResponse {
    let template = JournalTemplate {
        posts: content::journal_posts(),
    };
    Html(template.render().unwrap_or_default())
}

pub async fn journal_detail(Path(slug): Path<String>) -> impl IntoResponse {
    let template = JournalDetailTemplate {
        post: content::find_post(&slug),
    };
    Html(template.render().unwrap_or_default())
}

pub async fn about() -> impl IntoResponse {
    Html(AboutTemplate.render().unwrap_or_default())
}

#[derive(Deserialize)]
pub struct ContactParams {
    pub sent: Option<String>,
}

pub async fn contact(Query(params): Query<ContactParams>) -> impl IntoResponse {
    let template = ContactTemplate {
        sent: params.sent.as_deref() == Some("1"),
    };
    Html(template.render().unwrap_or_default())
}

#[derive(Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// No delivery backend is wired up: the submission is logged and the
/// form shows a transient confirmation.
pub async fn contact_submit(Form(form): Form<ContactForm>) -> impl IntoResponse {
    tracing::info!(
        name = %form.name,
        email = %form.email,
        "contact form submission: {}",
        form.message
    );
    Redirect::to("/contact?sent=1")
}
