pub mod generate;
pub mod projects;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Projects
        .route("/api/projects", get(projects::list).post(projects::create))
        .route(
            "/api/projects/{id}",
            get(projects::get)
                .put(projects::update)
                .delete(projects::delete),
        )
        // Content generation (optional; 503 when unconfigured)
        .route("/api/generate/post", post(generate::post))
        .route("/api/generate/case-study", post(generate::case_study))
        .route("/api/generate/project-idea", post(generate::project_idea))
        .route(
            "/api/generate/image-description",
            post(generate::image_description),
        )
}
