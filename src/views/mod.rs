pub mod admin;
pub mod site;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        // Public site
        .route("/", get(site::home))
        .route("/work", get(site::work))
        .route("/work/{slug}", get(site::work_detail))
        .route("/journal", get(site::journal))
        .route("/journal/{slug}", get(site::journal_detail))
        .route("/about", get(site::about))
        .route("/contact", get(site::contact).post(site::contact_submit))
        // Admin dashboard
        .route("/admin", get(admin::dashboard))
        .route("/admin/projects/new", get(admin::new_form))
        .route("/admin/projects", post(admin::create_submit))
        .route("/admin/projects/{id}", get(admin::edit_form).post(admin::update_submit))
        .route("/admin/projects/{id}/delete", post(admin::delete_submit))
}
