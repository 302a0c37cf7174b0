pub mod config;
pub mod content;
pub mod db;
pub mod error;
pub mod generate;
pub mod models;
pub mod routes;
pub mod slug;
pub mod state;
pub mod views;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use sqlx::PgPool;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::Config;
use crate::generate::ContentGenerator;
use crate::state::{AppState, SharedState};

pub fn build_app(pool: PgPool, config: Config) -> Router {
    let generator = config.openai.clone().map(|openai| {
        tracing::info!("Content generation configured (model {})", openai.model);
        ContentGenerator::new(openai)
    });

    let state: SharedState = Arc::new(AppState {
        pool,
        config,
        generator,
    });

    Router::new()
        .merge(routes::api_routes())
        .merge(views::view_routes())
        .nest_service("/static", ServeDir::new("static"))
        .route("/health", axum::routing::get(health))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
