pub mod client;
pub mod config;
pub mod modules;
pub mod services;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use modules::users::{interface::UserController, user_routes};

pub struct AppState {
    pub controller: Arc<dyn UserController>,
}

impl AppState {
    pub fn new(controller: Arc<dyn UserController>) -> Self {
        Self { controller }
    }
}

/// Build the HTTP application with the user routes mounted under `mount_path`.
pub fn create_app(state: AppState, mount_path: &str) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/health", get(health_check))
        .nest(mount_path, user_routes())
        .layer(RequestBodyLimitLayer::new(1024 * 100)) // 100KB max body
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
