pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/skills/extract", post(handlers::handle_extract))
        .route("/api/v1/analysis", post(handlers::handle_analyze))
        .route("/api/v1/analysis/current", get(handlers::handle_current))
        .route("/api/v1/analysis/current/team", get(handlers::handle_team))
        .route(
            "/api/v1/analysis/current/export",
            get(handlers::handle_export),
        )
        .with_state(state)
}
