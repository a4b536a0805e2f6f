//! mekd-ui library - the MEKD user-facing service
//!
//! Serves the indicator entry form and computes the corruption / IPM
//! estimates behind `POST /api/estimate`.

use axum::Router;
use mekd_common::config::ServiceConfig;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Resolved service configuration
    pub config: ServiceConfig,
}

impl AppState {
    /// Create new application state
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};
    use tower_http::trace::TraceLayer;

    Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/static/style.css", get(api::serve_style_css))
        .route("/api/estimate", post(api::compute_estimate))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
