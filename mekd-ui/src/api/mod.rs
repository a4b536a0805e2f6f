//! HTTP API handlers for mekd-ui

pub mod estimate;
pub mod health;
pub mod ui;

pub use estimate::compute_estimate;
pub use health::health_routes;
pub use ui::{serve_app_js, serve_index, serve_style_css};
