pub mod analyze;
pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes();
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyze", post(analyze::handle_analyze_upload))
        .route("/api/v1/analyze/text", post(analyze::handle_analyze_text))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
