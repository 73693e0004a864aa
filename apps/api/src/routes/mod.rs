pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::parsing::handlers as parsing;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_body_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/parse", post(parsing::handle_parse))
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        .route("/api/v1/rewrite", post(analysis::handle_rewrite))
        .layer(body_limit)
        .with_state(state)
}
