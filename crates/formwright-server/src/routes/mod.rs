//! API Routes

pub mod error;
pub mod forms;
pub mod generate;
pub mod health;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Every endpoint, with permissive CORS for the browser frontend and
/// per-request HTTP tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/generate-form", post(generate::generate_form))
        .route("/api/forms/save", post(forms::save_form))
        .route("/api/user/:user_id", get(forms::list_user_forms))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
