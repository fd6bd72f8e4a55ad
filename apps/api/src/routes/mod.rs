pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::contact::handlers as contact;
use crate::content::handlers as content;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Contact backend
        .route("/api/contact", post(contact::handle_create_contact))
        // Content pipeline
        .route("/api/v1/content", get(content::handle_get_content))
        .route("/api/v1/content/snapshot", get(content::handle_get_snapshot))
        .with_state(state)
}
