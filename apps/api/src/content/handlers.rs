use axum::{extract::State, Json};
use serde_json::Value;

use crate::content::load_snapshot;
use crate::errors::AppError;
use crate::page::Session;
use crate::state::AppState;

/// GET /api/v1/content
/// One full page load: fetch every topic, render, and return the resulting
/// regions together with the load state.
pub async fn handle_get_content(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let snapshot = load_snapshot(state.content.as_ref()).await;

    let mut session = Session::new(&state.config.contact_form_action);
    session.load(&snapshot);

    let view = serde_json::to_value(session.view()).map_err(anyhow::Error::from)?;
    Ok(Json(view))
}

/// GET /api/v1/content/snapshot
pub async fn handle_get_snapshot(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let snapshot = load_snapshot(state.content.as_ref()).await;
    let value = serde_json::to_value(&snapshot).map_err(anyhow::Error::from)?;
    Ok(Json(value))
}
