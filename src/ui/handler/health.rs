//! Health and root endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{infrastructure::dto::http::HealthResponse, ui::state::AppState};

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: state.settings.app_version.clone(),
        app_name: state.settings.app_name.clone(),
    })
}

/// Root endpoint with a welcome message
pub async fn root(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": format!("Welcome to {}", state.settings.app_name),
        "version": state.settings.app_version,
        "health": format!("{}/health", state.settings.api_prefix),
    }))
}
