//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{infrastructure::dto::http::OnlineUsersDto, ui::state::AppState};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Diagnostic endpoint: list of currently joined user names
pub async fn get_online_users(State(state): State<Arc<AppState>>) -> Json<OnlineUsersDto> {
    let users = state
        .directory
        .online_users()
        .await
        .into_iter()
        .map(|user| user.into_string())
        .collect();

    Json(OnlineUsersDto { users })
}
