//! Server runner: wires the presence directory into the axum application.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    domain::PresenceDirectory,
    infrastructure::InMemoryPresenceDirectory,
    ui::{
        handler::{get_online_users, health_check, websocket_handler},
        signal::shutdown_signal,
        state::AppState,
    },
};

/// Build the axum application around the given state.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ws", get(websocket_handler))
        .route("/api/health", get(health_check))
        .route("/api/online", get(get_online_users))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the chat relay server until a shutdown signal arrives.
pub async fn run_server(host: &str, port: u16) -> std::io::Result<()> {
    let directory: Arc<dyn PresenceDirectory> = Arc::new(InMemoryPresenceDirectory::new());
    let state = Arc::new(AppState::new(directory));

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}
