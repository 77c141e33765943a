//! WebSocket connection handlers.
//!
//! One socket per session. The transport assigns the session id, owns the
//! per-session outbound channel, and dispatches inbound messages to the
//! router usecases by their `type` field. Everything here is plumbing; the
//! routing decisions live in the usecase layer.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::{
    domain::{ChatMessage, Delivery, MessageType, SessionId},
    infrastructure::dto::websocket::ChatMessageDto,
    ui::state::AppState,
    usecase::{DisconnectUseCase, JoinRoomUseCase, PrivateMessageUseCase, PublicMessageUseCase},
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    // The transport issues the session id; it is opaque to everything else.
    let session_id = match SessionId::new(Uuid::new_v4().to_string()) {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Failed to create session id: {}", e);
            return;
        }
    };

    let (mut sender, mut receiver) = socket.split();

    // Create a channel for this session to receive messages
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    {
        let mut sessions = state.sessions.lock().await;
        sessions.insert(session_id.as_str().to_string(), tx);
    }
    tracing::info!(session_id = %session_id, "Session connected");

    let recv_session_id = session_id.clone();
    let recv_state = state.clone();

    // Spawn a task to receive messages from this session and route them
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!(session_id = %recv_session_id, "WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    let dto = match serde_json::from_str::<ChatMessageDto>(&text) {
                        Ok(dto) => dto,
                        Err(e) => {
                            tracing::warn!(
                                session_id = %recv_session_id,
                                "Failed to parse message as JSON: {}",
                                e
                            );
                            continue;
                        }
                    };

                    let deliveries =
                        route_message(&recv_state, dto.into(), recv_session_id.clone()).await;
                    dispatch_deliveries(&recv_state, deliveries).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!(session_id = %recv_session_id, "Session requested close");
                    break;
                }
                _ => {}
            }
        }
    });

    // Spawn a task to forward routed messages to this session's socket
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Drop the outbound channel, then deregister from the presence directory
    {
        let mut sessions = state.sessions.lock().await;
        sessions.remove(session_id.as_str());
    }
    let disconnect_usecase = DisconnectUseCase::new(state.directory.clone());
    disconnect_usecase.execute(&session_id).await;
    tracing::info!(session_id = %session_id, "Session disconnected");
}

/// Dispatch one inbound message to the router entry point selected by its
/// `type`: `JOIN` and `PRIVATE` have dedicated routes, everything else is
/// public chat.
async fn route_message(
    state: &Arc<AppState>,
    message: ChatMessage,
    session_id: SessionId,
) -> Vec<Delivery> {
    match message.kind {
        MessageType::Join => {
            let usecase = JoinRoomUseCase::new(state.directory.clone());
            vec![usecase.execute(message, session_id).await]
        }
        MessageType::Private => {
            let usecase = PrivateMessageUseCase::new(state.directory.clone());
            usecase.execute(message, session_id).await
        }
        _ => {
            let usecase = PublicMessageUseCase::new();
            vec![usecase.execute(message)]
        }
    }
}

/// Send routed deliveries out over the per-session channels.
///
/// A failed send to one session is logged and never affects the others.
async fn dispatch_deliveries(state: &Arc<AppState>, deliveries: Vec<Delivery>) {
    for delivery in deliveries {
        match delivery {
            Delivery::Broadcast(message) => {
                let json = match serde_json::to_string(&ChatMessageDto::from(message)) {
                    Ok(json) => json,
                    Err(e) => {
                        tracing::error!("Failed to serialize broadcast message: {}", e);
                        continue;
                    }
                };

                let sessions = state.sessions.lock().await;
                for (id, tx) in sessions.iter() {
                    if tx.send(json.clone()).is_err() {
                        tracing::warn!("Failed to send broadcast to session '{}'", id);
                    }
                }
            }
            Delivery::Targeted(target, message) => {
                let json = match serde_json::to_string(&ChatMessageDto::from(message)) {
                    Ok(json) => json,
                    Err(e) => {
                        tracing::error!("Failed to serialize targeted message: {}", e);
                        continue;
                    }
                };

                let sessions = state.sessions.lock().await;
                match sessions.get(target.as_str()) {
                    Some(tx) => {
                        if tx.send(json).is_err() {
                            tracing::warn!("Failed to send message to session '{}'", target);
                        }
                    }
                    None => {
                        tracing::warn!("No channel for target session '{}'", target);
                    }
                }
            }
        }
    }
}
