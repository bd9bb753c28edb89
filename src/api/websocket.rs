//! WebSocket push of session changes
//!
//! Every connected page receives each session transition so it can refresh
//! its navigation and content.

use axum::{
    extract::{ws::*, State},
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::server::SharedState;
use crate::auth::SessionEvent;

/// Messages from client to server
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(tag = "type", rename_all = "PascalCase")]
pub enum ClientMessage {
    /// Keep-alive ping
    Ping,
}

/// Messages from server to client
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ServerMessage {
    Session(SessionEvent),
    Control(ControlMessage),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "PascalCase")]
pub enum ControlMessage {
    /// Response to Ping
    Pong,
    /// Events were dropped because the client fell behind
    Lagged { skipped: u64 },
    /// Error message
    Error { message: String },
}

/// Handle WebSocket upgrade requests
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<SharedState>,
) -> impl IntoResponse {
    let events = state.read().await.session.subscribe();
    ws.on_upgrade(|socket| handle_socket(socket, events))
}

/// Handle individual WebSocket connections
async fn handle_socket(socket: WebSocket, mut events: broadcast::Receiver<SessionEvent>) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = tokio::sync::mpsc::channel::<ServerMessage>(32);

    // Forward session events and replies to the client
    let sender_task = tokio::spawn(async move {
        loop {
            let msg = tokio::select! {
                event = events.recv() => match event {
                    Ok(event) => ServerMessage::Session(event),
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        ServerMessage::Control(ControlMessage::Lagged { skipped })
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                },
                reply = rx.recv() => match reply {
                    Some(reply) => reply,
                    None => break,
                },
            };

            let Ok(json) = serde_json::to_string(&msg) else {
                continue;
            };
            if sender.send(Message::Text(json.into())).await.is_err() {
                break;
            }
        }
    });

    // Handle incoming messages from client
    while let Some(Ok(msg)) = receiver.next().await {
        match msg {
            Message::Text(text) => {
                let reply = match serde_json::from_str::<ClientMessage>(text.as_str()) {
                    Ok(ClientMessage::Ping) => ControlMessage::Pong,
                    Err(e) => ControlMessage::Error {
                        message: format!("Invalid message: {}", e),
                    },
                };
                if tx.send(ServerMessage::Control(reply)).await.is_err() {
                    break;
                }
            }
            Message::Close(_) => break,
            _ => {}
        }
    }

    sender_task.abort();
}
