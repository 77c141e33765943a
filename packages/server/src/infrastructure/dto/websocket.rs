//! WebSocket message DTOs for the chat relay.
//!
//! One wire shape covers every inbound and outbound message. The `type`
//! field doubles as the routing key on the way in: `JOIN` and `PRIVATE`
//! select their routes, everything else (or a missing `type`) is treated as
//! public chat.

use serde::{Deserialize, Serialize};

use crate::domain::{ChatMessage, MessageType};

/// Chat message as sent and received on the WebSocket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessageDto {
    #[serde(default)]
    pub r#type: MessageType,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub receiver: Option<String>,
    #[serde(default)]
    pub content: String,
}

impl From<ChatMessageDto> for ChatMessage {
    fn from(dto: ChatMessageDto) -> Self {
        ChatMessage::new(
            dto.sender.unwrap_or_default(),
            dto.receiver,
            dto.r#type,
            dto.content,
        )
    }
}

impl From<ChatMessage> for ChatMessageDto {
    fn from(message: ChatMessage) -> Self {
        ChatMessageDto {
            r#type: message.kind,
            sender: Some(message.sender),
            receiver: message.receiver,
            content: message.content,
        }
    }
}
