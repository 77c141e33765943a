//! Core domain models for the chat relay.

use serde::{Deserialize, Serialize};

use super::value_object::SessionId;

/// Reserved sender name for system-generated messages
pub const SERVER_SENDER: &str = "SERVER";

/// Kind of a chat message.
///
/// `Chat` is the default for messages that carry no explicit type. `Private`
/// selects the point-to-point route; `Leave`, `System` and `Action` are
/// client-side presentation kinds that ride the public broadcast unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageType {
    #[default]
    Chat,
    Join,
    Private,
    Leave,
    System,
    Action,
    Error,
}

/// Represents a chat message exchanged between clients.
///
/// Immutable value object. `receiver` is required for private messages and
/// ignored everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Sender's display name, or [`SERVER_SENDER`] for system messages
    pub sender: String,
    /// Receiver's display name (private messages only)
    pub receiver: Option<String>,
    /// Message kind
    pub kind: MessageType,
    /// Free-text body
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    pub fn new(
        sender: String,
        receiver: Option<String>,
        kind: MessageType,
        content: String,
    ) -> Self {
        Self {
            sender,
            receiver,
            kind,
            content,
        }
    }

    /// Create a system-generated message from the reserved `"SERVER"` sender
    pub fn from_server(kind: MessageType, content: String) -> Self {
        Self {
            sender: SERVER_SENDER.to_string(),
            receiver: None,
            kind,
            content,
        }
    }
}

/// Outbound delivery produced by the message router.
///
/// The transport layer interprets this: `Broadcast` goes to every connected
/// session's channel, `Targeted` to exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Deliver to every subscriber of the public channel
    Broadcast(ChatMessage),
    /// Deliver to exactly one session's private channel
    Targeted(SessionId, ChatMessage),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_from_server() {
        // テスト項目: SERVER 送信者のシステムメッセージを作成できる
        // when (操作):
        let message =
            ChatMessage::from_server(MessageType::Join, "alice joined the chat".to_string());

        // then (期待する結果):
        assert_eq!(message.sender, SERVER_SENDER);
        assert_eq!(message.receiver, None);
        assert_eq!(message.kind, MessageType::Join);
        assert_eq!(message.content, "alice joined the chat");
    }

    #[test]
    fn test_message_type_default_is_chat() {
        // テスト項目: 型が未指定のメッセージは CHAT として扱われる
        // then (期待する結果):
        assert_eq!(MessageType::default(), MessageType::Chat);
    }
}
