//! Domain layer for the chat relay.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod directory;
pub mod entity;
pub mod error;
pub mod value_object;

pub use directory::PresenceDirectory;
pub use entity::{ChatMessage, Delivery, MessageType, SERVER_SENDER};
pub use error::ValueObjectError;
pub use value_object::{SessionId, UserName};
