//! HTTP API response DTOs for the chat relay.

use serde::{Deserialize, Serialize};

/// Online users for the diagnostic presence endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnlineUsersDto {
    pub users: Vec<String>,
}
