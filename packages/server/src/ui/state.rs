//! Server state and connection management.

use std::{collections::HashMap, sync::Arc};
use tokio::sync::{Mutex, mpsc};

use crate::domain::PresenceDirectory;

/// Shared application state
pub struct AppState {
    /// Presence directory consulted and mutated by the message router
    pub directory: Arc<dyn PresenceDirectory>,
    /// Outbound channel per connected session, keyed by session id.
    /// Every connected socket has an entry here, joined or not; unjoined
    /// sessions still receive public broadcasts.
    pub sessions: Mutex<HashMap<String, mpsc::UnboundedSender<String>>>,
}

impl AppState {
    /// Create a new AppState around a presence directory
    pub fn new(directory: Arc<dyn PresenceDirectory>) -> Self {
        Self {
            directory,
            sessions: Mutex::new(HashMap::new()),
        }
    }
}
