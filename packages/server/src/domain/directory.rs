//! Presence directory abstraction.
//!
//! The directory is the bidirectional session ↔ username mapping consulted by
//! the message router. The trait lives in the domain layer; concrete storage
//! lives in the infrastructure layer (dependency inversion).

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::value_object::{SessionId, UserName};

/// Bidirectional session ↔ username mapping.
///
/// Invariants:
/// - Both directions are updated atomically: a concurrent reader never
///   observes only one direction of a `register` or `deregister`.
/// - A session maps to at most one user and a user to at most one session;
///   the most recent `register` wins on conflict, and the superseded reverse
///   entries are removed.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PresenceDirectory: Send + Sync {
    /// Insert or overwrite the mapping for `session` ↔ `user`.
    ///
    /// Always succeeds. On overwrite (same session rejoining under a new
    /// name, or a name rejoining from a new session) the stale entries are
    /// dropped so the mapping stays a bijection.
    async fn register(&self, session: SessionId, user: UserName);

    /// Resolve the user name registered for a session, if any.
    async fn user_by_session(&self, session: &SessionId) -> Option<UserName>;

    /// Resolve the session a user name is currently registered from, if any.
    async fn session_by_user(&self, user: &UserName) -> Option<SessionId>;

    /// True iff a join has been registered for this session and not
    /// superseded. Sessions that never joined are unknown.
    async fn is_known_session(&self, session: &SessionId) -> bool;

    /// Remove the mapping for a session, returning the user name that was
    /// registered, if any. Wired to the transport's disconnect notification.
    async fn deregister(&self, session: &SessionId) -> Option<UserName>;

    /// All currently joined user names, sorted for consistent ordering.
    async fn online_users(&self) -> Vec<UserName>;
}
