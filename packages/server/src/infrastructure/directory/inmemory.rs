//! InMemory Presence Directory 実装
//!
//! ドメイン層が定義する PresenceDirectory trait の具体的な実装。
//! 2 つの HashMap（session → user / user → session）をインメモリ DB として
//! 使用します。両方向の整合性を保証するため、単一の Mutex の内側に両方の
//! マップを置いています。register / deregister の途中状態（片方向だけ更新
//! された状態）は外部から観測できません。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{PresenceDirectory, SessionId, UserName};

/// Both directions live under one lock so that updates are atomic.
#[derive(Default)]
struct DirectoryInner {
    session_to_user: HashMap<String, String>,
    user_to_session: HashMap<String, String>,
}

/// インメモリ Presence Directory 実装
///
/// 単一の tokio Mutex で保護された双方向マップ。
pub struct InMemoryPresenceDirectory {
    inner: Mutex<DirectoryInner>,
}

impl InMemoryPresenceDirectory {
    /// 新しい InMemoryPresenceDirectory を作成
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(DirectoryInner::default()),
        }
    }
}

impl Default for InMemoryPresenceDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PresenceDirectory for InMemoryPresenceDirectory {
    async fn register(&self, session: SessionId, user: UserName) {
        let mut inner = self.inner.lock().await;

        // Drop the stale reverse entries before inserting, so the mapping
        // stays a bijection after an overwrite.
        if let Some(previous_user) = inner.session_to_user.get(session.as_str()).cloned() {
            inner.user_to_session.remove(&previous_user);
        }
        if let Some(previous_session) = inner.user_to_session.get(user.as_str()).cloned() {
            inner.session_to_user.remove(&previous_session);
        }

        inner
            .session_to_user
            .insert(session.as_str().to_string(), user.as_str().to_string());
        inner
            .user_to_session
            .insert(user.into_string(), session.into_string());
    }

    async fn user_by_session(&self, session: &SessionId) -> Option<UserName> {
        let inner = self.inner.lock().await;
        inner
            .session_to_user
            .get(session.as_str())
            .cloned()
            .and_then(|name| UserName::new(name).ok())
    }

    async fn session_by_user(&self, user: &UserName) -> Option<SessionId> {
        let inner = self.inner.lock().await;
        inner
            .user_to_session
            .get(user.as_str())
            .cloned()
            .and_then(|id| SessionId::new(id).ok())
    }

    async fn is_known_session(&self, session: &SessionId) -> bool {
        let inner = self.inner.lock().await;
        inner.session_to_user.contains_key(session.as_str())
    }

    async fn deregister(&self, session: &SessionId) -> Option<UserName> {
        let mut inner = self.inner.lock().await;
        let user = inner.session_to_user.remove(session.as_str())?;

        // Only remove the reverse entry if it still points at this session;
        // a rejoin from another session may have overwritten it.
        if inner.user_to_session.get(&user).map(String::as_str) == Some(session.as_str()) {
            inner.user_to_session.remove(&user);
        }

        UserName::new(user).ok()
    }

    async fn online_users(&self) -> Vec<UserName> {
        let inner = self.inner.lock().await;
        let mut users: Vec<String> = inner.user_to_session.keys().cloned().collect();
        users.sort();
        users
            .into_iter()
            .filter_map(|name| UserName::new(name).ok())
            .collect()
    }
}
