//! UseCase: セッション切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectUseCase::execute() メソッド
//! - トランスポートの切断通知に伴う Presence Directory からの削除
//!
//! ### なぜこのテストが必要か
//! - 切断後、そのユーザー名がプライベートメッセージの宛先として
//!   解決されなくなることを保証（死んだセッションへの無言の不達を防ぐ）
//!
//! ### どのような状況を想定しているか
//! - 正常系：join 済みセッションの切断
//! - エッジケース：join せずに切断したセッション

use std::sync::Arc;

use crate::domain::{PresenceDirectory, SessionId, UserName};

/// セッション切断のユースケース
///
/// 切断したセッションのエントリを directory から削除します。退室の
/// ブロードキャストは行いません（観測された挙動には退室通知が存在しない）。
pub struct DisconnectUseCase {
    /// Presence Directory（セッション ↔ ユーザー名の双方向マッピング）
    directory: Arc<dyn PresenceDirectory>,
}

impl DisconnectUseCase {
    /// 新しい DisconnectUseCase を作成
    pub fn new(directory: Arc<dyn PresenceDirectory>) -> Self {
        Self { directory }
    }

    /// セッション切断を実行
    ///
    /// # Arguments
    ///
    /// * `session_id` - 切断したセッションの ID
    ///
    /// # Returns
    ///
    /// 削除されたユーザー名（join していなかった場合は None）
    pub async fn execute(&self, session_id: &SessionId) -> Option<UserName> {
        match self.directory.deregister(session_id).await {
            Some(user) => {
                tracing::info!(user = %user, session_id = %session_id, "User left the chat");
                Some(user)
            }
            None => {
                tracing::debug!(session_id = %session_id, "Unjoined session disconnected");
                None
            }
        }
    }
}
