//! UseCase: join 処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - join イベントの検証、Presence Directory への登録、JOIN ブロードキャスト生成
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：空のユーザー名では登録されない
//! - 登録後に session_by_user が join したセッションを返すことを保証
//! - 再 join（名前変更・名前衝突）の last-write-wins を確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：有効な名前での join と JOIN ブロードキャスト
//! - 異常系：空白のみのユーザー名（ERROR メッセージ、登録なし）
//! - エッジケース：同一セッションの再 join、同一名の別セッションからの join

use std::sync::Arc;

use crate::domain::{ChatMessage, Delivery, MessageType, PresenceDirectory, SessionId, UserName};

use super::error::RouteError;

/// join イベントのユースケース
pub struct JoinRoomUseCase {
    /// Presence Directory（セッション ↔ ユーザー名の双方向マッピング）
    directory: Arc<dyn PresenceDirectory>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(directory: Arc<dyn PresenceDirectory>) -> Self {
        Self { directory }
    }

    /// join を実行
    ///
    /// # Arguments
    ///
    /// * `message` - 受信した join メッセージ（sender がユーザー名）
    /// * `session_id` - join を要求したセッションの ID
    ///
    /// # Returns
    ///
    /// 公開チャンネルへブロードキャストするメッセージ。検証成功時は
    /// `"SERVER"` からの JOIN メッセージ、失敗時は `"SERVER"` からの
    /// ERROR メッセージ（登録は行われない）。
    pub async fn execute(&self, message: ChatMessage, session_id: SessionId) -> Delivery {
        let user = match UserName::new(message.sender) {
            Ok(user) => user,
            Err(_) => {
                tracing::warn!(session_id = %session_id, "Join rejected: username is empty");
                return Delivery::Broadcast(ChatMessage::from_server(
                    MessageType::Error,
                    RouteError::EmptyUsername.to_string(),
                ));
            }
        };

        self.directory.register(session_id.clone(), user.clone()).await;
        tracing::info!(user = %user, session_id = %session_id, "User joined the chat");

        Delivery::Broadcast(ChatMessage::from_server(
            MessageType::Join,
            format!("{user} joined the chat"),
        ))
    }
}
