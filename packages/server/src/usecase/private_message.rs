//! UseCase: プライベートメッセージ処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - PrivateMessageUseCase::execute() メソッド
//! - 検証順序（receiver 未指定 → 宛先不明 → 自分宛て）と配送先の決定
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：成功時は送信者へのエコーと宛先への配送の 2 件
//! - 各検証が正確にこの順序で評価され、最初の失敗で打ち切られることを保証
//! - エラー抑制ポリシー（join していないセッションへのエラーは破棄）を確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：alice → bob のラウンドトリップ
//! - 異常系：receiver 未指定、未登録の宛先、自分宛て送信
//! - エッジケース：join していない送信者へのエラー抑制、
//!   directory の不整合（解決済みセッションが unknown）

use std::sync::Arc;

use crate::domain::{ChatMessage, Delivery, MessageType, PresenceDirectory, SessionId, UserName};

use super::error::RouteError;

/// プライベートメッセージのユースケース
pub struct PrivateMessageUseCase {
    /// Presence Directory（セッション ↔ ユーザー名の双方向マッピング）
    directory: Arc<dyn PresenceDirectory>,
}

impl PrivateMessageUseCase {
    /// 新しい PrivateMessageUseCase を作成
    pub fn new(directory: Arc<dyn PresenceDirectory>) -> Self {
        Self { directory }
    }

    /// プライベートメッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `message` - 受信したメッセージ（receiver が宛先ユーザー名）
    /// * `sender_session` - 送信元セッションの ID
    ///
    /// # Returns
    ///
    /// Targeted 配送のリスト。成功時は送信者自身へのエコーと宛先への配送の
    /// 2 件、検証失敗時は送信者への ERROR メッセージ 1 件（送信者が join
    /// していない場合は 0 件）。
    pub async fn execute(&self, message: ChatMessage, sender_session: SessionId) -> Vec<Delivery> {
        let receiver = match UserName::new(message.receiver.clone().unwrap_or_default()) {
            Ok(receiver) => receiver,
            Err(_) => {
                return self
                    .error_delivery(sender_session, RouteError::ReceiverNotSpecified)
                    .await;
            }
        };

        let receiver_session = match self.directory.session_by_user(&receiver).await {
            Some(session) => session,
            None => {
                return self
                    .error_delivery(sender_session, RouteError::ReceiverNotFound)
                    .await;
            }
        };

        if !self.directory.is_known_session(&receiver_session).await {
            return self
                .error_delivery(sender_session, RouteError::ReceiverNotFound)
                .await;
        }

        if receiver_session == sender_session {
            return self
                .error_delivery(sender_session, RouteError::SelfMessage)
                .await;
        }

        tracing::info!(
            sender = %message.sender,
            receiver = %receiver,
            "Routing private message"
        );

        // Echo to the sender's own session plus delivery to the peer, so the
        // sender's client can render the sent message without appending it
        // locally.
        vec![
            Delivery::Targeted(sender_session, message.clone()),
            Delivery::Targeted(receiver_session, message),
        ]
    }

    /// エラーを送信者セッションへの Targeted 配送として返す。
    ///
    /// join が完了していないセッションにはエラーを配送しない（ログに残して
    /// 破棄する）。
    async fn error_delivery(&self, session: SessionId, error: RouteError) -> Vec<Delivery> {
        if !self.directory.is_known_session(&session).await {
            tracing::warn!(
                session_id = %session,
                error = %error,
                "Dropping error for session that never joined"
            );
            return Vec::new();
        }

        tracing::info!(session_id = %session, error = %error, "Routing error to sender");
        vec![Delivery::Targeted(
            session,
            ChatMessage::from_server(MessageType::Error, error.to_string()),
        )]
    }
}
