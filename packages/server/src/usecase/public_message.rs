//! UseCase: 公開メッセージ処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - PublicMessageUseCase::execute() メソッド
//! - 公開メッセージの素通し（pass-through）ブロードキャスト
//!
//! ### なぜこのテストが必要か
//! - 公開経路は意図的に無検証・無副作用であることを保証する
//! - メッセージの内容が一切変更されないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：任意のメッセージがそのままブロードキャストされる
//! - エッジケース：type 未指定（CHAT 扱い）や LEAVE / SYSTEM / ACTION の素通し

use crate::domain::{ChatMessage, Delivery};

/// 公開メッセージのユースケース
///
/// 素通しの経路。検証も副作用もなく、受け取ったメッセージをそのまま全購読者
/// へのブロードキャストとして返します。寛容な設計は意図的なものです。
pub struct PublicMessageUseCase;

impl PublicMessageUseCase {
    /// 新しい PublicMessageUseCase を作成
    pub fn new() -> Self {
        Self
    }

    /// 公開メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `message` - 受信したメッセージ（Domain Model）
    ///
    /// # Returns
    ///
    /// 受け取ったメッセージをそのまま含むブロードキャスト
    pub fn execute(&self, message: ChatMessage) -> Delivery {
        Delivery::Broadcast(message)
    }
}

impl Default for PublicMessageUseCase {
    fn default() -> Self {
        Self::new()
    }
}
