//! UseCase 層
//!
//! メッセージルーティングのビジネスロジックを実装するレイヤー。
//! UI 層（トランスポート）から呼び出され、Domain 層（Presence Directory）を
//! 操作します。inbound イベント 1 種類につき 1 つのユースケースがあります。

pub mod disconnect;
pub mod error;
pub mod join_room;
pub mod private_message;
pub mod public_message;

pub use disconnect::DisconnectUseCase;
pub use error::RouteError;
pub use join_room::JoinRoomUseCase;
pub use private_message::PrivateMessageUseCase;
pub use public_message::PublicMessageUseCase;
