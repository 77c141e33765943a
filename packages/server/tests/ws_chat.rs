//! WebSocket routing integration tests.
//!
//! End-to-end tests over real sockets: join broadcasts, public chat,
//! private message round trips and the targeted error paths.

mod fixtures;
use fixtures::TestServer;

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

async fn connect(server: &TestServer) -> Socket {
    let (socket, _) = connect_async(server.ws_url())
        .await
        .expect("Failed to connect WebSocket");
    socket
}

async fn send_json(socket: &mut Socket, json: &str) {
    socket
        .send(Message::Text(json.into()))
        .await
        .expect("Failed to send message");
}

async fn recv_json(socket: &mut Socket) -> Value {
    let msg = timeout(Duration::from_secs(5), socket.next())
        .await
        .expect("Timed out waiting for message")
        .expect("Socket closed")
        .expect("WebSocket error");
    serde_json::from_str(msg.to_text().expect("Non-text message")).expect("Failed to parse JSON")
}

async fn join(socket: &mut Socket, name: &str) {
    send_json(
        socket,
        &format!(r#"{{"type":"JOIN","sender":"{name}","content":""}}"#),
    )
    .await;
}

#[tokio::test]
async fn test_join_broadcasts_server_message() {
    // テスト項目: join すると SERVER からの JOIN ブロードキャストが届く
    // given (前提条件):
    let server = TestServer::start(19090).await;
    let mut alice = connect(&server).await;

    // when (操作):
    join(&mut alice, "alice").await;

    // then (期待する結果):
    let msg = recv_json(&mut alice).await;
    assert_eq!(msg["type"], "JOIN");
    assert_eq!(msg["sender"], "SERVER");
    assert_eq!(msg["content"], "alice joined the chat");
}

#[tokio::test]
async fn test_join_with_blank_username_rejected() {
    // テスト項目: 空白のみのユーザー名での join は ERROR ブロードキャストになる
    // given (前提条件):
    let server = TestServer::start(19091).await;
    let mut socket = connect(&server).await;

    // when (操作):
    send_json(&mut socket, r#"{"type":"JOIN","sender":"   ","content":""}"#).await;

    // then (期待する結果):
    let msg = recv_json(&mut socket).await;
    assert_eq!(msg["type"], "ERROR");
    assert_eq!(msg["sender"], "SERVER");
    assert_eq!(msg["content"], "username must not be empty");
}

#[tokio::test]
async fn test_public_message_reaches_unjoined_session() {
    // テスト項目: 公開メッセージは join していないセッションにも届き、
    //             内容は変更されない
    // given (前提条件): alice は join 済み、lurker は接続のみ
    let server = TestServer::start(19092).await;
    let mut alice = connect(&server).await;
    let mut lurker = connect(&server).await;
    join(&mut alice, "alice").await;
    recv_json(&mut alice).await; // alice の JOIN ブロードキャスト
    recv_json(&mut lurker).await; // lurker にも JOIN ブロードキャストが届く

    // when (操作):
    send_json(
        &mut alice,
        r#"{"type":"CHAT","sender":"alice","content":"hello everyone"}"#,
    )
    .await;

    // then (期待する結果): 両方のセッションに同じ内容が届く
    for socket in [&mut alice, &mut lurker] {
        let msg = recv_json(socket).await;
        assert_eq!(msg["type"], "CHAT");
        assert_eq!(msg["sender"], "alice");
        assert_eq!(msg["content"], "hello everyone");
    }
}

#[tokio::test]
async fn test_private_message_round_trip() {
    // テスト項目: alice → bob のプライベートメッセージは送信者へのエコーと
    //             宛先への配送の 2 件になる
    // given (前提条件):
    let server = TestServer::start(19093).await;
    let mut alice = connect(&server).await;
    join(&mut alice, "alice").await;
    recv_json(&mut alice).await; // alice の JOIN

    let mut bob = connect(&server).await;
    join(&mut bob, "bob").await;
    recv_json(&mut bob).await; // bob の JOIN
    recv_json(&mut alice).await; // alice にも bob の JOIN が届く

    // when (操作):
    send_json(
        &mut alice,
        r#"{"type":"PRIVATE","sender":"alice","receiver":"bob","content":"hi"}"#,
    )
    .await;

    // then (期待する結果):
    let echo = recv_json(&mut alice).await;
    assert_eq!(echo["type"], "PRIVATE");
    assert_eq!(echo["sender"], "alice");
    assert_eq!(echo["receiver"], "bob");
    assert_eq!(echo["content"], "hi");

    let delivered = recv_json(&mut bob).await;
    assert_eq!(delivered, echo);
}

#[tokio::test]
async fn test_private_message_to_self_rejected() {
    // テスト項目: 自分宛てのプライベートメッセージは ERROR になる
    // given (前提条件):
    let server = TestServer::start(19094).await;
    let mut alice = connect(&server).await;
    join(&mut alice, "alice").await;
    recv_json(&mut alice).await; // alice の JOIN

    // when (操作):
    send_json(
        &mut alice,
        r#"{"type":"PRIVATE","sender":"alice","receiver":"alice","content":"hi"}"#,
    )
    .await;

    // then (期待する結果):
    let msg = recv_json(&mut alice).await;
    assert_eq!(msg["type"], "ERROR");
    assert_eq!(msg["sender"], "SERVER");
    assert_eq!(msg["content"], "cannot send messages to yourself");
}

#[tokio::test]
async fn test_private_message_to_unknown_receiver() {
    // テスト項目: 未登録の宛先へのプライベートメッセージは ERROR になる
    // given (前提条件):
    let server = TestServer::start(19095).await;
    let mut alice = connect(&server).await;
    join(&mut alice, "alice").await;
    recv_json(&mut alice).await; // alice の JOIN

    // when (操作):
    send_json(
        &mut alice,
        r#"{"type":"PRIVATE","sender":"alice","receiver":"carol","content":"hi"}"#,
    )
    .await;

    // then (期待する結果):
    let msg = recv_json(&mut alice).await;
    assert_eq!(msg["type"], "ERROR");
    assert_eq!(msg["content"], "receiver session not found");
}

#[tokio::test]
async fn test_error_suppressed_for_unjoined_sender() {
    // テスト項目: join していないセッションからのプライベートメッセージには
    //             エラーすら返らない（エラー抑制ポリシー）
    // given (前提条件): ghost は接続のみで join していない
    let server = TestServer::start(19096).await;
    let mut ghost = connect(&server).await;

    // when (操作):
    send_json(
        &mut ghost,
        r#"{"type":"PRIVATE","sender":"ghost","receiver":"carol","content":"hi"}"#,
    )
    .await;

    // then (期待する結果): 何も届かない
    let result = timeout(Duration::from_millis(500), ghost.next()).await;
    assert!(result.is_err(), "Expected no message for unjoined sender");
}
