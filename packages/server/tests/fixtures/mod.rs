//! Integration test fixtures.

use std::time::Duration;

/// Test server running the real axum application on a local port.
///
/// Each test uses its own port so the tests can run in parallel.
pub struct TestServer {
    port: u16,
}

impl TestServer {
    /// Spawn the server in the background and wait until it accepts
    /// connections.
    pub async fn start(port: u16) -> Self {
        tokio::spawn(async move {
            if let Err(e) = hanashi_server::run_server("127.0.0.1", port).await {
                panic!("Test server failed to start on port {port}: {e}");
            }
        });

        // Wait for the listener to come up
        for _ in 0..50 {
            if tokio::net::TcpStream::connect(("127.0.0.1", port)).await.is_ok() {
                return Self { port };
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        panic!("Test server on port {port} did not become ready");
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://127.0.0.1:{}/ws", self.port)
    }
}
