//! WebSocket chat relay server.
//!
//! Clients join a shared room, broadcast public messages, and exchange
//! private messages addressed by username.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hanashi-server
//! ```

use clap::Parser;

use hanashi_shared::logger::setup_logger;

#[derive(Debug, Parser)]
#[command(name = "hanashi-server", about = "Hanashi chat relay server")]
struct Args {
    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Default log level for the server target
    #[arg(long, default_value = "debug")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // Run the server
    if let Err(e) = hanashi_server::run_server(&args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
