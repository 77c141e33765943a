//! Hanashi chat relay server library.
//!
//! Clients join a shared room over WebSocket, broadcast public messages, and
//! exchange private messages addressed by username. The core of the crate is
//! the presence directory (session ↔ username mapping) and the message
//! routing rules; the WebSocket/HTTP plumbing around them is deliberately
//! thin.

pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry point
pub use ui::run_server;
