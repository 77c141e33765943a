//! Data transfer objects for the wire boundary.

pub mod http;
pub mod websocket;
