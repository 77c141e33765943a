//! UseCase layer error definitions.
//!
//! Every routing failure is non-fatal and user-facing: the `Display` string
//! of each variant is exactly the content of the targeted `ERROR` message
//! sent back to the offending session. None of these propagate to the
//! transport layer as errors.

use thiserror::Error;

/// Errors produced by the message router
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Join attempted with a blank/missing sender name
    #[error("username must not be empty")]
    EmptyUsername,

    /// Private message with a blank/missing receiver
    #[error("receiver not specified")]
    ReceiverNotSpecified,

    /// Receiver name has no currently registered session
    #[error("receiver session not found")]
    ReceiverNotFound,

    /// Resolved receiver session equals the sender session
    #[error("cannot send messages to yourself")]
    SelfMessage,
}
