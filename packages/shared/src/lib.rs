//! Shared utilities for the Hanashi chat relay.

pub mod logger;
