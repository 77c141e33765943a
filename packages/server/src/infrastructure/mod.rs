//! Infrastructure layer: wire DTOs and concrete presence directory storage.

pub mod directory;
pub mod dto;

pub use directory::InMemoryPresenceDirectory;
