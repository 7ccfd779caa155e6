//! Metadata server interaction.

mod client;

// Re-export public types and functions
pub use client::{get_server_information, ServerInfo};
