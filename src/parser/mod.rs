//! Backtracking text parsing for network addresses and endpoints.
//!
//! This module handles all textual input:
//! - [`cursor`](self::Cursor) - position-indexed cursor with exact rollback
//! - [`readers`] - primitive token readers (address literals, prefix
//!   lengths, ports, hostnames, services)
//! - network-address grammar per family plus the v6-then-v4 dispatch
//! - the composed endpoint grammar

mod cursor;
mod endpoint;
mod error;
pub mod readers;
mod network;

// Re-export public types and functions
pub use cursor::Cursor;
pub use endpoint::{read_endpoint, Endpoint};
pub use error::ParseError;
pub use network::{read_ip_network_address, read_network_address};
