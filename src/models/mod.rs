//! Domain models for IP network ACL checks.
//!
//! This module contains the core value types used throughout the crate:
//! - [`NetworkAddress`] - generic address + prefix-length value
//! - [`IpNetworkAddress`] - the family-tagged union over v4/v6
//! - [`Address`] - the address-family abstraction

mod family;
mod network;
mod union;

// Re-export public types
pub use family::Address;
pub use network::{Ipv4NetworkAddress, Ipv6NetworkAddress, NetworkAddress};
pub use union::{any_has_address, IpNetworkAddress};
