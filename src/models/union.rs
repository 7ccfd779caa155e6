//! Family-tagged IP network address.
//!
//! [`IpNetworkAddress`] is the closed union over the IPv4 and IPv6
//! instantiations of [`NetworkAddress`](super::NetworkAddress), produced
//! by the family-dispatching parser and consumed by access-control style
//! callers.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use super::{Ipv4NetworkAddress, Ipv6NetworkAddress};
use crate::parser::{read_ip_network_address, Cursor, ParseError};

/// An IP network address of either family.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub enum IpNetworkAddress {
    /// An IPv4 network.
    V4(Ipv4NetworkAddress),
    /// An IPv6 network.
    V6(Ipv6NetworkAddress),
}

impl IpNetworkAddress {
    /// The prefix length of the inner network.
    pub fn prefix_length(&self) -> u8 {
        match self {
            IpNetworkAddress::V4(net) => net.prefix_length(),
            IpNetworkAddress::V6(net) => net.prefix_length(),
        }
    }

    /// The inner address, family-erased.
    pub fn address(&self) -> IpAddr {
        match self {
            IpNetworkAddress::V4(net) => IpAddr::V4(net.address()),
            IpNetworkAddress::V6(net) => IpAddr::V6(net.address()),
        }
    }

    /// Check if `addr` belongs to this network.
    ///
    /// An address of the other family never belongs, whatever the prefix
    /// length; there is no v4-mapped-v6 translation.
    pub fn has_address(&self, addr: IpAddr) -> bool {
        match (self, addr) {
            (IpNetworkAddress::V4(net), IpAddr::V4(addr)) => net.has_address(addr),
            (IpNetworkAddress::V6(net), IpAddr::V6(addr)) => net.has_address(addr),
            _ => false,
        }
    }
}

/// Check if `addr` belongs to any network in `networks`.
///
/// Short-circuits on the first match; with an ordered collection this
/// makes the first (most preferred) matching network the deciding one.
pub fn any_has_address<'a, I>(networks: I, addr: IpAddr) -> bool
where
    I: IntoIterator<Item = &'a IpNetworkAddress>,
{
    networks.into_iter().any(|net| net.has_address(addr))
}

impl From<Ipv4NetworkAddress> for IpNetworkAddress {
    fn from(net: Ipv4NetworkAddress) -> Self {
        IpNetworkAddress::V4(net)
    }
}

impl From<Ipv6NetworkAddress> for IpNetworkAddress {
    fn from(net: Ipv6NetworkAddress) -> Self {
        IpNetworkAddress::V6(net)
    }
}

impl fmt::Display for IpNetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IpNetworkAddress::V4(net) => write!(f, "{net}"),
            IpNetworkAddress::V6(net) => write!(f, "{net}"),
        }
    }
}

impl FromStr for IpNetworkAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cursor = Cursor::new(s.trim());
        let value = read_ip_network_address(&mut cursor)?;
        if !cursor.at_end() {
            return Err(ParseError::TrailingInput);
        }
        Ok(value)
    }
}

impl Serialize for IpNetworkAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for IpNetworkAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| de::Error::custom(format!("invalid CIDR {:?}: {}", s, e)))
    }
}
