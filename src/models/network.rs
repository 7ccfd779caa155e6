//! Network address value type (address + prefix length, CIDR style).
//!
//! Provides [`NetworkAddress`] and its two concrete instantiations
//! [`Ipv4NetworkAddress`] and [`Ipv6NetworkAddress`], along with the
//! bit-mask containment test that routing/ACL decisions are built on.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use super::Address;
use crate::parser::{read_network_address, Cursor, ParseError};

/// An IP network in CIDR form: an address plus a prefix length.
///
/// Host bits beyond the prefix length are kept as given — there is no
/// normalization at construction. Two values with the same network bits
/// but different host bits are therefore *not* equal, and the prefix
/// length is part of identity: a /24 and a /25 of the same address are
/// distinct values.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct NetworkAddress<A: Address> {
    address: A,
    prefix_length: u8,
}

/// The IPv4 instantiation.
pub type Ipv4NetworkAddress = NetworkAddress<Ipv4Addr>;

/// The IPv6 instantiation.
pub type Ipv6NetworkAddress = NetworkAddress<Ipv6Addr>;

impl<A: Address> NetworkAddress<A> {
    /// Create a network address, rejecting prefix lengths beyond the
    /// family's bit width (32 for IPv4, 128 for IPv6).
    pub fn new(address: A, prefix_length: u8) -> Result<Self, ParseError> {
        if prefix_length > A::BIT_LEN {
            return Err(ParseError::OutOfRangePrefixLength { max: A::BIT_LEN });
        }
        Ok(NetworkAddress {
            address,
            prefix_length,
        })
    }

    /// The null network address: unspecified address, prefix length 0.
    pub fn null() -> Self {
        NetworkAddress {
            address: A::UNSPECIFIED,
            prefix_length: 0,
        }
    }

    /// Check if this instance is the null network address.
    pub fn is_null(&self) -> bool {
        *self == Self::null()
    }

    /// The address, including any host bits beyond the prefix length.
    pub fn address(&self) -> A {
        self.address
    }

    /// The prefix length.
    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }

    /// Check if `addr` belongs to this network.
    ///
    /// Compares the leading `prefix_length` bits of both addresses:
    /// whole bytes first (short-circuiting on the first mismatch), then
    /// the top bits of the one partial byte, if any. A prefix length of
    /// 0 matches every address of the family.
    pub fn has_address(&self, addr: A) -> bool {
        let network_bytes = self.address.octets();
        let addr_bytes = addr.octets();

        let mut prefix_len = self.prefix_length;

        for (network_byte, addr_byte) in
            network_bytes.as_ref().iter().zip(addr_bytes.as_ref())
        {
            if prefix_len >= 8 {
                if network_byte != addr_byte {
                    return false;
                }
                prefix_len -= 8;
            } else {
                let mask = (0xFFu8 >> prefix_len) ^ 0xFF;
                if (network_byte & mask) != (addr_byte & mask) {
                    return false;
                }
                break;
            }
        }

        true
    }
}

impl<A: Address> Default for NetworkAddress<A> {
    fn default() -> Self {
        Self::null()
    }
}

impl<A: Address> PartialEq for NetworkAddress<A> {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address && self.prefix_length == other.prefix_length
    }
}

impl<A: Address> PartialOrd for NetworkAddress<A> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<A: Address> fmt::Display for NetworkAddress<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_length)
    }
}

impl<A: Address> FromStr for NetworkAddress<A> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cursor = Cursor::new(s.trim());
        let value = read_network_address::<A>(&mut cursor)?;
        if !cursor.at_end() {
            return Err(ParseError::TrailingInput);
        }
        Ok(value)
    }
}

impl<A: Address> Serialize for NetworkAddress<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.address, self.prefix_length);
        serializer.serialize_str(&cidr)
    }
}

impl<'de, A: Address> Deserialize<'de> for NetworkAddress<A> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| de::Error::custom(format!("invalid CIDR {:?}: {}", s, e)))
    }
}
