//! Address family abstraction over [`Ipv4Addr`] and [`Ipv6Addr`].
//!
//! The two IP families differ only in byte length, literal grammar and the
//! unspecified ("null") address; everything else in this crate is written
//! once against this trait.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// An IP address family usable as the address component of a
/// [`NetworkAddress`](super::NetworkAddress).
///
/// Implemented for [`Ipv4Addr`] and [`Ipv6Addr`] only; the set of families
/// is closed.
pub trait Address:
    Copy + Eq + Ord + Hash + Debug + Display + FromStr + private::Sealed
{
    /// Number of bits in an address of this family (32 or 128).
    const BIT_LEN: u8;

    /// Human-readable family name, used in log and error messages.
    const FAMILY_NAME: &'static str;

    /// The all-zero address of this family.
    const UNSPECIFIED: Self;

    /// Fixed-size byte representation, network byte order.
    type Bytes: AsRef<[u8]>;

    /// The raw bytes of the address, most significant first.
    fn octets(&self) -> Self::Bytes;

    /// Whether `c` may appear in a textual literal of this family.
    ///
    /// This is the character class a reader scans over before validating
    /// the collected text against the real grammar; it is deliberately
    /// wider than the grammar itself.
    fn is_literal_char(c: char) -> bool;
}

impl Address for Ipv4Addr {
    const BIT_LEN: u8 = 32;
    const FAMILY_NAME: &'static str = "IPv4";
    const UNSPECIFIED: Self = Ipv4Addr::UNSPECIFIED;

    type Bytes = [u8; 4];

    fn octets(&self) -> [u8; 4] {
        Ipv4Addr::octets(self)
    }

    fn is_literal_char(c: char) -> bool {
        c.is_ascii_digit() || c == '.'
    }
}

impl Address for Ipv6Addr {
    const BIT_LEN: u8 = 128;
    const FAMILY_NAME: &'static str = "IPv6";
    const UNSPECIFIED: Self = Ipv6Addr::UNSPECIFIED;

    type Bytes = [u8; 16];

    fn octets(&self) -> [u8; 16] {
        Ipv6Addr::octets(self)
    }

    // '.' is included for the embedded IPv4 tail notation (::ffff:1.2.3.4).
    fn is_literal_char(c: char) -> bool {
        c.is_ascii_hexdigit() || c == ':' || c == '.'
    }
}

mod private {
    use std::net::{Ipv4Addr, Ipv6Addr};

    pub trait Sealed {}
    impl Sealed for Ipv4Addr {}
    impl Sealed for Ipv6Addr {}
}
