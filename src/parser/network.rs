//! Network-address grammar: per-family state machine and family dispatch.

use std::net::{Ipv4Addr, Ipv6Addr};

use super::readers::{read_ip_address, read_prefix_length};
use super::{Cursor, ParseError};
use crate::models::{Address, IpNetworkAddress, NetworkAddress};

/// Read a network address of family `A` from the cursor.
///
/// Grammar: `<address-literal> "/" <decimal-digits>`. A bare address
/// literal with no `/prefix` suffix is not a network address: the whole
/// match fails and the cursor is restored to where the attempt began,
/// even though a valid literal was read.
pub fn read_network_address<A: Address>(
    cursor: &mut Cursor,
) -> Result<NetworkAddress<A>, ParseError> {
    let start = cursor.pos();

    let literal = match read_ip_address::<A>(cursor) {
        Some(literal) => literal,
        None => return Err(ParseError::MalformedLiteral),
    };

    if !cursor.eat('/') {
        cursor.rewind(start);
        return Err(ParseError::MissingPrefixSeparator);
    }

    let digits = match read_prefix_length(cursor) {
        Some(digits) => digits,
        None => {
            cursor.rewind(start);
            return Err(ParseError::MalformedPrefixLength);
        }
    };

    // The reader validated the literal against the family grammar already.
    let address: A = match literal.parse() {
        Ok(address) => address,
        Err(_) => {
            cursor.rewind(start);
            return Err(ParseError::MalformedLiteral);
        }
    };

    let prefix_length = digits
        .parse::<u32>()
        .ok()
        .filter(|len| *len <= u32::from(A::BIT_LEN));

    match prefix_length {
        Some(prefix_length) => NetworkAddress::new(address, prefix_length as u8),
        None => {
            cursor.rewind(start);
            Err(ParseError::OutOfRangePrefixLength { max: A::BIT_LEN })
        }
    }
}

/// Read a network address of either family from the cursor.
///
/// Tries the IPv6 grammar first, then IPv4. IPv6 literals carry more
/// distinctive syntax (hex groups, `::`), so trying them first keeps a
/// v4 partial match from shadowing a v6 full match; no input is valid
/// for both grammars, so the order is only a diagnostic tie-break.
/// On failure the cursor is left exactly where it started.
pub fn read_ip_network_address(cursor: &mut Cursor) -> Result<IpNetworkAddress, ParseError> {
    if let Ok(network) = read_network_address::<Ipv6Addr>(cursor) {
        return Ok(IpNetworkAddress::V6(network));
    }

    if let Ok(network) = read_network_address::<Ipv4Addr>(cursor) {
        return Ok(IpNetworkAddress::V4(network));
    }

    Err(ParseError::BothFamiliesFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_network_address_v4() {
        let mut cursor = Cursor::new("192.168.1.0/24 rest");
        let network = read_network_address::<Ipv4Addr>(&mut cursor).unwrap();
        assert_eq!(network.address(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(network.prefix_length(), 24);
        assert_eq!(cursor.rest(), " rest");
    }

    #[test]
    fn test_missing_separator_rolls_back_literal() {
        let mut cursor = Cursor::new("192.168.1.0 rest");
        assert_eq!(
            read_network_address::<Ipv4Addr>(&mut cursor),
            Err(ParseError::MissingPrefixSeparator)
        );
        // The address literal was read and put back in full.
        assert_eq!(cursor.pos(), 0);
        assert_eq!(cursor.rest(), "192.168.1.0 rest");
    }

    #[test]
    fn test_missing_digits_rolls_back_literal_and_slash() {
        let mut cursor = Cursor::new("192.168.1.0/x");
        assert_eq!(
            read_network_address::<Ipv4Addr>(&mut cursor),
            Err(ParseError::MalformedPrefixLength)
        );
        assert_eq!(cursor.rest(), "192.168.1.0/x");
    }

    #[test]
    fn test_malformed_literal() {
        let mut cursor = Cursor::new("300.1.1.1/24");
        assert_eq!(
            read_network_address::<Ipv4Addr>(&mut cursor),
            Err(ParseError::MalformedLiteral)
        );
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn test_out_of_range_prefix_rolls_back() {
        let mut cursor = Cursor::new("10.0.0.0/33");
        assert_eq!(
            read_network_address::<Ipv4Addr>(&mut cursor),
            Err(ParseError::OutOfRangePrefixLength { max: 32 })
        );
        assert_eq!(cursor.rest(), "10.0.0.0/33");

        // /33 is fine for v6, and huge numerals fail cleanly.
        let mut cursor = Cursor::new("2001:db8::/33");
        assert!(read_network_address::<Ipv6Addr>(&mut cursor).is_ok());
        let mut cursor = Cursor::new("2001:db8::/99999999999");
        assert_eq!(
            read_network_address::<Ipv6Addr>(&mut cursor),
            Err(ParseError::OutOfRangePrefixLength { max: 128 })
        );
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn test_dispatch_order_and_rollback() {
        let mut cursor = Cursor::new("::1/128");
        assert!(matches!(
            read_ip_network_address(&mut cursor),
            Ok(IpNetworkAddress::V6(_))
        ));
        assert!(cursor.at_end());

        // The v6 attempt consumes and restores "127.0.0.1" before the v4
        // attempt sees it.
        let mut cursor = Cursor::new("127.0.0.1/8");
        assert!(matches!(
            read_ip_network_address(&mut cursor),
            Ok(IpNetworkAddress::V4(_))
        ));
        assert!(cursor.at_end());

        let mut cursor = Cursor::new("not-an-address");
        assert_eq!(
            read_ip_network_address(&mut cursor),
            Err(ParseError::BothFamiliesFailed)
        );
        assert_eq!(cursor.pos(), 0);
        assert_eq!(cursor.rest(), "not-an-address");
    }

    #[test]
    fn test_composes_with_surrounding_grammar() {
        // A caller can parse a list by alternating with its own separators.
        let mut cursor = Cursor::new("10.0.0.0/8,2001:db8::/32");
        let first = read_ip_network_address(&mut cursor).unwrap();
        assert!(cursor.eat(','));
        let second = read_ip_network_address(&mut cursor).unwrap();
        assert!(cursor.at_end());
        assert!(matches!(first, IpNetworkAddress::V4(_)));
        assert!(matches!(second, IpNetworkAddress::V6(_)));
    }
}
