//! Endpoint grammar: host (hostname or IP literal) plus optional port.
//!
//! This is the broader grammar the auxiliary token readers exist for. An
//! endpoint is one of:
//!
//! ```text
//! "[" <ipv6-literal> "]" [":" <port>]
//! <ipv4-literal> [":" <port>]
//! <hostname> [":" <service>]
//! ```
//!
//! Attempts follow the same rollback discipline as the network-address
//! grammar: a failed alternative restores the cursor before the next one
//! runs.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use super::readers::{read_hostname, read_ip_address, read_port, read_service};
use super::{Cursor, ParseError};

/// A peer or server endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// An IPv4 address with an optional port.
    V4 {
        address: Ipv4Addr,
        port: Option<u16>,
    },
    /// A bracketed IPv6 address with an optional port.
    V6 {
        address: Ipv6Addr,
        port: Option<u16>,
    },
    /// A hostname with an optional service (symbolic or numeric).
    Hostname {
        hostname: String,
        service: Option<String>,
    },
}

fn read_v6_endpoint(cursor: &mut Cursor) -> Option<Endpoint> {
    let start = cursor.pos();

    if !cursor.eat('[') {
        return None;
    }
    let literal = match read_ip_address::<Ipv6Addr>(cursor) {
        Some(literal) => literal,
        None => {
            cursor.rewind(start);
            return None;
        }
    };
    if !cursor.eat(']') {
        cursor.rewind(start);
        return None;
    }

    // The reader validated the literal.
    let address = literal.parse().ok()?;
    let port = read_optional_port(cursor);

    Some(Endpoint::V6 { address, port })
}

fn read_v4_endpoint(cursor: &mut Cursor) -> Option<Endpoint> {
    let literal = read_ip_address::<Ipv4Addr>(cursor)?;
    let address = literal.parse().ok()?;
    let port = read_optional_port(cursor);

    Some(Endpoint::V4 { address, port })
}

fn read_hostname_endpoint(cursor: &mut Cursor) -> Option<Endpoint> {
    let hostname = read_hostname(cursor)?.to_string();

    let start = cursor.pos();
    let service = if cursor.eat(':') {
        match read_service(cursor) {
            Some(service) => Some(service.to_string()),
            None => {
                // ':' with nothing usable after it is not part of the endpoint.
                cursor.rewind(start);
                None
            }
        }
    } else {
        None
    };

    Some(Endpoint::Hostname { hostname, service })
}

fn read_optional_port(cursor: &mut Cursor) -> Option<u16> {
    let start = cursor.pos();
    if !cursor.eat(':') {
        return None;
    }
    match read_port(cursor) {
        // read_port guarantees the digits fit a u16.
        Some(digits) => digits.parse().ok(),
        None => {
            cursor.rewind(start);
            None
        }
    }
}

/// Read an endpoint from the cursor, trying IPv6, IPv4 and hostname forms
/// in that order.
pub fn read_endpoint(cursor: &mut Cursor) -> Result<Endpoint, ParseError> {
    if let Some(endpoint) = read_v6_endpoint(cursor) {
        return Ok(endpoint);
    }
    if let Some(endpoint) = read_v4_endpoint(cursor) {
        return Ok(endpoint);
    }
    if let Some(endpoint) = read_hostname_endpoint(cursor) {
        return Ok(endpoint);
    }

    Err(ParseError::MalformedLiteral)
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::V4 { address, port: Some(port) } => write!(f, "{address}:{port}"),
            Endpoint::V4 { address, port: None } => write!(f, "{address}"),
            Endpoint::V6 { address, port: Some(port) } => write!(f, "[{address}]:{port}"),
            Endpoint::V6 { address, port: None } => write!(f, "[{address}]"),
            Endpoint::Hostname { hostname, service: Some(service) } => {
                write!(f, "{hostname}:{service}")
            }
            Endpoint::Hostname { hostname, service: None } => write!(f, "{hostname}"),
        }
    }
}

impl FromStr for Endpoint {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cursor = Cursor::new(s.trim());
        let endpoint = read_endpoint(&mut cursor)?;
        if !cursor.at_end() {
            return Err(ParseError::TrailingInput);
        }
        Ok(endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v4_endpoint() {
        assert_eq!(
            "10.0.0.1:443".parse::<Endpoint>(),
            Ok(Endpoint::V4 {
                address: Ipv4Addr::new(10, 0, 0, 1),
                port: Some(443),
            })
        );
        assert_eq!(
            "10.0.0.1".parse::<Endpoint>(),
            Ok(Endpoint::V4 {
                address: Ipv4Addr::new(10, 0, 0, 1),
                port: None,
            })
        );
    }

    #[test]
    fn test_v6_endpoint() {
        assert_eq!(
            "[2001:db8::1]:12000".parse::<Endpoint>(),
            Ok(Endpoint::V6 {
                address: "2001:db8::1".parse().unwrap(),
                port: Some(12000),
            })
        );
        assert_eq!(
            "[::1]".parse::<Endpoint>(),
            Ok(Endpoint::V6 {
                address: Ipv6Addr::LOCALHOST,
                port: None,
            })
        );
        // Unclosed bracket falls through all alternatives.
        assert_eq!(
            "[2001:db8::1".parse::<Endpoint>(),
            Err(ParseError::MalformedLiteral)
        );
    }

    #[test]
    fn test_hostname_endpoint() {
        assert_eq!(
            "vpn.example.net:https".parse::<Endpoint>(),
            Ok(Endpoint::Hostname {
                hostname: "vpn.example.net".to_string(),
                service: Some("https".to_string()),
            })
        );
        assert_eq!(
            "localhost".parse::<Endpoint>(),
            Ok(Endpoint::Hostname {
                hostname: "localhost".to_string(),
                service: None,
            })
        );
    }

    #[test]
    fn test_port_out_of_range_is_not_consumed() {
        // 65536 is not a port; the ':' and digits stay unconsumed, so the
        // full-string parse reports trailing input.
        assert_eq!(
            "10.0.0.1:65536".parse::<Endpoint>(),
            Err(ParseError::TrailingInput)
        );
    }

    #[test]
    fn test_display_round_trip() {
        for s in [
            "10.0.0.1:443",
            "10.0.0.1",
            "[2001:db8::1]:12000",
            "[::1]",
            "vpn.example.net:https",
            "localhost",
        ] {
            let endpoint: Endpoint = s.parse().unwrap();
            assert_eq!(endpoint.to_string(), s, "round trip for {}", s);
        }
    }

    #[test]
    fn test_rollback_between_alternatives() {
        // "1.2.3" fails the v4 grammar but is a fine hostname; the v4
        // attempt must leave the cursor untouched for the hostname reader.
        assert_eq!(
            "1.2.3".parse::<Endpoint>(),
            Ok(Endpoint::Hostname {
                hostname: "1.2.3".to_string(),
                service: None,
            })
        );
    }
}
