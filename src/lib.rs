// cargo watch -x 'fmt' -x 'test'

pub mod config;
pub mod models;
pub mod parser;
pub mod server;

use crate::models::IpNetworkAddress;
use crate::parser::ParseError;

pub use crate::models::{
    any_has_address, Address, Ipv4NetworkAddress, Ipv6NetworkAddress, NetworkAddress,
};
pub use crate::parser::{Cursor, Endpoint};

/// Parse a comma-separated list of network addresses, e.g.
/// "10.0.0.0/8,2001:db8::/32".
pub fn parse_network_list(input: &str) -> Result<Vec<IpNetworkAddress>, ParseError> {
    input
        .split(',')
        .map(|part| part.parse())
        .collect::<Result<Vec<IpNetworkAddress>, ParseError>>()
}
