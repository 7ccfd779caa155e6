//! Primitive token readers.
//!
//! Each reader consumes a prefix of the remaining input matching one token
//! grammar. On success the cursor sits exactly after the matched text and
//! the matched substring is returned; on failure the cursor is restored to
//! where it was and `None` is returned, so the caller can try an
//! alternative grammar on the same input.

use lazy_static::lazy_static;
use regex::Regex;

use super::Cursor;
use crate::models::Address;

lazy_static! {
    // RFC 1123 hostname: dot-separated labels of up to 63 alphanumeric
    // characters, hyphens allowed inside a label but not at its edges.
    static ref HOSTNAME_RE: Regex = Regex::new(
        r"^[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*"
    )
    .expect("Invalid Regex");
}

/// Read an address literal of family `A`.
///
/// Scans the family's literal character class, then validates the
/// collected text against the family grammar. "300.1.1.1" is scanned in
/// full and rejected here, not at some later stage.
pub fn read_ip_address<'a, A: Address>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let start = cursor.pos();
    let literal = cursor.take_while(A::is_literal_char);

    if !literal.is_empty() && literal.parse::<A>().is_ok() {
        Some(literal)
    } else {
        cursor.rewind(start);
        None
    }
}

/// Read one or more decimal digits forming a prefix length.
///
/// No bound check against the family's bit width happens here; that is
/// the concern of [`NetworkAddress::new`](crate::models::NetworkAddress::new).
pub fn read_prefix_length<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let digits = cursor.take_while(|c| c.is_ascii_digit());
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

/// Read a decimal port number (0-65535).
pub fn read_port<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let start = cursor.pos();
    let digits = cursor.take_while(|c| c.is_ascii_digit());

    match digits.parse::<u32>() {
        Ok(port) if port <= u32::from(u16::MAX) => Some(digits),
        _ => {
            cursor.rewind(start);
            None
        }
    }
}

/// Read a hostname.
pub fn read_hostname<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let matched = HOSTNAME_RE.find(cursor.rest())?;
    let hostname = matched.as_str();
    cursor.advance(hostname.len());
    Some(hostname)
}

/// Read a service name: a plain alphanumeric token (e.g. "https" or "12000").
pub fn read_service<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let service = cursor.take_while(|c| c.is_ascii_alphanumeric());
    if service.is_empty() {
        None
    } else {
        Some(service)
    }
}
