//! Parse failure classification.

use std::error::Error;
use std::fmt;

/// A recoverable parse failure.
///
/// Every failure leaves the input cursor exactly where the attempt began,
/// so callers can retry the same input with an alternate grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The address portion does not match the family's literal grammar.
    MalformedLiteral,
    /// A valid address literal was read but not followed by '/'.
    MissingPrefixSeparator,
    /// '/' was found but the following text is not a decimal numeral.
    MalformedPrefixLength,
    /// The prefix numeral exceeds the family's bit width.
    OutOfRangePrefixLength {
        /// The family's bit width (32 for IPv4, 128 for IPv6).
        max: u8,
    },
    /// Neither the IPv6 nor the IPv4 grammar matched.
    BothFamiliesFailed,
    /// A value was read but unconsumed text followed it.
    TrailingInput,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::MalformedLiteral => write!(f, "malformed address literal"),
            ParseError::MissingPrefixSeparator => {
                write!(f, "address literal not followed by '/<prefix length>'")
            }
            ParseError::MalformedPrefixLength => write!(f, "malformed prefix length"),
            ParseError::OutOfRangePrefixLength { max } => {
                write!(f, "prefix length exceeds the family maximum of {max}")
            }
            ParseError::BothFamiliesFailed => {
                write!(f, "not a valid IPv6 or IPv4 network address")
            }
            ParseError::TrailingInput => write!(f, "unexpected trailing characters"),
        }
    }
}

impl Error for ParseError {}
