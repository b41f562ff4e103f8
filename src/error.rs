//! Error types for address parsing, validation and remote result decoding.

use std::fmt;

use crate::constants::{MAX_PORT, MIN_PORT};
use crate::validate::NameKind;

/// Errors that can occur when splitting a `host:port` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: AddressErrorKind,
}

/// Specific address parsing error types.
///
/// Exactly one reason is reported per failed parse. The `Display` output is
/// the bare reason, e.g. `missing port in address`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressErrorKind {
    /// No colon at all, or nothing can follow a closing bracket
    MissingPort,
    /// Input starts with `[` but has no `]`
    MissingClosingBracket,
    /// More colons than a single host/port separator
    TooManyColons,
    /// A `[` outside the bracketed host
    UnexpectedOpeningBracket,
    /// A `]` outside the bracketed host
    UnexpectedClosingBracket,
}

impl AddressErrorKind {
    /// Returns the reason as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingPort => "missing port in address",
            Self::MissingClosingBracket => "missing ']' in address",
            Self::TooManyColons => "too many colons in address",
            Self::UnexpectedOpeningBracket => "unexpected '[' in address",
            Self::UnexpectedClosingBracket => "unexpected ']' in address",
        }
    }
}

impl fmt::Display for AddressErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "address {}: {}", self.input, self.kind)
    }
}

impl std::error::Error for AddressError {}

/// Errors reported when checking an address for use as a network endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressValidationError {
    /// The address could not be split into host and port
    Parse(AddressErrorKind),
    /// The port is not a base-10 integer
    PortNotInteger,
    /// The port is outside the accepted range
    PortOutOfRange {
        /// Lowest accepted port
        min: u16,
        /// Highest accepted port
        max: u16,
    },
    /// The host is not an RFC 1123 hostname
    InvalidHostname,
}

impl fmt::Display for AddressValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(kind) => write!(f, "{kind}"),
            Self::PortNotInteger => write!(f, "port is not an integer"),
            Self::PortOutOfRange { min, max } if (*min, *max) == (MIN_PORT, MAX_PORT) => {
                write!(f, "port value should be above 0 and less than 65536")
            }
            Self::PortOutOfRange { min, max } => {
                write!(f, "port value should be between {min} and {max}")
            }
            Self::InvalidHostname => write!(f, "hostname is not valid"),
        }
    }
}

impl std::error::Error for AddressValidationError {}

impl From<AddressError> for AddressValidationError {
    fn from(err: AddressError) -> Self {
        Self::Parse(err.kind)
    }
}

/// A name rejected by the name grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameError {
    /// Which kind of name was checked
    pub kind: NameKind,
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} name is not valid", self.kind)
    }
}

impl std::error::Error for NameError {}

/// The remote side answered with a result shape this crate does not know.
///
/// This is not a user-facing error. It means the remote contract changed
/// incompatibly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractViolation {
    /// The discriminant that was received
    pub typename: String,
    /// What was wrong with it
    pub reason: &'static str,
}

impl ContractViolation {
    pub(crate) fn new(typename: impl Into<String>, reason: &'static str) -> Self {
        Self {
            typename: typename.into(),
            reason,
        }
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "incompatible remote result '{}': {}",
            self.typename, self.reason
        )
    }
}

impl std::error::Error for ContractViolation {}
