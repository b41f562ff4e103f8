//! Host and port splitting for combined connection strings.
//!
//! # Grammar
//!
//! ```text
//! address = host ":" port
//!         / "[" host "]" ":" port
//! ```
//!
//! Neither part is checked here beyond the delimiters: an empty host or an
//! empty port is a successful parse, and a zone identifier such as `%lo0`
//! inside brackets is kept verbatim as part of the host. Checking the parts
//! for use as a network endpoint is done by [`validate_address`].
//!
//! # Round trips
//!
//! `Address -> String -> Address` is not guaranteed to round trip. The
//! original bracketing is not recorded, so `"[localhost]:80"` parses to host
//! `localhost` and prints back as `"localhost:80"`.
//!
//! [`validate_address`]: crate::validate_address

use std::fmt;
use std::str::FromStr;

use crate::error::{AddressError, AddressErrorKind};

/// A `host:port` pair split out of a combined connection string.
///
/// Both parts are the raw substrings of the input.
///
/// # Examples
///
/// ```
/// use lexicard::Address;
///
/// let addr = Address::parse("127.0.0.1:8765").unwrap();
/// assert_eq!(addr.host(), "127.0.0.1");
/// assert_eq!(addr.port(), "8765");
///
/// let addr = Address::parse("[fe80::1%lo0]:80").unwrap();
/// assert_eq!(addr.host(), "fe80::1%lo0");
/// assert_eq!(addr.port(), "80");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    host: String,
    port: String,
}

impl Address {
    /// Splits `input` into host and port.
    ///
    /// Checks run in a fixed order and the first failing one is reported:
    /// missing colon, bracket structure, colon count in an unbracketed host,
    /// then stray `[` and stray `]` outside the host region.
    ///
    /// # Errors
    ///
    /// Returns `AddressError` if:
    /// - The input has no colon, or a bracketed host is not directly followed by `:port`
    /// - A leading `[` has no matching `]`
    /// - The host contains a colon without being bracketed
    /// - A `[` or `]` appears outside the bracketed host
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        let fail = |kind: AddressErrorKind| AddressError {
            input: input.to_string(),
            kind,
        };

        let Some(last_colon) = input.rfind(':') else {
            return Err(fail(AddressErrorKind::MissingPort));
        };

        // Stray brackets are searched from these offsets on.
        let (host, open_from, close_from) = if input.starts_with('[') {
            let Some(end) = input.find(']') else {
                return Err(fail(AddressErrorKind::MissingClosingBracket));
            };
            let after = end + 1;
            if after == input.len() {
                return Err(fail(AddressErrorKind::MissingPort));
            }
            if after != last_colon {
                return Err(if input.as_bytes().get(after) == Some(&b':') {
                    fail(AddressErrorKind::TooManyColons)
                } else {
                    fail(AddressErrorKind::MissingPort)
                });
            }
            (&input[1..end], 1, after)
        } else {
            let host = &input[..last_colon];
            if host.contains(':') {
                return Err(fail(AddressErrorKind::TooManyColons));
            }
            (host, 0, 0)
        };

        if input[open_from..].contains('[') {
            return Err(fail(AddressErrorKind::UnexpectedOpeningBracket));
        }
        if input[close_from..].contains(']') {
            return Err(fail(AddressErrorKind::UnexpectedClosingBracket));
        }

        Ok(Self {
            host: host.to_string(),
            port: input[last_colon + 1..].to_string(),
        })
    }

    /// Returns the host part, without brackets.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port part, possibly empty.
    #[must_use]
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Consumes the address, returning `(host, port)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.host, self.port)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}
