//! Validation of user-entered endpoint addresses and collection names.

use std::fmt;

use crate::address::Address;
use crate::config::ValidationConfig;
use crate::error::{AddressValidationError, NameError};

/// An address that passed endpoint validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Endpoint {
    /// RFC 1123 hostname
    pub host: String,
    /// Port within the configured range
    pub port: u16,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Validates `input` as a `host:port` endpoint with the default bounds.
///
/// # Errors
///
/// See [`validate_address_with`].
///
/// # Examples
///
/// ```
/// use lexicard::validate_address;
///
/// assert!(validate_address("127.0.0.1:8765").is_ok());
///
/// let err = validate_address("127.0.0.1:0").unwrap_err();
/// assert_eq!(err.to_string(), "port value should be above 0 and less than 65536");
/// ```
pub fn validate_address(input: &str) -> Result<Endpoint, AddressValidationError> {
    validate_address_with(input, &ValidationConfig::default())
}

/// Validates `input` as a `host:port` endpoint.
///
/// Bracketed IPv6 literals and zone-qualified hosts split fine but are then
/// rejected by the hostname check.
///
/// # Errors
///
/// Returns the first failing check, in this order:
/// - `Parse` with the parser's reason unchanged
/// - `PortNotInteger` if the port is not a base-10 integer
/// - `PortOutOfRange` if the port is outside `config`'s range
/// - `InvalidHostname` if the host is not dot-separated RFC 1123 labels
pub fn validate_address_with(
    input: &str,
    config: &ValidationConfig,
) -> Result<Endpoint, AddressValidationError> {
    let result = check_address(input, config);
    if let Err(e) = &result {
        tracing::trace!(input, reason = %e, "rejected address");
    }
    result
}

fn check_address(
    input: &str,
    config: &ValidationConfig,
) -> Result<Endpoint, AddressValidationError> {
    let (host, port) = Address::parse(input)?.into_parts();

    let (negative, value) = port_integer(&port).ok_or(AddressValidationError::PortNotInteger)?;
    let port = u16::try_from(value)
        .ok()
        .filter(|p| (!negative || *p == 0) && (config.min_port..=config.max_port).contains(p))
        .ok_or(AddressValidationError::PortOutOfRange {
            min: config.min_port,
            max: config.max_port,
        })?;

    if !is_valid_hostname(&host, config.max_label_length) {
        return Err(AddressValidationError::InvalidHostname);
    }

    Ok(Endpoint { host, port })
}

/// Reads a port as `(negative, magnitude)`.
///
/// Accepts an optional sign, decimal digits and a fraction made only of
/// zeros. An empty port reads as zero. Large values saturate.
fn port_integer(port: &str) -> Option<(bool, u64)> {
    if port.is_empty() {
        return Some((false, 0));
    }

    let (negative, unsigned) = match port.as_bytes()[0] {
        b'-' => (true, &port[1..]),
        b'+' => (false, &port[1..]),
        _ => (false, port),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b == b'0') {
        return None;
    }

    let magnitude = whole.bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    });
    Some((negative, magnitude))
}

fn is_valid_hostname(host: &str, max_label_length: usize) -> bool {
    host.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= max_label_length
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
            && !label.starts_with('-')
            && !label.ends_with('-')
    })
}

/// The kind of collection name being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    /// A flashcard deck
    Deck,
    /// A flashcard note type
    Model,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deck => write!(f, "deck"),
            Self::Model => write!(f, "model"),
        }
    }
}

/// Returns true if `name` is acceptable as a deck or model name.
///
/// The name must be non-empty, contain no `"`, and contain no tab, newline
/// or vertical tab. Its first and last characters must not be whitespace.
///
/// # Examples
///
/// ```
/// use lexicard::is_valid_name;
///
/// assert!(is_valid_name("Japanese::Mining"));
/// assert!(is_valid_name("a"));
/// assert!(!is_valid_name(" padded "));
/// assert!(!is_valid_name("say \"hi\""));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let is_edge = |c: char| !c.is_whitespace() && c != '"';

    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !is_edge(first) {
        return false;
    }
    let Some(last) = chars.next_back() else {
        return true;
    };
    is_edge(last) && chars.all(|c| !matches!(c, '\t' | '\n' | '\u{0B}' | '"'))
}

/// Validates a name of the given kind.
///
/// # Errors
///
/// Returns `NameError` if [`is_valid_name`] rejects `name`.
pub fn validate_name(name: &str, kind: NameKind) -> Result<(), NameError> {
    if is_valid_name(name) {
        Ok(())
    } else {
        tracing::trace!(name, %kind, "rejected name");
        Err(NameError { kind })
    }
}

/// Validates a deck name.
///
/// # Errors
///
/// Returns `NameError` displaying `deck name is not valid`.
pub fn validate_deck_name(name: &str) -> Result<(), NameError> {
    validate_name(name, NameKind::Deck)
}

/// Validates a note type (model) name.
///
/// # Errors
///
/// Returns `NameError` displaying `model name is not valid`.
pub fn validate_model_name(name: &str) -> Result<(), NameError> {
    validate_name(name, NameKind::Model)
}
