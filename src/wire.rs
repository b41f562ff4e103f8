//! Loosely typed wire shape of the remote connection result.
//!
//! The query layer delivers the result as a union tagged by a `__typename`
//! discriminant with the payload fields of every member flattened into one
//! object. Decoding checks the discriminant and the fields it requires.

use crate::constants::{
    TYPENAME_COLLECTION_UNAVAILABLE, TYPENAME_CONNECTION_ERROR, TYPENAME_CONNECTION_INFO,
    TYPENAME_FORBIDDEN_ORIGIN, TYPENAME_INVALID_API_KEY, TYPENAME_UNKNOWN_ERROR,
};
use crate::error::ContractViolation;
use crate::status::{ConnectionFailure, ConnectionInfo, ConnectionResult};

/// The connection result as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct WireConnection {
    /// Union discriminant
    #[cfg_attr(feature = "serde", serde(rename = "__typename"))]
    pub typename: String,
    /// Failure description
    #[cfg_attr(feature = "serde", serde(default))]
    pub message: Option<String>,
    /// Flashcard bridge API version
    #[cfg_attr(feature = "serde", serde(default))]
    pub version: Option<u32>,
    /// Whether the configured deck exists
    #[cfg_attr(feature = "serde", serde(default))]
    pub deck_exists: Option<bool>,
    /// Whether the configured note type exists
    #[cfg_attr(feature = "serde", serde(default))]
    pub model_exists: Option<bool>,
    /// Whether every note field is mapped
    #[cfg_attr(feature = "serde", serde(default))]
    pub fields_mapped: Option<bool>,
}

impl WireConnection {
    /// Creates a wire value with only the discriminant set.
    #[must_use]
    pub fn new(typename: impl Into<String>) -> Self {
        Self {
            typename: typename.into(),
            ..Self::default()
        }
    }

    fn require<T: Copy>(
        &self,
        field: Option<T>,
        reason: &'static str,
    ) -> Result<T, ContractViolation> {
        field.ok_or_else(|| ContractViolation::new(&self.typename, reason))
    }
}

impl TryFrom<&WireConnection> for ConnectionResult {
    type Error = ContractViolation;

    fn try_from(wire: &WireConnection) -> Result<Self, Self::Error> {
        let failure = match wire.typename.as_str() {
            TYPENAME_CONNECTION_INFO => {
                return Ok(Self::State(ConnectionInfo {
                    version: wire.require(wire.version, "missing version")?,
                    deck_exists: wire.require(wire.deck_exists, "missing deckExists")?,
                    model_exists: wire.require(wire.model_exists, "missing modelExists")?,
                    fields_mapped: wire.require(wire.fields_mapped, "missing fieldsMapped")?,
                }));
            }
            TYPENAME_CONNECTION_ERROR => ConnectionFailure::ConnectionError {
                message: wire
                    .message
                    .clone()
                    .ok_or_else(|| ContractViolation::new(&wire.typename, "missing message"))?,
            },
            TYPENAME_FORBIDDEN_ORIGIN => ConnectionFailure::ForbiddenOrigin,
            TYPENAME_INVALID_API_KEY => ConnectionFailure::InvalidApiKey {
                version: wire.require(wire.version, "missing version")?,
            },
            TYPENAME_COLLECTION_UNAVAILABLE => ConnectionFailure::CollectionUnavailable {
                version: wire.require(wire.version, "missing version")?,
            },
            TYPENAME_UNKNOWN_ERROR => ConnectionFailure::Unknown,
            _ => {
                return Err(ContractViolation::new(
                    &wire.typename,
                    "unrecognized discriminant",
                ));
            }
        };
        Ok(Self::Failure(failure))
    }
}

impl TryFrom<WireConnection> for ConnectionResult {
    type Error = ContractViolation;

    fn try_from(wire: WireConnection) -> Result<Self, Self::Error> {
        Self::try_from(&wire)
    }
}
