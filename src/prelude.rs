//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use lexicard::prelude::*;
//!
//! let addr = Address::parse("localhost:8765").unwrap();
//! assert_eq!(addr.port(), "8765");
//! ```
//!
//! Wire discriminant constants are left out; import them from the crate root.

pub use crate::{
    // Addresses and names
    Address, Endpoint, NameKind, ValidationConfig,
    is_valid_name, validate_address, validate_address_with, validate_deck_name,
    validate_model_name, validate_name,
    // Grouping
    Bag, DictionaryEntry, Groupable, PitchAccent, RunGrouper, TermKey, group, group_by,
    // Status
    ConnectionFailure, ConnectionInfo, ConnectionResult, FetchError, FetchState, InnerState,
    Status, WireConnection, resolve, resolve_wire, try_resolve_wire,
    // Errors
    AddressError, AddressErrorKind, AddressValidationError, ContractViolation, NameError,
    // Constants
    MAX_DNS_LABEL_LENGTH, MAX_PORT, MIN_PORT,
};
