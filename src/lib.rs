//! Domain core of a dictionary-to-flashcard bridge.
//!
//! This crate holds the pure logic behind the bridge's settings and lookup
//! views. It does no I/O: the query layer hands it strings, records and
//! fetch snapshots, and it hands back validation results, grouped records
//! and statuses.
//!
//! # Overview
//!
//! - [`Address`] splits a `host:port` string, including bracketed IPv6
//!   literals with zone identifiers.
//! - [`validate_address`] checks an address for use as an endpoint;
//!   [`validate_deck_name`] and [`validate_model_name`] check collection names.
//! - [`group`] folds an ordered list of [`DictionaryEntry`] records into
//!   [`Bag`]s of adjacent entries with equal keys.
//! - [`resolve`] turns a [`FetchState`] into a [`Status`].
//!
//! # Quick Start
//!
//! ```rust
//! use lexicard::{validate_address, validate_deck_name, Address};
//!
//! let addr = Address::parse("[::1]:8765").unwrap();
//! assert_eq!(addr.host(), "::1");
//!
//! assert!(validate_address("127.0.0.1:8765").is_ok());
//! assert_eq!(
//!     validate_address(":8765").unwrap_err().to_string(),
//!     "hostname is not valid"
//! );
//!
//! assert!(validate_deck_name("Mining").is_ok());
//! ```
//!
//! # Grouping
//!
//! ```rust
//! use lexicard::{group, DictionaryEntry, TermKey};
//!
//! let a = TermKey::new("見る").with_reading("みる");
//! let b = TermKey::new("観る").with_reading("みる");
//! let entries = vec![
//!     DictionaryEntry::new(a.clone(), "JMdict"),
//!     DictionaryEntry::new(b, "JMdict"),
//!     DictionaryEntry::new(a, "Daijirin"),
//! ];
//!
//! // Runs are not merged across a different key.
//! assert_eq!(group(entries).len(), 3);
//! ```
//!
//! # Logging
//!
//! Events are emitted through `tracing`; install a subscriber to see them.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod address;
mod config;
mod constants;
mod entry;
mod error;
mod fetch;
mod grouping;
#[cfg(kani)]
mod kani_proofs;
pub mod prelude;
mod status;
mod validate;
mod wire;

pub use address::Address;
pub use config::ValidationConfig;
pub use constants::{
    MAX_DNS_LABEL_LENGTH, MAX_PORT, MIN_PORT, TYPENAME_COLLECTION_UNAVAILABLE,
    TYPENAME_CONNECTION_ERROR, TYPENAME_CONNECTION_INFO, TYPENAME_FORBIDDEN_ORIGIN,
    TYPENAME_INVALID_API_KEY, TYPENAME_UNKNOWN_ERROR,
};
pub use entry::{DictionaryEntry, PitchAccent, TermKey};
pub use error::{
    AddressError, AddressErrorKind, AddressValidationError, ContractViolation, NameError,
};
pub use fetch::{FetchError, FetchState};
pub use grouping::{group, group_by, Bag, Groupable, RunGrouper};
pub use status::{
    resolve, resolve_wire, try_resolve_wire, ConnectionFailure, ConnectionInfo,
    ConnectionResult, InnerState, Status,
};
pub use validate::{
    is_valid_name, validate_address, validate_address_with, validate_deck_name,
    validate_model_name, validate_name, Endpoint, NameKind,
};
pub use wire::WireConnection;
