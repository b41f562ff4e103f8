//! Connection status derived from the latest fetch of the remote state.
//!
//! [`resolve`] is a pure function of its input. It is meant to be called
//! again on every fetch-state change; the same input always gives the same
//! status.

use tracing::{error, trace};

use crate::error::ContractViolation;
use crate::fetch::FetchState;
use crate::wire::WireConnection;

/// Connection details reported by a reachable flashcard bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectionInfo {
    /// Bridge API version
    pub version: u32,
    /// Whether the configured deck exists
    pub deck_exists: bool,
    /// Whether the configured note type exists
    pub model_exists: bool,
    /// Whether every note field is mapped
    pub fields_mapped: bool,
}

impl ConnectionInfo {
    /// Returns true if every completeness flag is set.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.deck_exists && self.model_exists && self.fields_mapped
    }
}

/// A structured failure reported by the server about its bridge connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConnectionFailure {
    /// The bridge could not be reached
    ConnectionError {
        /// Transport description
        message: String,
    },
    /// The bridge rejected the request origin
    ForbiddenOrigin,
    /// The bridge rejected the API key
    InvalidApiKey {
        /// Bridge API version
        version: u32,
    },
    /// No flashcard collection is open
    CollectionUnavailable {
        /// Bridge API version
        version: u32,
    },
    /// Unclassified failure
    Unknown,
}

/// The decoded remote result: either a failure or a connection state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConnectionResult {
    /// The server reported a failure
    Failure(ConnectionFailure),
    /// The server reported the connection state
    State(ConnectionInfo),
}

/// State nested inside a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "state", rename_all = "camelCase"))]
pub enum InnerState {
    /// Connected and fully configured
    Ready(ConnectionInfo),
    /// Connected, but the deck, note type or field mapping is incomplete
    UserError(ConnectionInfo),
    /// The bridge could not be reached
    ConnectionError {
        /// Transport description
        message: String,
    },
    /// The bridge rejected the request origin
    ForbiddenOrigin,
    /// The bridge rejected the API key
    InvalidApiKey {
        /// Bridge API version
        version: u32,
    },
    /// No flashcard collection is open
    CollectionUnavailable {
        /// Bridge API version
        version: u32,
    },
    /// Unclassified failure
    Unknown,
}

impl From<&ConnectionResult> for InnerState {
    fn from(result: &ConnectionResult) -> Self {
        match result {
            ConnectionResult::State(info) if info.is_complete() => Self::Ready(*info),
            ConnectionResult::State(info) => Self::UserError(*info),
            ConnectionResult::Failure(failure) => match failure {
                ConnectionFailure::ConnectionError { message } => Self::ConnectionError {
                    message: message.clone(),
                },
                ConnectionFailure::ForbiddenOrigin => Self::ForbiddenOrigin,
                ConnectionFailure::InvalidApiKey { version } => {
                    Self::InvalidApiKey { version: *version }
                }
                ConnectionFailure::CollectionUnavailable { version } => {
                    Self::CollectionUnavailable { version: *version }
                }
                ConnectionFailure::Unknown => Self::Unknown,
            },
        }
    }
}

/// Top-level connection status.
///
/// [`resolve`] never produces [`Status::Loading`]; callers use it while
/// [`FetchState::is_initial_load`] holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "status", content = "detail", rename_all = "camelCase")
)]
pub enum Status {
    /// No server was reached
    Disconnected,
    /// The first request is still outstanding
    Loading,
    /// The server was reached and reported an error
    Error {
        /// Error description, if one was given
        message: Option<String>,
    },
    /// The server answered with a connection state
    Ok(InnerState),
}

impl Status {
    /// Returns true if the bridge is connected and fully configured.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ok(InnerState::Ready(_)))
    }

    /// Returns the message carried by the status, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => message.as_deref(),
            Self::Ok(InnerState::ConnectionError { message }) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Returns a short name for the status, for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Loading => "loading",
            Self::Error { .. } => "error",
            Self::Ok(inner) => match inner {
                InnerState::Ready(_) => "ready",
                InnerState::UserError(_) => "user_error",
                InnerState::ConnectionError { .. } => "connection_error",
                InnerState::ForbiddenOrigin => "forbidden_origin",
                InnerState::InvalidApiKey { .. } => "invalid_api_key",
                InnerState::CollectionUnavailable { .. } => "collection_unavailable",
                InnerState::Unknown => "unknown",
            },
        }
    }
}

/// Splits off the outcomes decided by the fetch itself, leaving the payload.
fn settle<T>(state: &FetchState<T>) -> Result<&T, Status> {
    match (&state.error, &state.data) {
        (Some(error), _) if error.is_no_connection() => Err(Status::Disconnected),
        (Some(error), _) => Err(Status::Error {
            message: error.message().map(str::to_owned),
        }),
        (None, Some(data)) => Ok(data),
        (None, None) => Err(Status::Error { message: None }),
    }
}

fn traced(status: Status) -> Status {
    trace!(status = status.kind(), "resolved connection status");
    status
}

/// Resolves a fetch snapshot into a status.
///
/// An error takes precedence over data: a transport failure that never
/// reached a server is `Disconnected`, any other error is `Error` with its
/// message. A snapshot with neither data nor error is `Error` without a
/// message, even while `loading` is set; callers check
/// [`FetchState::is_initial_load`] first and show `Status::Loading`
/// instead. Otherwise the payload becomes `Ok` with its inner state; a
/// connection state is `Ready` only if all completeness flags are set.
///
/// # Examples
///
/// ```
/// use lexicard::{resolve, ConnectionInfo, ConnectionResult, FetchState, InnerState, Status};
///
/// let info = ConnectionInfo {
///     version: 6,
///     deck_exists: true,
///     model_exists: true,
///     fields_mapped: true,
/// };
/// let state = FetchState::success(ConnectionResult::State(info));
/// assert_eq!(resolve(&state), Status::Ok(InnerState::Ready(info)));
/// ```
#[must_use]
pub fn resolve(state: &FetchState<ConnectionResult>) -> Status {
    traced(match settle(state) {
        Ok(result) => Status::Ok(InnerState::from(result)),
        Err(status) => status,
    })
}

/// Resolves a fetch snapshot carrying the raw wire result.
///
/// # Errors
///
/// Returns `ContractViolation` if the payload has an unrecognized
/// discriminant or lacks a field its discriminant requires.
pub fn try_resolve_wire(state: &FetchState<WireConnection>) -> Result<Status, ContractViolation> {
    let status = match settle(state) {
        Ok(wire) => Status::Ok(InnerState::from(&ConnectionResult::try_from(wire)?)),
        Err(status) => status,
    };
    Ok(traced(status))
}

/// Resolves a fetch snapshot carrying the raw wire result.
///
/// # Panics
///
/// Panics if the payload does not match the known remote contract. This
/// means client and server are incompatible and no status would be truthful.
#[must_use]
pub fn resolve_wire(state: &FetchState<WireConnection>) -> Status {
    match try_resolve_wire(state) {
        Ok(status) => status,
        Err(violation) => {
            error!(
                typename = %violation.typename,
                reason = violation.reason,
                "remote result does not match the known contract"
            );
            panic!("{violation}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;

    fn info(deck: bool, model: bool, fields: bool) -> ConnectionInfo {
        ConnectionInfo {
            version: 6,
            deck_exists: deck,
            model_exists: model,
            fields_mapped: fields,
        }
    }

    #[test]
    fn complete_state_is_ready() {
        let state = FetchState::success(ConnectionResult::State(info(true, true, true)));
        let status = resolve(&state);
        assert!(status.is_ready());
        assert_eq!(status.kind(), "ready");
    }

    #[test]
    fn any_missing_flag_is_user_error() {
        for flags in [
            (false, true, true),
            (true, false, true),
            (true, true, false),
            (false, false, false),
        ] {
            let i = info(flags.0, flags.1, flags.2);
            let state = FetchState::success(ConnectionResult::State(i));
            assert_eq!(resolve(&state), Status::Ok(InnerState::UserError(i)));
        }
    }

    #[test]
    fn failures_map_to_inner_states() {
        let cases = [
            (
                ConnectionFailure::ConnectionError {
                    message: "refused".into(),
                },
                InnerState::ConnectionError {
                    message: "refused".into(),
                },
            ),
            (ConnectionFailure::ForbiddenOrigin, InnerState::ForbiddenOrigin),
            (
                ConnectionFailure::InvalidApiKey { version: 6 },
                InnerState::InvalidApiKey { version: 6 },
            ),
            (
                ConnectionFailure::CollectionUnavailable { version: 6 },
                InnerState::CollectionUnavailable { version: 6 },
            ),
            (ConnectionFailure::Unknown, InnerState::Unknown),
        ];
        for (failure, expected) in cases {
            let state = FetchState::success(ConnectionResult::Failure(failure));
            assert_eq!(resolve(&state), Status::Ok(expected));
        }
    }

    #[test]
    fn no_connection_is_disconnected() {
        let state = FetchState::<ConnectionResult>::failure(FetchError::unreachable("refused"));
        assert_eq!(resolve(&state), Status::Disconnected);
    }

    #[test]
    fn server_error_keeps_message() {
        let state = FetchState::<ConnectionResult>::failure(FetchError::remote("boom"));
        let status = resolve(&state);
        assert_eq!(
            status,
            Status::Error {
                message: Some("boom".into())
            }
        );
        assert_eq!(status.message(), Some("boom"));
    }

    #[test]
    fn http_status_is_not_disconnected() {
        let state = FetchState::<ConnectionResult>::failure(FetchError::Network {
            status: Some(500),
            message: None,
        });
        assert_eq!(resolve(&state), Status::Error { message: None });
    }

    #[test]
    fn error_wins_over_stale_data() {
        let state = FetchState {
            data: Some(ConnectionResult::State(info(true, true, true))),
            error: Some(FetchError::unreachable("gone")),
            loading: false,
        };
        assert_eq!(resolve(&state), Status::Disconnected);
    }

    #[test]
    fn nothing_received_is_error_without_message() {
        let idle = FetchState::<ConnectionResult> {
            data: None,
            error: None,
            loading: false,
        };
        assert_eq!(resolve(&idle), Status::Error { message: None });
        assert_eq!(
            resolve(&FetchState::loading()),
            Status::Error { message: None }
        );
    }

    #[test]
    fn refetch_with_data_resolves_data() {
        let state = FetchState {
            data: Some(ConnectionResult::Failure(ConnectionFailure::Unknown)),
            error: None,
            loading: true,
        };
        assert_eq!(resolve(&state), Status::Ok(InnerState::Unknown));
    }

    #[test]
    fn wire_result_resolves() {
        let wire = WireConnection {
            version: Some(6),
            ..WireConnection::new("InvalidApiKey")
        };
        assert_eq!(
            resolve_wire(&FetchState::success(wire)),
            Status::Ok(InnerState::InvalidApiKey { version: 6 })
        );
    }

    #[test]
    fn wire_error_skips_decoding() {
        let state = FetchState {
            data: Some(WireConnection::new("Garbage")),
            error: Some(FetchError::remote("boom")),
            loading: false,
        };
        assert_eq!(
            try_resolve_wire(&state).unwrap(),
            Status::Error {
                message: Some("boom".into())
            }
        );
    }

    #[test]
    fn wire_violation_is_reported() {
        let state = FetchState::success(WireConnection::new("Garbage"));
        let err = try_resolve_wire(&state).unwrap_err();
        assert_eq!(err.typename, "Garbage");
    }

    #[test]
    #[should_panic(expected = "Garbage")]
    fn wire_violation_panics() {
        let state = FetchState::success(WireConnection::new("Garbage"));
        let _ = resolve_wire(&state);
    }
}
