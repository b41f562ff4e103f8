//! Snapshot of a remote fetch, as handed over by the query layer.

/// Why a remote fetch failed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "camelCase"))]
pub enum FetchError {
    /// The transport failed.
    ///
    /// Without a status code the server was never reached.
    Network {
        /// HTTP status, if a response arrived
        status: Option<u16>,
        /// Human readable description
        message: Option<String>,
    },
    /// The server answered with an error.
    Remote {
        /// Human readable description
        message: Option<String>,
    },
}

impl FetchError {
    /// Creates a transport failure that never reached a server.
    #[must_use]
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Network {
            status: None,
            message: Some(message.into()),
        }
    }

    /// Creates an error reported by the server.
    #[must_use]
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: Some(message.into()),
        }
    }

    /// Returns true if no server was reached.
    #[must_use]
    pub const fn is_no_connection(&self) -> bool {
        matches!(self, Self::Network { status: None, .. })
    }

    /// Returns the error message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Network { message, .. } | Self::Remote { message } => message.as_deref(),
        }
    }
}

/// The latest outcome of a remote fetch.
///
/// `data` and `error` may both be present, e.g. when a refetch fails while
/// stale data is still held.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FetchState<T> {
    /// Payload of the last successful response
    pub data: Option<T>,
    /// Error of the last response
    pub error: Option<FetchError>,
    /// Whether a request is in flight
    pub loading: bool,
}

impl<T> FetchState<T> {
    /// A request in flight with nothing received yet.
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            data: None,
            error: None,
            loading: true,
        }
    }

    /// A completed request that returned `data`.
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            loading: false,
        }
    }

    /// A completed request that failed.
    #[must_use]
    pub const fn failure(error: FetchError) -> Self {
        Self {
            data: None,
            error: Some(error),
            loading: false,
        }
    }

    /// Returns true while the very first request is outstanding.
    ///
    /// Callers show `Status::Loading` in this state instead of resolving.
    #[must_use]
    pub const fn is_initial_load(&self) -> bool {
        self.loading && self.data.is_none() && self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_without_status_is_no_connection() {
        assert!(FetchError::unreachable("refused").is_no_connection());
        let with_status = FetchError::Network {
            status: Some(502),
            message: None,
        };
        assert!(!with_status.is_no_connection());
        assert!(!FetchError::remote("boom").is_no_connection());
    }

    #[test]
    fn message_accessor() {
        assert_eq!(FetchError::remote("boom").message(), Some("boom"));
        assert_eq!(FetchError::Remote { message: None }.message(), None);
    }

    #[test]
    fn initial_load() {
        assert!(FetchState::<()>::loading().is_initial_load());
        assert!(!FetchState::success(()).is_initial_load());
        let refetching = FetchState {
            data: Some(()),
            error: None,
            loading: true,
        };
        assert!(!refetching.is_initial_load());
    }
}
