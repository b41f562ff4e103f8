//! Constants for address validation and remote result decoding.

/// DNS label maximum length.
pub const MAX_DNS_LABEL_LENGTH: usize = 63;

/// Lowest port accepted by the address validator.
pub const MIN_PORT: u16 = 1;

/// Highest port accepted by the address validator.
pub const MAX_PORT: u16 = 65535;

/// Wire discriminant of the well-formed connection state record.
pub const TYPENAME_CONNECTION_INFO: &str = "ConnectionInfo";

/// Wire discriminant of a transport failure between server and flashcard app.
pub const TYPENAME_CONNECTION_ERROR: &str = "ConnectionError";

/// Wire discriminant of a request rejected because of its origin.
pub const TYPENAME_FORBIDDEN_ORIGIN: &str = "ForbiddenOrigin";

/// Wire discriminant of a rejected API key.
pub const TYPENAME_INVALID_API_KEY: &str = "InvalidApiKey";

/// Wire discriminant of a flashcard collection that is not open.
pub const TYPENAME_COLLECTION_UNAVAILABLE: &str = "CollectionUnavailable";

/// Wire discriminant of an unclassified remote failure.
pub const TYPENAME_UNKNOWN_ERROR: &str = "UnknownError";
