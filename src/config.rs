//! Configuration for endpoint validation.

use crate::constants::{MAX_DNS_LABEL_LENGTH, MAX_PORT, MIN_PORT};

/// Bounds applied by [`validate_address_with`](crate::validate_address_with).
///
/// The default accepts ports `1..=65535` and DNS labels of up to 63
/// characters, which is what [`validate_address`](crate::validate_address)
/// uses.
///
/// # Examples
///
/// ```
/// use lexicard::ValidationConfig;
///
/// let config = ValidationConfig::default().with_port_range(1024, 49151);
/// assert_eq!(config.min_port, 1024);
/// assert_eq!(config.max_port, 49151);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Lowest accepted port.
    ///
    /// Default: 1
    pub min_port: u16,

    /// Highest accepted port.
    ///
    /// Default: 65535
    pub max_port: u16,

    /// Longest accepted hostname label.
    ///
    /// Default: 63
    pub max_label_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_port: MIN_PORT,
            max_port: MAX_PORT,
            max_label_length: MAX_DNS_LABEL_LENGTH,
        }
    }
}

impl ValidationConfig {
    /// Sets the accepted port range, inclusive on both ends.
    #[must_use]
    pub const fn with_port_range(mut self, min: u16, max: u16) -> Self {
        self.min_port = min;
        self.max_port = max;
        self
    }

    /// Sets the longest accepted hostname label.
    #[must_use]
    pub const fn with_max_label_length(mut self, max: usize) -> Self {
        self.max_label_length = max;
        self
    }
}
