//! Error types for the address registry.

use thiserror::Error;

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Registry errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Text or numeric input that does not describe an IPv4 address.
    #[error("Invalid IP address: {0}")]
    InvalidAddress(String),

    /// Removal of an organization or block that is not held.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Error::InvalidAddress(reason.into())
    }
}
