//! Provider error taxonomy
//!
//! Validation and remote errors always abort the operation and surface to
//! the caller; codec failures on read paths degrade to an empty field plus a
//! warning diagnostic instead. No operation partially writes a record.

use capstan_client::ClientError;
use thiserror::Error;

/// Result type alias for provider operations
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Errors surfaced by resource and data-source operations
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Caller error, detected before any remote call is attempted
    #[error("validation failed: {0}")]
    Validation(String),

    /// Create precondition violated; nothing was mutated
    #[error("job '{0}' already exists on the server")]
    AlreadyExists(String),

    /// The remote job does not exist
    ///
    /// Fatal for the data source; the managed resource expresses the same
    /// condition as drift (`ReadOutcome::Removed`) during read and as a
    /// no-op success during delete.
    #[error("job '{0}' not found on the server")]
    NotFound(String),

    /// Transport, auth, or unexpected-status failure from the server
    #[error("remote call failed: {0}")]
    Remote(#[from] ClientError),
}
