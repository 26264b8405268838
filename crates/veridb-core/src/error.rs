//! Engine error types.

use thiserror::Error;

pub use veridb_types::ConfigError;

/// Engine-level errors.
///
/// A failed validation is *not* an error: the engine returns a failed
/// [`ValidationOutcome`](crate::ValidationOutcome) for that. `Error` means
/// the check could not be carried out at all, so callers can distinguish
/// "the value is not unique" from "we could not determine uniqueness".
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying store failed to answer a probe.
    #[error("query error: {0}")]
    Query(#[from] QueryError),

    /// The constraint itself is malformed.
    #[error("invalid constraint: {0}")]
    Config(#[from] ConfigError),
}

/// A failure reported by the backing store.
///
/// The engine never retries; retry policy belongs to the store's own
/// client layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The store backend reported a failure (network, timeout, permission).
    #[error("probe against '{collection}' failed: {message}")]
    Backend {
        /// Collection the probe targeted.
        collection: String,
        /// Backend-reported detail.
        message: String,
    },
}

impl QueryError {
    /// Wrap a backend-reported failure.
    pub fn backend(collection: impl Into<String>, message: impl Into<String>) -> Self {
        QueryError::Backend {
            collection: collection.into(),
            message: message.into(),
        }
    }
}
