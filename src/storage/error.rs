//! Storage error types.

use thiserror::Error;

/// Errors raised by a state store while reading or committing state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// The holder has never been given a state.
    #[error("State holder '{holder}' has no state yet")]
    Uninitialized { holder: String },

    /// The store refused the write.
    #[error("Write to state holder '{holder}' denied: {reason}")]
    Denied { holder: String, reason: String },

    /// A read-only field was modified directly after initialization.
    #[error("State field is read-only; direct modification is not allowed")]
    ReadOnly,

    /// Any other failure of the backing storage.
    #[error("State storage failed: {0}")]
    Backend(String),
}
