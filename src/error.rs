//! Error types for registry operations
//!
//! The regression check itself is designed to degrade rather than fail;
//! these errors surface only on the explicit registry-mutation path
//! (unknown id, storage trouble), where the caller asked for a specific
//! record by name and deserves a real answer.

use thiserror::Error;

/// Errors from failure registry operations
#[derive(Debug, Error)]
pub enum RegistryError {
    /// An id-targeted operation named a record that does not exist
    #[error("Failure {0} not found in registry")]
    NotFound(String),

    /// The registry file could not be read or written
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A record could not be serialized
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),

    /// The atomic replace of the registry file failed
    #[error("Could not replace registry file: {0}")]
    Persist(#[from] tempfile::PersistError),
}
