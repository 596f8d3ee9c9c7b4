//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use domain_monitor_remote::BackendError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Domain record not found
    #[error("Domain not found: {0}")]
    DomainNotFound(String),

    /// Malformed or duplicate input to a mutating operation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Required backend credential/URL absent before a remote operation
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Import and export errors
    #[error("Import/Export error: {0}")]
    ImportExportError(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Remote backend error (converting from library)
    #[error("{0}")]
    Backend(#[from] BackendError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist,
    /// stale remote state) — used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::DomainNotFound(_) | Self::ValidationError(_) | Self::ConfigurationError(_) => {
                true
            }
            Self::Backend(e) => e.is_expected(),
            _ => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
