//! Error types for the CLI application.

use blomso_content::CatalogError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Catalog could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Claim missing or not approved for display
    #[error("Claim not found: {0}")]
    NotFound(String),

    /// Audit found issues that block strict loading
    #[error("{report}\n{blocking} blocking issue(s) found")]
    AuditFailed {
        /// Rendered audit output
        report: String,
        /// Number of error-severity issues
        blocking: usize,
    },
}
