use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all nexup operations.
#[derive(Debug, Error, Diagnostic)]
pub enum NexupError {
    /// I/O operation failed (artifact file open/read, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration (malformed artifact list, unsupported Nexus version).
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check the --artifacts JSON and the --nexus-version value"))]
    Config { message: String },

    /// Network-level failure issuing an HTTP request.
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The repository manager rejected a request with a non-success status.
    #[error("Upload rejected: HTTP {status} for {url}")]
    Remote { url: String, status: u16 },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type NexupResult<T> = miette::Result<T>;
