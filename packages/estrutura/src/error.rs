//! Error types for the structural validator.

use thiserror::Error;

/// Main error type for the estrutura library.
#[derive(Debug, Error)]
pub enum EstruturaError {
    /// Invalid source URL.
    #[error("Invalid URL: '{0}'. Expected an http:// or https:// address")]
    InvalidUrl(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A source returned a status that does not warrant trying other sources.
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    /// All configured sources failed.
    #[error("All {attempts} source(s) failed; last error: {message}")]
    SourcesExhausted { attempts: usize, message: String },

    /// Downloaded document contained no usable text.
    #[error("Document from {0} contained no text after HTML stripping")]
    EmptyDocument(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for estrutura operations.
pub type Result<T> = std::result::Result<T, EstruturaError>;
