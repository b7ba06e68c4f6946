//! Error types for the World Cuisines plugin.
//!
//! This module defines the crate-wide error type [`CuisineError`], the
//! request-scoped [`SubmissionError`] surfaced to users after a failed round
//! trip, and a [`Result`] alias. Both are built on `thiserror`.
//!
//! Field-level validation failures are not errors in this sense. They live in
//! the form state as plain messages and never travel through `Result`.

use thiserror::Error;

/// The main error type for World Cuisines operations.
///
/// Consolidates configuration, theme, catalog and wire failures. Variants that
/// wrap foreign errors use `#[from]` so `?` converts them automatically.
///
/// # Examples
///
/// ```
/// use world_cuisines::CuisineError;
///
/// fn check_theme(name: &str) -> Result<(), CuisineError> {
///     Err(CuisineError::Theme(format!("unknown theme '{name}'")))
/// }
///
/// assert!(check_theme("neon").is_err());
/// ```
#[derive(Debug, Error)]
pub enum CuisineError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The embedded cuisine catalog is malformed.
    ///
    /// Raised for TOML syntax problems, duplicate or blank ids, and blank
    /// categories.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A form operation named a field the form does not declare.
    #[error("Unknown form field '{0}'")]
    UnknownField(String),

    /// JSON encoding or decoding failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A backend round trip failed.
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// A failed backend round trip, reduced to what the user sees.
///
/// `message` is already user-facing: it is either the backend's own message
/// or a generic fallback chosen by the caller. `status` is the HTTP status
/// when one was received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SubmissionError {
    /// HTTP status code of the reply, if any.
    pub status: Option<u16>,
    /// Single user-facing message.
    pub message: String,
}

impl SubmissionError {
    /// Builds an error from a reply status and message.
    #[must_use]
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// A specialized `Result` type for World Cuisines operations.
pub type Result<T> = std::result::Result<T, CuisineError>;
