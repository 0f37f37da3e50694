//! Error types for contentdash
//!
//! This module defines the error types used throughout the client,
//! using `thiserror` for ergonomic error handling.
//!
//! Two layers exist: [`ApiError`] is returned by the remote API facade and
//! carries a normalized human-readable message, while [`DashError`] covers
//! everything else (configuration, local storage, validation) and wraps
//! [`ApiError`] when a facade failure propagates further up.

use thiserror::Error;

/// Error returned by the remote API facade
///
/// Each variant carries a message that is safe to show to the user as-is.
/// The message of [`ApiError::Http`] has already been extracted from the
/// backend error body (`detail` or `message`) so views never inspect
/// response shapes themselves.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...)
    #[error("Backend unavailable: {message}")]
    Transport {
        /// Description of the transport failure
        message: String,
    },

    /// The backend answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Normalized message extracted from the error body
        message: String,
    },

    /// The backend answered with a body that could not be decoded
    #[error("Unexpected response: {message}")]
    Decode {
        /// Description of the decoding failure
        message: String,
    },

    /// The request was rejected locally and never sent
    #[error("Invalid request: {message}")]
    Validation {
        /// Why the request was rejected
        message: String,
    },
}

impl ApiError {
    /// The normalized message, without the variant prefix
    ///
    /// # Examples
    ///
    /// ```
    /// use contentdash::error::ApiError;
    ///
    /// let err = ApiError::Http { status: 401, message: "Invalid credentials".to_string() };
    /// assert_eq!(err.message(), "Invalid credentials");
    /// ```
    pub fn message(&self) -> &str {
        match self {
            ApiError::Transport { message }
            | ApiError::Http { message, .. }
            | ApiError::Decode { message }
            | ApiError::Validation { message } => message,
        }
    }

    /// HTTP status code, when the backend produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the failure happened before any response arrived
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport { .. })
    }
}

/// Result type returned by the API facade
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Main error type for contentdash operations
#[derive(Error, Debug)]
pub enum DashError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Remote API failures
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Input rejected before any network or storage access
    #[error("Validation error: {0}")]
    Validation(String),

    /// A protected page was requested without a session
    #[error("Not signed in: run `contentdash login` first")]
    NotSignedIn,

    /// No table with the given id exists for the current user
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// A cell coordinate is outside the table grid
    #[error("Cell ({row}, {col}) is outside a {rows}x{cols} table")]
    CellOutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Number of rows in the table
        rows: usize,
        /// Number of columns in the table
        cols: usize,
    },

    /// Local storage errors (database operations, corrupt records)
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for contentdash operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
