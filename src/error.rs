//! Unified error types for chatstat.
//!
//! Parsing and aggregation never fail: malformed entries are dropped and
//! unknown selectors produce empty results. Errors only come from the
//! boundary, i.e. reading the export, reading a stop-word file, or
//! writing a report.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstat operations.
///
/// # Example
///
/// ```rust
/// use chatstat::error::Result;
/// use chatstat::MessageTable;
///
/// fn load() -> Result<MessageTable> {
///     Ok(MessageTable::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatError>;

/// The error type for all chatstat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The export file doesn't exist
    /// - Permission denied
    /// - A stop-word file can't be read
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input file is not valid UTF-8 text.
    #[error("{} is not valid UTF-8: {source}", path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "input".to_string()))]
    Utf8 {
        /// The file path, if available
        path: Option<PathBuf>,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Unknown date order name.
    #[error("Invalid date order '{input}'. Expected one of: {expected}")]
    InvalidDateOrder {
        /// The string that was provided
        input: String,
        /// Accepted values
        expected: &'static str,
    },

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ChatstatError {
    /// Creates a UTF-8 error for the given file.
    pub fn utf8(source: std::string::FromUtf8Error, path: Option<PathBuf>) -> Self {
        ChatstatError::Utf8 { path, source }
    }

    /// Creates an invalid date order error.
    pub fn invalid_date_order(input: impl Into<String>) -> Self {
        ChatstatError::InvalidDateOrder {
            input: input.into(),
            expected: "day-first, month-first",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatError::Io(_))
    }

    /// Returns `true` if the input was not UTF-8.
    pub fn is_utf8(&self) -> bool {
        matches!(self, ChatstatError::Utf8 { .. })
    }
}
