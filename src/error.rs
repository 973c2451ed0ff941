//! Unified error types for kakaopack.
//!
//! Parsing itself never fails on malformed export content: the plain-text
//! parser merges or drops unrecognized lines and the CSV scanner
//! resynchronizes past broken records. The errors below cover everything
//! around that core: reading files, selecting formats, enforcing the
//! participant roster and writing output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for kakaopack operations.
///
/// # Example
///
/// ```rust
/// use kakaopack::error::Result;
/// use kakaopack::Event;
///
/// fn load() -> Result<Vec<Event>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, KakaopackError>;

/// The error type for all kakaopack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KakaopackError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A file could not be read, with the offending path attached.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// The file that could not be read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The requested or detected format is not one kakaopack understands.
    ///
    /// This occurs when:
    /// - An unknown export format name is given (`--source foo`)
    /// - An output path has an unrecognized extension
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The kind of format that was expected ("export", "output")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// More than two distinct authors were found while the roster policy
    /// requires a strict two-party conversation.
    #[error(
        "Expected a two-party conversation but found {count} participants: {}",
        names.join(", ")
    )]
    TooManyParticipants {
        /// Number of distinct authors
        count: usize,
        /// Their normalized display names, in order of first appearance
        names: Vec<String>,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    ///
    /// Occurs when writer output is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for KakaopackError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        KakaopackError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl KakaopackError {
    /// Creates a read error for a specific path.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        KakaopackError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        KakaopackError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates a roster error from the list of distinct author names.
    pub fn too_many_participants(names: Vec<String>) -> Self {
        KakaopackError::TooManyParticipants {
            count: names.len(),
            names,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, KakaopackError::Io(_) | KakaopackError::Read { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, KakaopackError::InvalidFormat { .. })
    }

    /// Returns `true` if the roster policy rejected the conversation.
    pub fn is_roster(&self) -> bool {
        matches!(self, KakaopackError::TooManyParticipants { .. })
    }
}
