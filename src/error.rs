//! Unified error types for vmgpack.
//!
//! This module provides a single [`VmgError`] enum that covers all error
//! cases in the library.
//!
//! # What counts as an error
//!
//! Only problems that stop a container from being turned into text are
//! errors: unreadable files and bytes that are not valid UTF-16. Missing or
//! malformed fields inside a container never fail; they degrade to defaults
//! (empty phone number, epoch timestamp, empty body).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for vmgpack operations.
///
/// # Example
///
/// ```rust
/// use vmgpack::error::Result;
/// use vmgpack::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, VmgError>;

/// The error type for all vmgpack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VmgError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input directory doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A container file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// The container that failed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The container bytes are not valid UTF-16.
    #[error("Failed to decode VMG container{}: {message}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Decode {
        /// The file path, if available
        path: Option<PathBuf>,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The requested output format is unknown or unavailable.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The kind of format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// UTF-8 encoding error.
    ///
    /// Occurs when rendered output is turned back into a `String`.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for VmgError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        VmgError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl VmgError {
    /// Creates a read error for a container path.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        VmgError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a UTF-16 decoding error.
    pub fn decode(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        VmgError::Decode {
            path,
            message: message.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        VmgError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Attaches a file path to a decode error that doesn't have one yet.
    #[must_use]
    pub fn with_path(self, file: impl Into<PathBuf>) -> Self {
        match self {
            VmgError::Decode {
                path: None,
                message,
            } => VmgError::Decode {
                path: Some(file.into()),
                message,
            },
            other => other,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, VmgError::Io(_) | VmgError::Read { .. })
    }

    /// Returns `true` if this is a decoding error.
    pub fn is_decode(&self) -> bool {
        matches!(self, VmgError::Decode { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, VmgError::InvalidFormat { .. })
    }
}
