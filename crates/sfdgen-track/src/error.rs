//! Error types shared by the loaders and the SFD encoder.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for note sheet loading and SFD encoding.
#[derive(Debug, Error)]
pub enum TrackError {
    /// Input extension is not one of the recognized formats.
    #[error("unsupported input format for '{}' (expected .json or .csv)", .path.display())]
    UnsupportedFormat {
        /// The offending input path.
        path: PathBuf,
    },

    /// A required structural field or column is missing, or the input is
    /// not syntactically valid.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A value could not be interpreted as the required type.
    #[error("cannot interpret {field} value '{value}' as {expected}")]
    TypeCoercion {
        /// Which field or column held the value.
        field: String,
        /// The offending value, as written in the source.
        value: String,
        /// What the field was expected to hold.
        expected: &'static str,
    },

    /// A value does not fit the binary field width at encode time.
    #[error("{field} value {value} does not fit in an unsigned {bits}-bit field")]
    Range {
        /// Which binary field overflowed.
        field: &'static str,
        /// The offending value.
        value: i64,
        /// Width of the binary field.
        bits: u8,
    },

    /// File open, read, or write failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrackError {
    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            TrackError::UnsupportedFormat { .. } => "TRACK_001",
            TrackError::MalformedInput(_) => "TRACK_002",
            TrackError::TypeCoercion { .. } => "TRACK_003",
            TrackError::Range { .. } => "TRACK_004",
            TrackError::Io(_) => "TRACK_005",
        }
    }
}
