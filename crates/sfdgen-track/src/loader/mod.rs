//! Input abstraction for loading tracks from JSON or CSV note sheets.
//!
//! This module provides a unified interface for loading a [`Track`] from the
//! supported source formats. It dispatches by file extension and leaves all
//! range checking to the encoder.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::TrackError;
use crate::track::Track;

mod csv;
mod json;

/// Recognized JSON extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Recognized CSV extensions.
pub const CSV_EXTENSIONS: &[&str] = &["csv"];

/// Identifies the source format of a note sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// JSON note sheet.
    Json,
    /// Header-driven CSV note sheet.
    Csv,
}

impl SourceKind {
    /// Returns the string representation for messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Json => "json",
            SourceKind::Csv => "csv",
        }
    }

    /// Detect the source kind from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<SourceKind> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase());

        match extension.as_deref() {
            Some(ext) if JSON_EXTENSIONS.contains(&ext) => Some(SourceKind::Json),
            Some(ext) if CSV_EXTENSIONS.contains(&ext) => Some(SourceKind::Csv),
            _ => None,
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Load a track from a file path, dispatching by extension.
///
/// # Arguments
/// * `path` - Path to the note sheet (.json or .csv)
///
/// # Returns
/// * `Ok(Track)` - Successfully loaded and parsed track
/// * `Err(TrackError)` - Unsupported extension, file read, or parse error
pub fn load_track(path: &Path) -> Result<Track, TrackError> {
    let kind = SourceKind::from_path(path).ok_or_else(|| TrackError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = std::fs::read_to_string(path)?;

    match kind {
        SourceKind::Json => json::parse_track(&content),
        SourceKind::Csv => csv::parse_track(&content),
    }
}
