//! JSON note sheet loader.
//!
//! The document must be an object with a boolean `looping` and an array
//! `notes` of `{frequency, duration}` objects. Values are extracted with
//! explicit typed lookups; there is no truthiness coercion, and range
//! checks happen at encode time rather than here.

use serde_json::{Map, Value};

use crate::error::TrackError;
use crate::track::{Note, Track};

/// Parse a JSON note sheet into a track.
pub(crate) fn parse_track(content: &str) -> Result<Track, TrackError> {
    let doc: Value = serde_json::from_str(content)
        .map_err(|e| TrackError::MalformedInput(format!("invalid JSON: {e}")))?;

    let root = doc
        .as_object()
        .ok_or_else(|| TrackError::MalformedInput("top-level value must be an object".to_string()))?;

    let looping_value = root
        .get("looping")
        .ok_or_else(|| TrackError::MalformedInput("missing 'looping' field".to_string()))?;
    let looping = looping_value
        .as_bool()
        .ok_or_else(|| TrackError::TypeCoercion {
            field: "looping".to_string(),
            value: looping_value.to_string(),
            expected: "a boolean",
        })?;

    let notes_value = root
        .get("notes")
        .ok_or_else(|| TrackError::MalformedInput("missing 'notes' field".to_string()))?;
    let entries = notes_value
        .as_array()
        .ok_or_else(|| TrackError::MalformedInput("'notes' must be an array".to_string()))?;

    let mut track = Track::new(looping);
    for (index, entry) in entries.iter().enumerate() {
        let note = entry.as_object().ok_or_else(|| {
            TrackError::MalformedInput(format!("notes[{index}] must be an object"))
        })?;

        let frequency = integer_field(note, index, "frequency")?;
        let duration = integer_field(note, index, "duration")?;
        track.add_note(Note::new(frequency, duration));
    }

    Ok(track)
}

/// Look up a required integer field on one note object.
fn integer_field(note: &Map<String, Value>, index: usize, name: &str) -> Result<i64, TrackError> {
    let value = note.get(name).ok_or_else(|| {
        TrackError::MalformedInput(format!("notes[{index}] is missing '{name}'"))
    })?;

    value.as_i64().ok_or_else(|| TrackError::TypeCoercion {
        field: format!("notes[{index}].{name}"),
        value: value.to_string(),
        expected: "an integer",
    })
}
