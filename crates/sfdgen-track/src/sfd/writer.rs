//! SFD file writer - encodes a track into the fixed binary layout.

use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;
use std::path::Path;

use super::{SFD_HEADER_SIZE, SFD_MAGIC, SFD_NOTE_SIZE};
use crate::error::TrackError;
use crate::track::Track;

/// Write the complete SFD stream for `track`.
///
/// Fails with [`TrackError::Range`] before emitting a note whose frequency
/// or duration falls outside the unsigned 16-bit range, or when the note
/// count exceeds the unsigned 32-bit count field.
pub fn write_track<W: Write>(track: &Track, writer: &mut W) -> Result<(), TrackError> {
    // Magic identifier
    writer.write_all(SFD_MAGIC)?;

    // Loop flag
    writer.write_u8(track.looping as u8)?;

    // Note count
    let count = u32::try_from(track.notes.len()).map_err(|_| TrackError::Range {
        field: "note_count",
        value: track.notes.len() as i64,
        bits: 32,
    })?;
    writer.write_u32::<LittleEndian>(count)?;

    // Notes, in playback order
    for note in &track.notes {
        writer.write_u16::<LittleEndian>(note_field(note.frequency, "frequency")?)?;
        writer.write_u16::<LittleEndian>(note_field(note.duration, "duration")?)?;
    }

    Ok(())
}

fn note_field(value: i64, field: &'static str) -> Result<u16, TrackError> {
    u16::try_from(value).map_err(|_| TrackError::Range {
        field,
        value,
        bits: 16,
    })
}

/// Encode `track` to a byte vector.
pub fn track_to_bytes(track: &Track) -> Result<Vec<u8>, TrackError> {
    let mut buffer = Vec::with_capacity(SFD_HEADER_SIZE + track.notes.len() * SFD_NOTE_SIZE);
    write_track(track, &mut buffer)?;
    Ok(buffer)
}

/// Encode `track` and write it to `path`, replacing any existing file.
///
/// The track is encoded fully in memory first and lands on disk through a
/// temporary file in the destination directory that is renamed over the
/// destination, so a failed run never leaves a file behind that claims
/// success.
pub fn write_track_to_path(track: &Track, path: &Path) -> Result<(), TrackError> {
    let bytes = track_to_bytes(track)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(&bytes)?;
    tmp.persist(path).map_err(|e| TrackError::Io(e.error))?;

    Ok(())
}
