//! SFD byte-stream reader used to check writer output.

use super::{SFD_HEADER_SIZE, SFD_MAGIC, SFD_NOTE_SIZE};
use crate::track::{Note, Track};

/// SFD structural error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SfdFormatError {
    /// Input is shorter than the fixed header.
    FileTooSmall(usize),
    /// Magic identifier mismatch.
    InvalidMagic,
    /// Loop flag byte is neither 0 nor 1.
    InvalidLoopFlag(u8),
    /// Note count promises more records than the payload holds.
    TruncatedNotes { expected: u32, available: u32 },
    /// Bytes remain after the last note record.
    TrailingData(usize),
}

impl std::fmt::Display for SfdFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SfdFormatError::FileTooSmall(size) => {
                write!(f, "File too small: {} bytes", size)
            }
            SfdFormatError::InvalidMagic => {
                write!(f, "Invalid SFD magic identifier")
            }
            SfdFormatError::InvalidLoopFlag(flag) => {
                write!(f, "Invalid loop flag: {}", flag)
            }
            SfdFormatError::TruncatedNotes {
                expected,
                available,
            } => {
                write!(
                    f,
                    "Note count says {} notes but payload holds {}",
                    expected, available
                )
            }
            SfdFormatError::TrailingData(bytes) => {
                write!(f, "{} trailing bytes after the last note", bytes)
            }
        }
    }
}

impl std::error::Error for SfdFormatError {}

/// Decode an SFD byte stream back into a track.
///
/// This mirrors what the playback firmware reads, with stricter structure
/// checks: the loop flag must be exactly 0 or 1 and the payload must match
/// the note count to the byte.
pub fn read_track_bytes(data: &[u8]) -> Result<Track, SfdFormatError> {
    if data.len() < SFD_HEADER_SIZE {
        return Err(SfdFormatError::FileTooSmall(data.len()));
    }

    if &data[0..SFD_MAGIC.len()] != SFD_MAGIC {
        return Err(SfdFormatError::InvalidMagic);
    }

    let looping = match data[5] {
        0 => false,
        1 => true,
        other => return Err(SfdFormatError::InvalidLoopFlag(other)),
    };

    let count = u32::from_le_bytes([data[6], data[7], data[8], data[9]]);

    let payload = &data[SFD_HEADER_SIZE..];
    let expected_len = count as u64 * SFD_NOTE_SIZE as u64;
    if (payload.len() as u64) < expected_len {
        return Err(SfdFormatError::TruncatedNotes {
            expected: count,
            available: (payload.len() / SFD_NOTE_SIZE) as u32,
        });
    }
    if (payload.len() as u64) > expected_len {
        return Err(SfdFormatError::TrailingData(
            payload.len() - expected_len as usize,
        ));
    }

    let mut track = Track::new(looping);
    for record in payload.chunks_exact(SFD_NOTE_SIZE) {
        let frequency = u16::from_le_bytes([record[0], record[1]]);
        let duration = u16::from_le_bytes([record[2], record[3]]);
        track.add_note(Note::new(frequency as i64, duration as i64));
    }

    Ok(track)
}

/// Check that `data` is a structurally valid SFD file.
pub fn validate_sfd_bytes(data: &[u8]) -> Result<(), SfdFormatError> {
    read_track_bytes(data).map(|_| ())
}
