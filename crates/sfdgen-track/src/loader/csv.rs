//! CSV note sheet loader.
//!
//! Header-driven: the first non-blank row names the columns. `frequency`
//! and `duration` are required (case-sensitive, any order, extra columns
//! ignored); each following row yields one note. An optional `looping`
//! column is read as nonzero-is-true and must hold the same value on every
//! data row.

use crate::error::TrackError;
use crate::track::{Note, Track};

/// Column layout discovered from the header row.
struct Header {
    frequency: usize,
    duration: usize,
    looping: Option<usize>,
}

/// Parse a CSV note sheet into a track.
pub(crate) fn parse_track(content: &str) -> Result<Track, TrackError> {
    let mut rows = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header_line) = rows
        .next()
        .ok_or_else(|| TrackError::MalformedInput("CSV input has no header row".to_string()))?;
    let header = parse_header(header_line)?;

    let mut notes = Vec::new();
    let mut looping: Option<bool> = None;

    for (line_index, line) in rows {
        let cells: Vec<&str> = line.split(',').map(str::trim).collect();
        let line_number = line_index + 1;

        let frequency = integer_cell(&cells, header.frequency, "frequency", line_number)?;
        let duration = integer_cell(&cells, header.duration, "duration", line_number)?;
        notes.push(Note::new(frequency, duration));

        if let Some(column) = header.looping {
            let flag = integer_cell(&cells, column, "looping", line_number)? != 0;
            match looping {
                None => looping = Some(flag),
                Some(previous) if previous != flag => {
                    return Err(TrackError::MalformedInput(format!(
                        "'looping' column changes value on line {line_number}; it must be constant"
                    )));
                }
                Some(_) => {}
            }
        }
    }

    let mut track = Track::new(looping.unwrap_or(false));
    track.notes = notes;
    Ok(track)
}

fn parse_header(line: &str) -> Result<Header, TrackError> {
    let columns: Vec<&str> = line.split(',').map(str::trim).collect();
    let find = |name: &str| columns.iter().position(|column| *column == name);

    let frequency = find("frequency").ok_or_else(|| {
        TrackError::MalformedInput("CSV header is missing a 'frequency' column".to_string())
    })?;
    let duration = find("duration").ok_or_else(|| {
        TrackError::MalformedInput("CSV header is missing a 'duration' column".to_string())
    })?;

    Ok(Header {
        frequency,
        duration,
        looping: find("looping"),
    })
}

fn integer_cell(
    cells: &[&str],
    column: usize,
    name: &str,
    line_number: usize,
) -> Result<i64, TrackError> {
    let raw = cells.get(column).copied().ok_or_else(|| {
        TrackError::MalformedInput(format!(
            "line {line_number} has no value for the '{name}' column"
        ))
    })?;

    raw.parse::<i64>().map_err(|_| TrackError::TypeCoercion {
        field: format!("{name} (line {line_number})"),
        value: raw.to_string(),
        expected: "an integer",
    })
}
