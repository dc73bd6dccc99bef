//! Convert command implementation
//!
//! Loads a note sheet and encodes it into an SFD file.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use sfdgen_track::loader::load_track;
use sfdgen_track::sfd::write_track_to_path;

/// Run the conversion.
///
/// # Arguments
/// * `input` - Path to the note sheet (.json or .csv)
/// * `output` - Destination path for the encoded file
///
/// # Returns
/// Exit code: 0 success, error otherwise
pub fn run(input: &Path, output: &Path) -> Result<ExitCode> {
    let track = load_track(input)
        .with_context(|| format!("failed to load '{}'", input.display()))?;

    write_track_to_path(&track, output)
        .with_context(|| format!("failed to write '{}'", output.display()))?;

    println!(
        "{} Wrote {} notes to {}",
        "✓".green().bold(),
        track.note_count(),
        output.display()
    );

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfdgen_track::error::TrackError;
    use sfdgen_track::sfd::read_track_bytes;

    #[test]
    fn test_converts_json_sheet() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("melody.json");
        let output = tmp.path().join("melody.sfd");
        std::fs::write(
            &input,
            r#"{"looping": true, "notes": [{"frequency":440,"duration":500}]}"#,
        )
        .unwrap();

        run(&input, &output).unwrap();

        let track = read_track_bytes(&std::fs::read(&output).unwrap()).unwrap();
        assert!(track.looping);
        assert_eq!(track.note_count(), 1);
    }

    #[test]
    fn test_converts_csv_sheet() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("melody.csv");
        let output = tmp.path().join("melody.sfd");
        std::fs::write(&input, "frequency,duration\n220,100\n330,200\n").unwrap();

        run(&input, &output).unwrap();

        let track = read_track_bytes(&std::fs::read(&output).unwrap()).unwrap();
        assert!(!track.looping);
        assert_eq!(track.note_count(), 2);
    }

    #[test]
    fn test_unsupported_extension_creates_no_output() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("melody.txt");
        let output = tmp.path().join("melody.sfd");
        std::fs::write(&input, "frequency,duration\n220,100\n").unwrap();

        let err = run(&input, &output).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TrackError>(),
            Some(TrackError::UnsupportedFormat { .. })
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_range_failure_creates_no_output() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("melody.json");
        let output = tmp.path().join("melody.sfd");
        std::fs::write(
            &input,
            r#"{"looping": false, "notes": [{"frequency":65536,"duration":500}]}"#,
        )
        .unwrap();

        let err = run(&input, &output).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TrackError>(),
            Some(TrackError::Range { .. })
        ));
        assert!(!output.exists());
    }
}
