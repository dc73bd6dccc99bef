//! Byte-level tests for the SFD writer, checked against the reference reader.

use pretty_assertions::assert_eq;
use quickcheck_macros::quickcheck;

use sfdgen_track::error::TrackError;
use sfdgen_track::sfd::{
    read_track_bytes, track_to_bytes, write_track_to_path, SFD_HEADER_SIZE,
};
use sfdgen_track::track::{Note, Track};

#[test]
fn known_sheet_encodes_to_exact_bytes() {
    // {"looping": true, "notes": [{440,500},{880,250}]}
    let mut track = Track::new(true);
    track.add_note(Note::new(440, 500));
    track.add_note(Note::new(880, 250));

    let bytes = track_to_bytes(&track).unwrap();

    let expected: Vec<u8> = [
        &[0x73, 0x66, 0x64, 0x56, 0x31][..], // "sfdV1"
        &[0x01],                             // looping
        &[0x02, 0x00, 0x00, 0x00],           // note_count = 2
        &[0xB8, 0x01, 0xF4, 0x01],           // 440 Hz, 500 ms
        &[0x70, 0x03, 0xFA, 0x00],           // 880 Hz, 250 ms
    ]
    .concat();
    assert_eq!(bytes, expected);
}

#[test]
fn empty_track_is_a_ten_byte_file() {
    let bytes = track_to_bytes(&Track::new(false)).unwrap();
    assert_eq!(bytes.len(), SFD_HEADER_SIZE);
    assert_eq!(&bytes[6..10], &[0, 0, 0, 0]);
}

#[test]
fn non_looping_track_keeps_record_order() {
    let mut track = Track::new(false);
    track.add_note(Note::new(220, 100));
    track.add_note(Note::new(330, 200));

    let bytes = track_to_bytes(&track).unwrap();

    assert_eq!(bytes[5], 0x00);
    assert_eq!(&bytes[6..10], &[0x02, 0x00, 0x00, 0x00]);
    assert_eq!(&bytes[10..14], &[0xDC, 0x00, 0x64, 0x00]); // 220, 100
    assert_eq!(&bytes[14..18], &[0x4A, 0x01, 0xC8, 0x00]); // 330, 200
}

#[test]
fn boundary_value_succeeds_and_one_past_fails() {
    let mut track = Track::new(false);
    track.add_note(Note::new(65535, 65535));
    assert!(track_to_bytes(&track).is_ok());

    let mut track = Track::new(false);
    track.add_note(Note::new(440, 65536));
    let err = track_to_bytes(&track).unwrap_err();
    assert!(matches!(err, TrackError::Range { field: "duration", .. }));
    assert_eq!(err.code(), "TRACK_004");
}

#[quickcheck]
fn round_trip_preserves_track(looping: bool, notes: Vec<(u16, u16)>) -> bool {
    let mut track = Track::new(looping);
    for (frequency, duration) in notes {
        track.add_note(Note::new(frequency as i64, duration as i64));
    }

    let bytes = track_to_bytes(&track).unwrap();
    read_track_bytes(&bytes).as_ref() == Ok(&track)
}

#[test]
fn failed_encode_leaves_no_file_behind() {
    let tmp = tempfile::tempdir().unwrap();
    let out_path = tmp.path().join("melody.sfd");

    let mut track = Track::new(false);
    track.add_note(Note::new(65536, 500));

    assert!(write_track_to_path(&track, &out_path).is_err());
    assert!(!out_path.exists());
}

#[test]
fn failed_encode_keeps_existing_file_intact() {
    let tmp = tempfile::tempdir().unwrap();
    let out_path = tmp.path().join("melody.sfd");
    std::fs::write(&out_path, b"previous run").unwrap();

    let mut track = Track::new(false);
    track.add_note(Note::new(-1, 500));

    assert!(write_track_to_path(&track, &out_path).is_err());
    assert_eq!(std::fs::read(&out_path).unwrap(), b"previous run");
}

#[test]
fn write_to_path_overwrites_on_success() {
    let tmp = tempfile::tempdir().unwrap();
    let out_path = tmp.path().join("melody.sfd");
    std::fs::write(&out_path, b"previous run").unwrap();

    let mut track = Track::new(true);
    track.add_note(Note::new(440, 500));
    write_track_to_path(&track, &out_path).unwrap();

    let bytes = std::fs::read(&out_path).unwrap();
    assert_eq!(read_track_bytes(&bytes).unwrap(), track);
}
