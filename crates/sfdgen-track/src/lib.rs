//! Track library for the SFD ("sound frequency duration") melody format.
//!
//! This crate turns human-editable note sheets (JSON or header-driven CSV)
//! into the compact fixed-width binary layout played back by the buzzer
//! firmware: a loop flag plus an ordered sequence of (frequency, duration)
//! pairs, frequencies in hertz and durations in milliseconds.
//!
//! # Example
//!
//! ```
//! use sfdgen_track::{Note, Track};
//! use sfdgen_track::sfd::{read_track_bytes, track_to_bytes};
//!
//! let mut track = Track::new(true);
//! track.add_note(Note::new(440, 500));
//! track.add_note(Note::new(880, 250));
//!
//! let bytes = track_to_bytes(&track).unwrap();
//! assert_eq!(&bytes[0..5], b"sfdV1");
//!
//! // The reader decodes exactly what the writer produced.
//! assert_eq!(read_track_bytes(&bytes).unwrap(), track);
//! ```
//!
//! # Modules
//!
//! - [`track`]: the in-memory [`Note`]/[`Track`] model
//! - [`loader`]: JSON and CSV note sheet loaders, dispatched by extension
//! - [`sfd`]: SFD binary writer and reference reader
//! - [`error`]: the [`TrackError`] taxonomy shared by loaders and encoder

pub mod error;
pub mod loader;
pub mod sfd;
pub mod track;

// Re-export commonly used types at the crate root
pub use error::TrackError;
pub use loader::{load_track, SourceKind};
pub use track::{Note, Track};
