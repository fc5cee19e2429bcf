//! Library scanning: listing a folder, reading tags and measuring durations.
//!
//! Only `.mp3` and `.flac` files directly inside the chosen folder are
//! considered. Tag and duration lookups go through [`MetadataProbe`] so the
//! generator can be exercised without real audio files.

mod duration;
mod model;
mod probe;
mod scan;
mod tags;

pub use model::*;
pub use probe::{FileProbe, MetadataProbe};
#[cfg(test)]
pub use probe::StubProbe;
pub use scan::{list_audio_files, scan_tracks};

#[cfg(test)]
mod tests;
