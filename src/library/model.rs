use std::path::{Path, PathBuf};
use std::time::Duration;

/// The two codecs the scanner understands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AudioKind {
    Mp3,
    Flac,
}

impl AudioKind {
    /// Recognize a file by its extension. Matching is exact: `song.MP3` is
    /// not picked up.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("mp3") => Some(Self::Mp3),
            Some("flac") => Some(Self::Flac),
            _ => None,
        }
    }
}

/// A recognized audio file in listing order, before any metadata is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioEntry {
    pub path: PathBuf,
    pub file_name: String,
    pub kind: AudioKind,
}

/// One line's worth of data for the tracklist.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub file_name: String,
    pub artist: Option<String>,
    pub title: Option<String>,
    pub duration: Duration,
    /// 1-based position in listing order.
    pub position: usize,
}
