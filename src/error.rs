//! Error types shared by the scanner, the generator and the session.
//!
//! Messages for configuration problems are user-facing: they are shown as-is
//! in the console pane and on stderr in headless mode.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::tracklist::Side;

/// Errors that abort a generate or save request.
#[derive(Debug, Error)]
pub enum TracklistError {
    /// Generate was requested before a directory was chosen.
    #[error("Please select a directory.")]
    NoDirectory,

    /// Side mode is on but one of the capacities is not a positive number.
    #[error("Please enter a valid number of tracks for side {side}.")]
    InvalidSideCapacity { side: Side },

    /// The selected directory could not be listed.
    #[error("Failed to read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Save was requested before anything was generated.
    #[error("No tracklist generated.")]
    NothingToSave,

    /// The save destination could not be written.
    #[error("Failed to save tracklist to {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors raised while reading tags or measuring a single file.
///
/// These never abort a scan; the generator logs them and falls back.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read tags: {0}")]
    Tags(#[from] lofty::error::LoftyError),

    #[error("failed to decode audio: {0}")]
    Decode(#[from] symphonia::core::errors::Error),

    #[error("no audio track found")]
    NoAudioTrack,

    #[error("sample rate unknown")]
    UnknownSampleRate,
}

pub type Result<T> = std::result::Result<T, TracklistError>;
