use std::path::Path;
use std::time::Duration;

use crate::error::MetadataError;

use super::duration::track_duration;
use super::model::AudioKind;
use super::tags::{TrackTags, read_tags};

/// Source of per-file metadata for the scanner.
pub trait MetadataProbe {
    fn tags(&self, path: &Path, kind: AudioKind) -> Result<TrackTags, MetadataError>;
    fn duration(&self, path: &Path, kind: AudioKind) -> Result<Duration, MetadataError>;
}

/// Reads tags with lofty and measures durations from the files on disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileProbe;

impl MetadataProbe for FileProbe {
    fn tags(&self, path: &Path, kind: AudioKind) -> Result<TrackTags, MetadataError> {
        read_tags(path, kind)
    }

    fn duration(&self, path: &Path, kind: AudioKind) -> Result<Duration, MetadataError> {
        track_duration(path, kind)
    }
}

/// In-memory probe keyed by file name, for tests that should not need real
/// audio files. Unknown files have no tags and zero length.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct StubProbe {
    files: std::collections::HashMap<String, (Option<String>, Option<String>, Duration)>,
    broken: std::collections::HashSet<String>,
}

#[cfg(test)]
impl StubProbe {
    pub fn with(mut self, file_name: &str, artist: Option<&str>, title: Option<&str>, secs: f64) -> Self {
        self.files.insert(
            file_name.to_string(),
            (
                artist.map(str::to_string),
                title.map(str::to_string),
                Duration::from_secs_f64(secs),
            ),
        );
        self
    }

    /// Make every lookup for `file_name` fail.
    pub fn broken(mut self, file_name: &str) -> Self {
        self.broken.insert(file_name.to_string());
        self
    }

    fn lookup(&self, path: &Path) -> Result<Option<&(Option<String>, Option<String>, Duration)>, MetadataError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.broken.contains(&name) {
            return Err(MetadataError::NoAudioTrack);
        }
        Ok(self.files.get(&name))
    }
}

#[cfg(test)]
impl MetadataProbe for StubProbe {
    fn tags(&self, path: &Path, kind: AudioKind) -> Result<TrackTags, MetadataError> {
        let (artist, title) = self
            .lookup(path)?
            .map(|(a, t, _)| (a.clone(), t.clone()))
            .unwrap_or_default();
        Ok(match kind {
            AudioKind::Mp3 => TrackTags::Mp3(super::tags::Mp3Tags { artist, title }),
            AudioKind::Flac => TrackTags::Flac(super::tags::FlacTags { artist, title }),
        })
    }

    fn duration(&self, path: &Path, _kind: AudioKind) -> Result<Duration, MetadataError> {
        Ok(self.lookup(path)?.map(|(_, _, d)| *d).unwrap_or_default())
    }
}
