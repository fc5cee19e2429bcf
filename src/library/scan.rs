use std::io;
use std::path::Path;
use std::time::Duration;

use walkdir::WalkDir;

use crate::error::{Result, TracklistError};

use super::model::{AudioEntry, AudioKind, Track};
use super::probe::MetadataProbe;

/// List the `.mp3`/`.flac` files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not entered. Unreadable entries below the root are
/// skipped with a warning; an unreadable root is an error.
pub fn list_audio_files(dir: &Path) -> Result<Vec<AudioEntry>> {
    if !dir.is_dir() {
        return Err(TracklistError::ReadDir {
            path: dir.to_path_buf(),
            source: io::Error::other("not a directory"),
        });
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut entries = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(TracklistError::ReadDir {
                    path: dir.to_path_buf(),
                    source: io::Error::from(e),
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let Some(kind) = AudioKind::from_path(path) else {
            continue;
        };

        entries.push(AudioEntry {
            path: path.to_path_buf(),
            file_name: entry.file_name().to_string_lossy().into_owned(),
            kind,
        });
    }

    Ok(entries)
}

/// List `dir` and read tags and duration for every recognized file.
///
/// A file whose tags cannot be read is kept as untagged; a file whose length
/// cannot be measured counts as zero seconds.
pub fn scan_tracks(dir: &Path, probe: &dyn MetadataProbe) -> Result<Vec<Track>> {
    let entries = list_audio_files(dir)?;
    let mut tracks = Vec::with_capacity(entries.len());

    for (i, entry) in entries.into_iter().enumerate() {
        let (artist, title) = match probe.tags(&entry.path, entry.kind) {
            Ok(tags) => (
                tags.artist().map(str::to_string),
                tags.title().map(str::to_string),
            ),
            Err(e) => {
                tracing::warn!(file = %entry.file_name, error = %e, "cannot read tags, using file name");
                (None, None)
            }
        };

        let duration = match probe.duration(&entry.path, entry.kind) {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!(file = %entry.file_name, error = %e, "cannot measure duration, counting 0s");
                Duration::ZERO
            }
        };

        tracing::debug!(
            file = %entry.file_name,
            artist = ?artist,
            title = ?title,
            duration_s = duration.as_secs_f64(),
            "scanned track"
        );

        tracks.push(Track {
            file_name: entry.file_name,
            artist,
            title,
            duration,
            position: i + 1,
        });
    }

    Ok(tracks)
}
