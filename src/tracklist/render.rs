use std::collections::BTreeSet;
use std::path::Path;
use std::time::Duration;

use crate::error::Result;
use crate::library::{MetadataProbe, Track, scan_tracks};

use super::format::{display_name, format_timestamp};
use super::sides::{SideConfig, SideCursor};

/// Scan `dir` and render its tracklist.
///
/// Returns an empty string when the folder holds no `.mp3`/`.flac` files.
pub fn generate(dir: &Path, sides: SideConfig, probe: &dyn MetadataProbe) -> Result<String> {
    let tracks = scan_tracks(dir, probe)?;
    let text = render(&tracks, sides);
    tracing::info!(dir = %dir.display(), tracks = tracks.len(), ?sides, "generated tracklist");
    Ok(text)
}

/// Distinct non-empty artist names across `tracks`.
pub fn distinct_artists(tracks: &[Track]) -> BTreeSet<&str> {
    tracks
        .iter()
        .filter_map(|t| t.artist.as_deref())
        .filter(|a| !a.is_empty())
        .collect()
}

/// One `label. name timestamp` line per track, each ending in `\n`.
///
/// A track's timestamp is the sum of the lengths of the tracks before it.
pub fn render(tracks: &[Track], sides: SideConfig) -> String {
    let multiple_artists = distinct_artists(tracks).len() > 1;
    let mut cursor = SideCursor::new(sides);
    let mut elapsed = Duration::ZERO;
    let mut out = String::new();

    for track in tracks {
        let name = display_name(
            track.artist.as_deref(),
            track.title.as_deref(),
            &track.file_name,
            multiple_artists,
        );
        let label = cursor.next_label(track.position);
        let timestamp = format_timestamp(elapsed.as_secs_f64());

        out.push_str(&format!("{label}. {name} {timestamp}\n"));
        elapsed += track.duration;
    }

    out
}
