/// Format a start offset in seconds as `MM:SS.ss`.
///
/// Minutes are not wrapped into hours, so an hour-long side reads `62:05.00`.
pub fn format_timestamp(total_seconds: f64) -> String {
    let total_seconds = total_seconds.max(0.0);
    let minutes = (total_seconds / 60.0).trunc() as u64;
    let seconds = total_seconds % 60.0;
    format!("{minutes:02}:{seconds:05.2}")
}

/// Pick the text shown for a track.
///
/// `"Artist - Title"` is only used when the folder mixes artists; otherwise
/// the title alone, and the file name when there is no title.
pub fn display_name(
    artist: Option<&str>,
    title: Option<&str>,
    file_name: &str,
    multiple_artists: bool,
) -> String {
    match (artist, title) {
        (Some(artist), Some(title)) if multiple_artists => format!("{artist} - {title}"),
        (_, Some(title)) => title.to_string(),
        _ => file_name.to_string(),
    }
}
