use super::tags::{FlacTags, Mp3Tags, TrackTags};
use super::*;
use crate::tracklist::{SideConfig, generate};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn audio_kind_matches_lowercase_extensions_only() {
    assert_eq!(AudioKind::from_path(Path::new("/tmp/a.mp3")), Some(AudioKind::Mp3));
    assert_eq!(AudioKind::from_path(Path::new("/tmp/a.flac")), Some(AudioKind::Flac));
    assert_eq!(AudioKind::from_path(Path::new("/tmp/a.MP3")), None);
    assert_eq!(AudioKind::from_path(Path::new("/tmp/a.ogg")), None);
    assert_eq!(AudioKind::from_path(Path::new("/tmp/a.wav")), None);
    assert_eq!(AudioKind::from_path(Path::new("/tmp/a")), None);
}

#[test]
fn list_audio_files_filters_and_sorts_by_name() {
    let dir = tempdir().unwrap();

    fs::write(dir.path().join("b.flac"), b"x").unwrap();
    fs::write(dir.path().join("a.mp3"), b"x").unwrap();
    fs::write(dir.path().join("C.mp3"), b"x").unwrap();
    fs::write(dir.path().join("cover.jpg"), b"x").unwrap();
    fs::write(dir.path().join("loud.MP3"), b"x").unwrap();

    let entries = list_audio_files(dir.path()).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.file_name.as_str()).collect();
    // Byte order: uppercase sorts before lowercase.
    assert_eq!(names, vec!["C.mp3", "a.mp3", "b.flac"]);
    assert_eq!(entries[2].kind, AudioKind::Flac);
}

#[test]
fn list_audio_files_does_not_descend_into_subdirectories() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("root.mp3"), b"x").unwrap();
    let sub = dir.path().join("disc2.mp3");
    fs::create_dir_all(&sub).unwrap();
    fs::write(sub.join("child.mp3"), b"x").unwrap();

    let entries = list_audio_files(dir.path()).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].file_name, "root.mp3");
}

#[test]
fn list_audio_files_keeps_dotfiles() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".intro.mp3"), b"x").unwrap();
    fs::write(dir.path().join("song.mp3"), b"x").unwrap();

    let entries = list_audio_files(dir.path()).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].file_name, ".intro.mp3");
}

#[test]
fn list_audio_files_errors_on_missing_directory() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("gone");
    assert!(matches!(
        list_audio_files(&missing),
        Err(crate::error::TracklistError::ReadDir { .. })
    ));
}

#[test]
fn list_audio_files_errors_on_plain_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.mp3");
    fs::write(&file, b"x").unwrap();
    assert!(list_audio_files(&file).is_err());
}

#[test]
fn scan_tracks_numbers_positions_and_copies_probe_data() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("01.mp3"), b"x").unwrap();
    fs::write(dir.path().join("02.flac"), b"x").unwrap();

    let probe = StubProbe::default()
        .with("01.mp3", Some("Artist"), Some("One"), 61.25)
        .with("02.flac", None, Some("Two"), 30.0);

    let tracks = scan_tracks(dir.path(), &probe).unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].position, 1);
    assert_eq!(tracks[0].artist.as_deref(), Some("Artist"));
    assert_eq!(tracks[0].title.as_deref(), Some("One"));
    assert_eq!(tracks[0].duration, Duration::from_secs_f64(61.25));
    assert_eq!(tracks[1].position, 2);
    assert_eq!(tracks[1].file_name, "02.flac");
    assert_eq!(tracks[1].artist, None);
}

#[test]
fn scan_tracks_recovers_from_broken_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.mp3"), b"x").unwrap();
    fs::write(dir.path().join("b.mp3"), b"x").unwrap();

    let probe = StubProbe::default()
        .broken("a.mp3")
        .with("b.mp3", None, Some("Fine"), 10.0);

    let tracks = scan_tracks(dir.path(), &probe).unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].title, None);
    assert_eq!(tracks[0].duration, Duration::ZERO);
    assert_eq!(tracks[1].title.as_deref(), Some("Fine"));
}

#[test]
fn scan_tracks_with_file_probe_survives_garbage_audio() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.mp3"), b"not a real mp3").unwrap();
    fs::write(dir.path().join("b.flac"), b"not a real flac").unwrap();

    let tracks = scan_tracks(dir.path(), &FileProbe).unwrap();
    assert_eq!(tracks.len(), 2);
    assert!(tracks.iter().all(|t| t.artist.is_none() && t.title.is_none()));
    assert!(tracks.iter().all(|t| t.duration == Duration::ZERO));
}

/// Silent MPEG-1 Layer III frames: 128 kbps, 44.1 kHz, mono, 1152 samples each.
fn silent_mp3_frames(count: usize) -> Vec<u8> {
    let mut frame = vec![0u8; 417];
    frame[..4].copy_from_slice(&[0xFF, 0xFB, 0x90, 0xC4]);
    frame.repeat(count)
}

/// ID3v2.3 tag holding ISO-8859-1 text frames.
fn id3v2_tag(frames: &[(&str, &str)]) -> Vec<u8> {
    let mut body = Vec::new();
    for (id, text) in frames {
        body.extend_from_slice(id.as_bytes());
        body.extend_from_slice(&(text.len() as u32 + 1).to_be_bytes());
        // two flag bytes, then the encoding byte
        body.extend_from_slice(&[0, 0, 0]);
        body.extend_from_slice(text.as_bytes());
    }
    let size = body.len() as u32;
    let mut tag = b"ID3\x03\x00\x00".to_vec();
    for shift in [21, 14, 7, 0] {
        tag.push(((size >> shift) & 0x7F) as u8);
    }
    tag.extend_from_slice(&body);
    tag
}

/// Trailing 128-byte ID3v1 tag.
fn id3v1_tag(title: &str, artist: &str) -> Vec<u8> {
    let mut tag = vec![0u8; 128];
    tag[..3].copy_from_slice(b"TAG");
    tag[3..3 + title.len()].copy_from_slice(title.as_bytes());
    tag[33..33 + artist.len()].copy_from_slice(artist.as_bytes());
    tag
}

/// `fLaC` stream with STREAMINFO (44.1 kHz mono 16-bit) and Vorbis comments,
/// no audio frames.
fn flac_file(artist: &str, title: &str, seconds: u64) -> Vec<u8> {
    const RATE: u64 = 44_100;
    let mut out = b"fLaC".to_vec();

    out.extend_from_slice(&[0, 0, 0, 34]);
    out.extend_from_slice(&4096u16.to_be_bytes());
    out.extend_from_slice(&4096u16.to_be_bytes());
    out.extend_from_slice(&[0u8; 6]);
    let packed: u64 = (RATE << 44) | (15u64 << 36) | (RATE * seconds);
    out.extend_from_slice(&packed.to_be_bytes());
    out.extend_from_slice(&[0u8; 16]);

    let vendor = b"tracklister";
    let fields = [format!("ARTIST={artist}"), format!("TITLE={title}")];
    let mut comments = Vec::new();
    comments.extend_from_slice(&(vendor.len() as u32).to_le_bytes());
    comments.extend_from_slice(vendor);
    comments.extend_from_slice(&(fields.len() as u32).to_le_bytes());
    for field in &fields {
        comments.extend_from_slice(&(field.len() as u32).to_le_bytes());
        comments.extend_from_slice(field.as_bytes());
    }

    out.push(0x80 | 4);
    out.extend_from_slice(&(comments.len() as u32).to_be_bytes()[1..]);
    out.extend_from_slice(&comments);
    out
}

fn mp3_with_id3v2(artist: &str, title: &str, frames: usize) -> Vec<u8> {
    let mut bytes = id3v2_tag(&[("TPE1", artist), ("TIT2", title)]);
    bytes.extend_from_slice(&silent_mp3_frames(frames));
    bytes
}

#[test]
fn file_probe_reads_id3v2_and_decodes_mp3_length() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.mp3");
    fs::write(&path, mp3_with_id3v2("Ann", "Alpha", 100)).unwrap();

    assert_eq!(
        FileProbe.tags(&path, AudioKind::Mp3).unwrap(),
        TrackTags::Mp3(Mp3Tags {
            artist: Some("Ann".into()),
            title: Some("Alpha".into()),
        })
    );
    // 100 frames * 1152 samples at 44.1 kHz
    assert_eq!(
        FileProbe.duration(&path, AudioKind::Mp3).unwrap(),
        Duration::from_millis(2612)
    );
}

#[test]
fn file_probe_falls_back_to_id3v1() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("old.mp3");
    let mut bytes = silent_mp3_frames(50);
    bytes.extend_from_slice(&id3v1_tag("OldTitle", "OldArtist"));
    fs::write(&path, bytes).unwrap();

    assert_eq!(
        FileProbe.tags(&path, AudioKind::Mp3).unwrap(),
        TrackTags::Mp3(Mp3Tags {
            artist: Some("OldArtist".into()),
            title: Some("OldTitle".into()),
        })
    );
    assert_eq!(
        FileProbe.duration(&path, AudioKind::Mp3).unwrap(),
        Duration::from_millis(1306)
    );
}

#[test]
fn file_probe_fills_missing_id3v2_fields_from_id3v1() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mixed.mp3");
    let mut bytes = id3v2_tag(&[("TIT2", "NewTitle")]);
    bytes.extend_from_slice(&silent_mp3_frames(10));
    bytes.extend_from_slice(&id3v1_tag("OldTitle", "OldArtist"));
    fs::write(&path, bytes).unwrap();

    let tags = FileProbe.tags(&path, AudioKind::Mp3).unwrap();
    assert_eq!(tags.artist(), Some("OldArtist"));
    assert_eq!(tags.title(), Some("NewTitle"));
}

#[test]
fn file_probe_reads_vorbis_comments_and_streaminfo_length() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("b.flac");
    fs::write(&path, flac_file("Bob", "Beta", 3)).unwrap();

    assert_eq!(
        FileProbe.tags(&path, AudioKind::Flac).unwrap(),
        TrackTags::Flac(FlacTags {
            artist: Some("Bob".into()),
            title: Some("Beta".into()),
        })
    );
    assert_eq!(
        FileProbe.duration(&path, AudioKind::Flac).unwrap(),
        Duration::from_secs(3)
    );
}

#[test]
fn generate_with_file_probe_on_real_audio() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.mp3"), mp3_with_id3v2("Ann", "Alpha", 100)).unwrap();
    fs::write(dir.path().join("b.flac"), flac_file("Bob", "Beta", 3)).unwrap();

    let text = generate(dir.path(), SideConfig::Off, &FileProbe).unwrap();
    assert_eq!(text, "01. Ann - Alpha 00:00.00\n02. Bob - Beta 00:02.61\n");
}
