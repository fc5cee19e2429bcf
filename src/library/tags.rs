use std::borrow::Cow;
use std::fs::File;
use std::path::Path;

use lofty::config::ParseOptions;
use lofty::file::AudioFile;
use lofty::flac::FlacFile;
use lofty::mpeg::MpegFile;
use lofty::tag::Accessor;

use crate::error::MetadataError;

use super::model::AudioKind;

/// Artist/title pulled from an MP3's ID3 tags (ID3v2 first, then ID3v1).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mp3Tags {
    pub artist: Option<String>,
    pub title: Option<String>,
}

/// Artist/title pulled from a FLAC file's Vorbis comments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlacTags {
    pub artist: Option<String>,
    pub title: Option<String>,
}

/// Tags read through the codec-specific reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackTags {
    Mp3(Mp3Tags),
    Flac(FlacTags),
}

impl TrackTags {
    pub fn artist(&self) -> Option<&str> {
        match self {
            Self::Mp3(t) => t.artist.as_deref(),
            Self::Flac(t) => t.artist.as_deref(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Mp3(t) => t.title.as_deref(),
            Self::Flac(t) => t.title.as_deref(),
        }
    }
}

/// Read artist and title using the reader that matches `kind`.
pub fn read_tags(path: &Path, kind: AudioKind) -> Result<TrackTags, MetadataError> {
    match kind {
        AudioKind::Mp3 => read_mp3_tags(path).map(TrackTags::Mp3),
        AudioKind::Flac => read_flac_tags(path).map(TrackTags::Flac),
    }
}

fn read_mp3_tags(path: &Path) -> Result<Mp3Tags, MetadataError> {
    let mut file = open(path)?;
    let mpeg = MpegFile::read_from(&mut file, ParseOptions::new().read_properties(false))?;

    let mut tags = Mp3Tags::default();
    if let Some(id3v2) = mpeg.id3v2() {
        tags.artist = clean(id3v2.artist());
        tags.title = clean(id3v2.title());
    }
    if let Some(id3v1) = mpeg.id3v1() {
        if tags.artist.is_none() {
            tags.artist = clean(id3v1.artist());
        }
        if tags.title.is_none() {
            tags.title = clean(id3v1.title());
        }
    }
    Ok(tags)
}

fn read_flac_tags(path: &Path) -> Result<FlacTags, MetadataError> {
    let mut file = open(path)?;
    let flac = FlacFile::read_from(&mut file, ParseOptions::new().read_properties(false))?;

    let mut tags = FlacTags::default();
    if let Some(comments) = flac.vorbis_comments() {
        tags.artist = clean(comments.artist());
        tags.title = clean(comments.title());
    }
    Ok(tags)
}

pub(super) fn open(path: &Path) -> Result<File, MetadataError> {
    File::open(path).map_err(|source| MetadataError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Blank values count as missing.
fn clean(value: Option<Cow<'_, str>>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
