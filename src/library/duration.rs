use std::io;
use std::path::Path;
use std::time::Duration;

use lofty::config::ParseOptions;
use lofty::file::AudioFile;
use lofty::flac::FlacFile;
use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::MetadataError;

use super::model::AudioKind;
use super::tags::open;

/// Play length of one file.
///
/// MP3 streams are decoded and their frames counted. FLAC lengths come from
/// the sample count in STREAMINFO.
pub fn track_duration(path: &Path, kind: AudioKind) -> Result<Duration, MetadataError> {
    match kind {
        AudioKind::Mp3 => decoded_duration(path),
        AudioKind::Flac => stream_info_duration(path),
    }
}

fn stream_info_duration(path: &Path) -> Result<Duration, MetadataError> {
    let mut file = open(path)?;
    let flac = FlacFile::read_from(&mut file, ParseOptions::new())?;
    Ok(flac.properties().duration())
}

fn decoded_duration(path: &Path) -> Result<Duration, MetadataError> {
    let file = open(path)?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    hint.with_extension("mp3");

    let probed = symphonia::default::get_probe().format(
        &hint,
        mss,
        &FormatOptions::default(),
        &MetadataOptions::default(),
    )?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or(MetadataError::NoAudioTrack)?;
    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or(MetadataError::UnknownSampleRate)?;

    let mut decoder =
        symphonia::default::get_codecs().make(&track.codec_params, &DecoderOptions::default())?;

    let mut frames: u64 = 0;
    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e)) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => return Err(e.into()),
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => frames += decoded.frames() as u64,
            // A damaged frame is dropped; the rest of the stream still counts.
            Err(SymphoniaError::DecodeError(msg)) => {
                tracing::debug!(path = %path.display(), error = msg, "skipping undecodable frame");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(frames_to_duration(frames, sample_rate))
}

/// Whole milliseconds, so MP3 and FLAC lengths add up in the same precision.
fn frames_to_duration(frames: u64, sample_rate: u32) -> Duration {
    let millis = (frames as f64 * 1000.0 / f64::from(sample_rate)).round() as u64;
    Duration::from_millis(millis)
}
