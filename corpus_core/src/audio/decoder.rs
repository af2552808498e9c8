use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;
use symphonia::core::{
    codecs::{CODEC_TYPE_NULL, DecoderOptions},
    errors::Error as SymphoniaError,
    formats::FormatOptions,
    io::MediaSourceStream,
    meta::MetadataOptions,
    probe::Hint,
};

use crate::error::{Error, Result};

/// Decoded extent of one clip: frame count and playback rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipLength {
    pub frames: u64,
    pub sample_rate: u32,
}

impl ClipLength {
    /// Playback length in seconds. A frame is one sample period across all
    /// channels, so channel count does not enter into it.
    pub fn seconds(&self) -> f64 {
        self.frames as f64 / self.sample_rate as f64
    }
}

/// Decode the clip at `path` end to end and count its frames.
///
/// Container metadata is not trusted for length; every packet is decoded.
pub fn measure<P: AsRef<Path>>(path: P) -> Result<ClipLength> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    // Hint from extension (optional but helps).
    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .map_err(|e| decode_error(path, format!("unsupported format or failed to probe container: {e}")))?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| decode_error(path, "no supported audio tracks found"))?;

    let track_id = track.id;

    // Prefer codec params for the rate, fall back to the first decoded spec.
    let mut sample_rate: Option<u32> = track.codec_params.sample_rate;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| decode_error(path, format!("failed to create decoder for selected track: {e}")))?;

    let mut frames: u64 = 0;

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(SymphoniaError::IoError(e)) if e.kind() == ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(decode_error(path, format!("error reading next packet: {e}"))),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            // Recoverable per the codec contract; skip the damaged packet.
            Err(SymphoniaError::DecodeError(_)) | Err(SymphoniaError::IoError(_)) => continue,
            Err(e) => return Err(decode_error(path, format!("unrecoverable decode error: {e}"))),
        };

        sample_rate.get_or_insert(decoded.spec().rate);
        frames += decoded.frames() as u64;
    }

    let sample_rate = match sample_rate {
        Some(rate) if rate > 0 => rate,
        _ => return Err(decode_error(path, "sample rate missing or zero")),
    };

    debug!("{}: {} frames at {} Hz", path.display(), frames, sample_rate);

    Ok(ClipLength { frames, sample_rate })
}

fn decode_error(path: &Path, reason: impl Into<String>) -> Error {
    Error::AudioDecode {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}
