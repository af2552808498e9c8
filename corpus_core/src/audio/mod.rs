//! Audio measurement.

pub mod decoder;

use std::path::Path;

use crate::error::Result;

pub use decoder::{ClipLength, measure};

/// Where per-clip durations come from. The annotator only talks to this
/// seam, so tests can supply canned values.
pub trait DurationSource {
    /// Playback length of the clip at `path`, in seconds.
    fn duration_secs(&self, path: &Path) -> Result<f64>;
}

/// Measures clips by decoding them end to end.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymphoniaDurations;

impl DurationSource for SymphoniaDurations {
    fn duration_secs(&self, path: &Path) -> Result<f64> {
        measure(path).map(|clip| clip.seconds())
    }
}
