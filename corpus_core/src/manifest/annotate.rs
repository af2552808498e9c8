use std::path::Path;

use log::debug;

use crate::audio::DurationSource;
use crate::error::Result;
use super::table::{AUDIO_DURATION, Manifest, ManifestRow, PathTable};

/// Round a duration to the millisecond precision stored in the manifest.
fn round_to_millis(secs: f64) -> f64 {
    (secs * 1000.0).round() / 1000.0
}

/// Measure every clip in the table and attach the result as the
/// `Audio duration` column. Row order is preserved; the first unreadable
/// clip aborts the whole batch.
pub fn attach_durations(table: PathTable, source: &dyn DurationSource) -> Result<Manifest> {
    let mut rows = Vec::with_capacity(table.entries.len());

    for clip in table.entries {
        let duration_secs = round_to_millis(source.duration_secs(Path::new(&clip.absolute))?);
        debug!("{}: {duration_secs} s", clip.absolute);
        rows.push(ManifestRow {
            absolute_path: clip.absolute,
            relative_path: clip.relative,
            duration_secs,
        });
    }

    println!("Added {AUDIO_DURATION:?} column for {} clips", rows.len());

    Ok(Manifest { rows })
}
