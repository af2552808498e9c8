//! The stage sequence, run once per invocation.

use std::path::Path;

use log::info;

use crate::audio::DurationSource;
use crate::chart::SeriesRenderer;
use crate::error::Result;
use crate::manifest::table::Manifest;
use crate::manifest::{annotate, loader, transform, writer};

/// Run every stage over `annotation`, writing the sorted manifest to
/// `output` and a chart through `renderer`. Returns the sorted manifest.
///
/// The first failing stage aborts the run; nothing is rolled back, so the
/// chart may exist even when the manifest write failed.
pub fn run(
    annotation: &Path,
    output: &Path,
    durations: &dyn DurationSource,
    renderer: &dyn SeriesRenderer,
) -> Result<Manifest> {
    info!(
        "annotating {} -> {}",
        annotation.display(),
        output.display()
    );

    let selected = loader::load_annotation(annotation)?;
    let paths = loader::name_path_columns(selected);
    let annotated = annotate::attach_durations(paths, durations)?;
    let sorted = transform::sort_by_duration(annotated);

    // The trimmed view is only reported, never written; chart and manifest
    // both come from the sorted table.
    let _trimmed = transform::filter_by_duration(&sorted);

    let series: Vec<f64> = sorted.durations().collect();
    renderer.render(&series)?;
    writer::save_manifest(&sorted, output)?;

    Ok(sorted)
}
