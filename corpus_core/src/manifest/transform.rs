use super::table::{AUDIO_DURATION, Manifest};

/// Exclusive bounds, in seconds, for clips the filter keeps.
pub const MIN_KEEP_SECS: f64 = 10.0;
pub const MAX_KEEP_SECS: f64 = 100.0;

/// How many rows the filter preview prints.
const PREVIEW_ROWS: usize = 5;

/// Reorder ascending by duration. The rebuilt row vector is the fresh
/// index; ties land in no particular order.
pub fn sort_by_duration(manifest: Manifest) -> Manifest {
    let mut rows = manifest.rows;
    rows.sort_by(|a, b| a.duration_secs.total_cmp(&b.duration_secs));

    println!("Sorted by {AUDIO_DURATION:?} ascending");

    Manifest { rows }
}

/// Keep rows with duration strictly inside (`MIN_KEEP_SECS`,
/// `MAX_KEEP_SECS`), reindexed from 0. Prints the surviving count and a
/// short preview.
pub fn filter_by_duration(manifest: &Manifest) -> Manifest {
    let rows: Vec<_> = manifest
        .rows
        .iter()
        .filter(|row| row.duration_secs > MIN_KEEP_SECS && row.duration_secs < MAX_KEEP_SECS)
        .cloned()
        .collect();

    println!(
        "Filter kept {} rows with duration inside ({MIN_KEEP_SECS}, {MAX_KEEP_SECS}) s",
        rows.len()
    );
    for (index, row) in rows.iter().take(PREVIEW_ROWS).enumerate() {
        println!(
            "  {index}  {}  {}  {:.3}",
            row.absolute_path, row.relative_path, row.duration_secs
        );
    }

    Manifest { rows }
}

#[cfg(test)]
mod tests {
    use crate::manifest::table::ManifestRow;

    use super::*;

    fn manifest_of(durations: &[f64]) -> Manifest {
        Manifest {
            rows: durations
                .iter()
                .enumerate()
                .map(|(i, &duration_secs)| ManifestRow {
                    absolute_path: format!("/data/clip_{i}.wav"),
                    relative_path: format!("clip_{i}.wav"),
                    duration_secs,
                })
                .collect(),
        }
    }

    #[test]
    fn sorts_ascending_and_keeps_every_row() {
        let sorted = sort_by_duration(manifest_of(&[3.2, 0.5, 2.0, 0.5]));

        assert_eq!(sorted.len(), 4);
        let durations: Vec<f64> = sorted.durations().collect();
        assert!(durations.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(durations, vec![0.5, 0.5, 2.0, 3.2]);
    }

    #[test]
    fn filter_keeps_the_open_interval_only() {
        let manifest = manifest_of(&[5.0, 10.0, 10.001, 50.0, 99.999, 100.0, 150.0]);

        let kept = filter_by_duration(&manifest);
        let durations: Vec<f64> = kept.durations().collect();
        assert_eq!(durations, vec![10.001, 50.0, 99.999]);
    }

    #[test]
    fn filter_reindexes_from_zero() {
        let manifest = manifest_of(&[1.0, 20.0, 2.0, 30.0]);

        let kept = filter_by_duration(&manifest);
        assert_eq!(kept.rows[0].relative_path, "clip_1.wav");
        assert_eq!(kept.rows[1].relative_path, "clip_3.wav");
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn filter_leaves_the_input_untouched() {
        let manifest = manifest_of(&[50.0, 5.0]);

        let _ = filter_by_duration(&manifest);
        assert_eq!(manifest.len(), 2);
    }
}
