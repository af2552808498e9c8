//! The annotation table and the stages that carry it to a manifest.
//!
//! Ownership of the table passes linearly, one stage at a time:
//!
//! ```text
//! annotation.csv
//!       |
//!   loader::load_annotation        keep the two path columns
//!       |
//!   loader::name_path_columns      canonical labels
//!       |
//!   annotate::attach_durations     decode every clip
//!       |
//!   transform::sort_by_duration
//!       |\
//!       | transform::filter_by_duration   reported, then dropped
//!       |
//!   chart::SeriesRenderer + writer::save_manifest
//! ```

pub mod annotate;
pub mod loader;
pub mod table;
pub mod transform;
pub mod writer;

pub use table::{Manifest, ManifestRow};
