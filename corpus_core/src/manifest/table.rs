//! Table types the pipeline hands from stage to stage.

use serde::{Deserialize, Serialize};

/// Label given to the audio file path column.
pub const ABSOLUTE_PATH: &str = "Absolute path";
/// Label given to the carried-through relative path column.
pub const RELATIVE_PATH: &str = "Relative path";
/// Label given to the computed duration column.
pub const AUDIO_DURATION: &str = "Audio duration";

/// The two columns pulled out of the annotation file, still carrying
/// whatever header names the source used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedColumns {
    pub headers: [String; 2],
    pub rows: Vec<[String; 2]>,
}

/// Path pair for one clip, after the columns are given canonical names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipPaths {
    pub absolute: String,
    pub relative: String,
}

/// Table after renaming. Row order is the annotation file's order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTable {
    pub entries: Vec<ClipPaths>,
}

/// One fully annotated manifest row. The serde renames produce the exact
/// CSV headers the manifest format requires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestRow {
    #[serde(rename = "Absolute path")]
    pub absolute_path: String,
    #[serde(rename = "Relative path")]
    pub relative_path: String,
    #[serde(rename = "Audio duration")]
    pub duration_secs: f64,
}

/// Duration-annotated table. Each stage consumes one and builds a new one;
/// a row's index is its position in `rows`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    pub rows: Vec<ManifestRow>,
}

impl Manifest {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Duration column, in row order.
    pub fn durations(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|row| row.duration_secs)
    }
}
