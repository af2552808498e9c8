use std::fs::File;
use std::path::Path;

use crate::error::{Error, Result};
use super::table::{ABSOLUTE_PATH, AUDIO_DURATION, Manifest, RELATIVE_PATH};

/// Serialize the manifest as CSV at `path`: header row first, one line per
/// row, no index column. Overwrites any existing file.
pub fn save_manifest(manifest: &Manifest, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = csv::Writer::from_writer(file);

    // Serializing rows emits the header; an empty table has to write it
    // itself.
    if manifest.rows.is_empty() {
        writer.write_record([ABSOLUTE_PATH, RELATIVE_PATH, AUDIO_DURATION])?;
    }
    for row in &manifest.rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    println!("Manifest saved as {}", path.display());

    Ok(())
}
