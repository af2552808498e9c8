use std::fs::File;
use std::path::Path;

use anyhow::Context;

use crate::error::{Error, Result};
use super::table::{ABSOLUTE_PATH, ClipPaths, PathTable, RELATIVE_PATH, SelectedColumns};

/// Positions of the path columns, 0-indexed. Annotation files written with
/// a leading row-index column carry the paths at 1 and 2.
const PATH_COLUMNS: (usize, usize) = (1, 2);

/// Read the annotation CSV at `path` and keep the two path columns,
/// preserving row order. Fails if the table has fewer than two columns.
pub fn load_annotation(path: &Path) -> Result<SelectedColumns> {
    let file = File::open(path).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let header_row = reader.headers()?.clone();
    let found = header_row.len();
    if found < 2 {
        return Err(Error::Schema { found });
    }
    // A two-column file has no index column in front of the paths.
    let (first, second) = if found == 2 { (0, 1) } else { PATH_COLUMNS };

    let headers = [
        header_row
            .get(first)
            .with_context(|| format!("header row is missing column {first}"))?
            .to_string(),
        header_row
            .get(second)
            .with_context(|| format!("header row is missing column {second}"))?
            .to_string(),
    ];

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        let absolute = record
            .get(first)
            .with_context(|| format!("row {line} is missing column {first}"))?
            .to_string();
        let relative = record
            .get(second)
            .with_context(|| format!("row {line} is missing column {second}"))?
            .to_string();
        rows.push([absolute, relative]);
    }

    println!("Loaded annotation: {} rows, kept 2 of {found} columns", rows.len());

    Ok(SelectedColumns { headers, rows })
}

/// Positional rename to the canonical labels. Content is not validated.
pub fn name_path_columns(selected: SelectedColumns) -> PathTable {
    let entries = selected
        .rows
        .into_iter()
        .map(|[absolute, relative]| ClipPaths { absolute, relative })
        .collect();

    println!("Columns renamed to {ABSOLUTE_PATH:?} and {RELATIVE_PATH:?}");

    PathTable { entries }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_csv(contents: &str) -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("annotation.csv");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn skips_leading_index_column_when_three_or_more() {
        let (_dir, path) = write_csv(
            "id,abs,rel,extra\n\
             0,/data/a.wav,a.wav,x\n\
             1,/data/b.wav,b.wav,y\n",
        );

        let selected = load_annotation(&path).unwrap();
        assert_eq!(selected.headers, ["abs".to_string(), "rel".to_string()]);
        assert_eq!(
            selected.rows,
            vec![
                ["/data/a.wav".to_string(), "a.wav".to_string()],
                ["/data/b.wav".to_string(), "b.wav".to_string()],
            ]
        );
    }

    #[test]
    fn keeps_both_columns_of_a_two_column_file() {
        let (_dir, path) = write_csv("abs,rel\n/data/a.wav,a.wav\n");

        let selected = load_annotation(&path).unwrap();
        assert_eq!(selected.headers, ["abs".to_string(), "rel".to_string()]);
        assert_eq!(selected.rows.len(), 1);
        assert_eq!(selected.rows[0][0], "/data/a.wav");
    }

    #[test]
    fn one_column_is_a_schema_error() {
        let (_dir, path) = write_csv("only\n/data/a.wav\n");

        let err = load_annotation(&path).unwrap_err();
        assert!(matches!(err, Error::Schema { found: 1 }), "got {err:?}");
    }

    #[test]
    fn empty_file_is_a_schema_error() {
        let (_dir, path) = write_csv("");

        let err = load_annotation(&path).unwrap_err();
        assert!(matches!(err, Error::Schema { found: 0 }), "got {err:?}");
    }

    #[test]
    fn missing_file_is_a_file_access_error() {
        let err = load_annotation(Path::new("no/such/annotation.csv")).unwrap_err();
        assert!(matches!(err, Error::FileAccess { .. }), "got {err:?}");
    }

    #[test]
    fn renaming_is_positional() {
        let selected = SelectedColumns {
            headers: ["whatever".to_string(), "names".to_string()],
            rows: vec![["/data/a.wav".to_string(), "a.wav".to_string()]],
        };

        let table = name_path_columns(selected);
        assert_eq!(
            table.entries,
            vec![ClipPaths {
                absolute: "/data/a.wav".to_string(),
                relative: "a.wav".to_string(),
            }]
        );
    }
}
