//! Error types shared by every pipeline stage.

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure kinds of the pipeline. No stage recovers locally; everything
/// propagates to the caller, which prints one line and ends the run.
#[derive(Debug, Error)]
pub enum Error {
    /// Annotation table is too narrow to carry the two path columns.
    #[error("annotation file must have at least two columns, found {found}")]
    Schema { found: usize },

    /// A referenced file or the output location could not be opened.
    #[error("cannot access {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The decoder rejected an audio file.
    #[error("failed to decode {path}: {reason}")]
    AudioDecode { path: PathBuf, reason: String },

    /// Malformed CSV input or a failed CSV write.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Unusable command line input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
