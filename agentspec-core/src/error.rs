use std::path::PathBuf;
use thiserror::Error;

/// Run-level failures. Per-document problems are findings, not errors.
#[derive(Error, Debug)]
pub enum ValidatorError {
    #[error("Directory {0} does not exist")]
    DirectoryMissing(PathBuf),

    #[error("Failed to list directory {path}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),
}
