use std::path::PathBuf;
use thiserror::Error;

pub type ManifestResult<T> = Result<T, ManifestError>;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Cannot find {} in the local process folder", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to parse {} as CSV: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to parse {} as CSV: no header row", .path.display())]
    NoHeader { path: PathBuf },

    #[error("Manifest file must contain a column {column}")]
    MissingColumn { column: String, path: PathBuf },

    #[error("Manifest file contains column {column} more than once")]
    DuplicateColumn { column: String, path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse category of a [`ManifestError`], for callers that branch on the
/// failed check rather than on the details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    Parse,
    MissingColumn,
    DuplicateColumn,
    Io,
}

impl ManifestError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ManifestError::FileNotFound { .. } => ErrorKind::FileNotFound,
            ManifestError::Parse { .. } | ManifestError::NoHeader { .. } => ErrorKind::Parse,
            ManifestError::MissingColumn { .. } => ErrorKind::MissingColumn,
            ManifestError::DuplicateColumn { .. } => ErrorKind::DuplicateColumn,
            ManifestError::Io(_) => ErrorKind::Io,
        }
    }
}
