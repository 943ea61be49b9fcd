//! Error types for unpack operations.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for unpack operations.
///
/// Every variant is fatal; nothing is retried and partially extracted output
/// is left on disk for the operator to clean up.
#[derive(Debug, Error)]
pub enum UnpackError {
    /// Source archive not found at the expected path.
    #[error("{0} not found. Place the archive there first.")]
    MissingInput(PathBuf),

    /// The archive could not be opened, read, or written out.
    #[error("Extraction of {archive} failed: {source}")]
    Extraction {
        /// Archive being extracted
        archive: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// A directory creation, listing, move, or removal failed.
    #[error("Failed to {action} {path}: {source}")]
    Filesystem {
        /// What was being attempted, e.g. "create directory"
        action: &'static str,
        /// Path the operation was applied to
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl UnpackError {
    pub(crate) fn extraction(archive: &Path, source: impl Into<zip::result::ZipError>) -> Self {
        UnpackError::Extraction {
            archive: archive.to_path_buf(),
            source: source.into(),
        }
    }

    pub(crate) fn filesystem(action: &'static str, path: &Path, source: std::io::Error) -> Self {
        UnpackError::Filesystem {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

impl From<walkdir::Error> for UnpackError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(Path::to_path_buf).unwrap_or_default();
        UnpackError::Filesystem {
            action: "read directory",
            path,
            source: err.into(),
        }
    }
}
