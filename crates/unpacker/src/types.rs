//! Type definitions for unpack runs.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Archive location relative to the repository root.
pub const DEFAULT_ARCHIVE_PATH: &str = "data/synthetic_1k.zip";

/// Destination directory relative to the repository root.
pub const DEFAULT_OUTPUT_DIR: &str = "data/raw";

/// Only files ending with this suffix are listed in the final report.
pub const DEFAULT_REPORT_SUFFIX: &str = ".csv";

/// Where to read the archive from and where to put its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnpackOptions {
    /// Path of the ZIP archive to extract
    pub archive_path: PathBuf,

    /// Directory that receives the flattened files
    pub output_dir: PathBuf,

    /// File name suffix used to select reported outputs
    pub report_suffix: String,
}

impl UnpackOptions {
    /// Fixed layout under a repository root: `data/synthetic_1k.zip` into `data/raw`.
    pub fn for_repo_root(root: &Path) -> Self {
        Self {
            archive_path: root.join(DEFAULT_ARCHIVE_PATH),
            output_dir: root.join(DEFAULT_OUTPUT_DIR),
            report_suffix: DEFAULT_REPORT_SUFFIX.to_string(),
        }
    }

    /// Human label for the reported file kind, e.g. "CSV" for ".csv".
    pub fn report_label(&self) -> String {
        self.report_suffix.trim_start_matches('.').to_uppercase()
    }
}

/// Statistics about the extraction step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Number of file entries written
    pub files_extracted: u64,

    /// Number of directory entries materialised
    pub directories_created: u64,

    /// Total bytes written to disk
    pub bytes_written: u64,

    /// Entries ignored because their names would escape the output directory
    pub entries_skipped: u64,

    /// Wall time spent extracting
    pub duration: Duration,
}

/// Statistics about the flattening step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlattenStats {
    /// Entries moved from a subdirectory to the top level
    pub files_moved: u64,

    /// Subdirectories removed after being emptied
    pub directories_removed: u64,
}

/// A top-level file left in the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// File name, without any directory part
    pub name: String,

    /// Size in bytes
    pub size_bytes: u64,
}

impl OutputFile {
    /// Size in decimal megabytes.
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / 1e6
    }
}

/// Everything a completed run produced.
#[derive(Debug, Clone, Default)]
pub struct UnpackReport {
    pub extract: ExtractStats,
    pub flatten: FlattenStats,

    /// Reported outputs, sorted by name
    pub outputs: Vec<OutputFile>,
}

/// Progress events emitted while a run advances.
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    /// Extraction is about to start.
    Extracting {
        archive: &'a Path,
        output_dir: &'a Path,
    },

    /// One file entry has been written.
    EntryExtracted { path: &'a Path, bytes: u64 },

    /// An entry was relocated to the top level.
    Moved { from: &'a Path, to: &'a Path },
}
