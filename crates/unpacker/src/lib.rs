//! # Unpacker
//!
//! Extracts a ZIP archive of CSV files into a directory and collapses one
//! level of nesting, so consumers find every file directly under the output
//! directory.
//!
//! A run is a single forward pass:
//!
//! 1. check that the archive exists
//! 2. create the output directory
//! 3. extract every entry, keeping internal paths
//! 4. move files out of immediate subdirectories and remove them
//! 5. list the resulting top-level files matching the report suffix
//!
//! ## Example
//!
//! ```rust,no_run
//! use unpacker::{unpack, UnpackOptions};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = UnpackOptions::for_repo_root(Path::new("."));
//! let report = unpack(&options, &|_progress| {})?;
//!
//! for file in &report.outputs {
//!     println!("{} ({:.1} MB)", file.name, file.size_mb());
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod extract;
pub mod flatten;
pub mod report;
pub mod types;

// Re-export main types
pub use error::UnpackError;
pub use types::{
    ExtractStats, FlattenStats, OutputFile, Progress, UnpackOptions, UnpackReport,
    DEFAULT_ARCHIVE_PATH, DEFAULT_OUTPUT_DIR, DEFAULT_REPORT_SUFFIX,
};

use std::fs;
use tracing::info;

/// Observer for progress events. Purely informational.
pub type ProgressCallback<'a> = dyn Fn(&Progress<'_>) + 'a;

/// Extract `options.archive_path` into `options.output_dir` and flatten it.
///
/// # Errors
///
/// Returns an error if:
/// - The archive does not exist (nothing is created in that case)
/// - The output directory cannot be created
/// - The archive is corrupt or an entry cannot be written
/// - Moving an entry or removing an emptied subdirectory fails
pub fn unpack(
    options: &UnpackOptions,
    progress_cb: &ProgressCallback<'_>,
) -> Result<UnpackReport, UnpackError> {
    let archive = options.archive_path.as_path();
    let output_dir = options.output_dir.as_path();

    if !archive.exists() {
        return Err(UnpackError::MissingInput(archive.to_path_buf()));
    }

    fs::create_dir_all(output_dir)
        .map_err(|e| UnpackError::filesystem("create directory", output_dir, e))?;

    progress_cb(&Progress::Extracting {
        archive,
        output_dir,
    });
    let extract = extract::extract_archive(archive, output_dir, progress_cb)?;
    info!(
        files = extract.files_extracted,
        bytes = extract.bytes_written,
        skipped = extract.entries_skipped,
        elapsed_ms = extract.duration.as_millis() as u64,
        "extraction finished"
    );

    let flatten = flatten::flatten_one_level(output_dir, progress_cb)?;
    info!(
        moved = flatten.files_moved,
        removed = flatten.directories_removed,
        "flattening finished"
    );

    let outputs = report::collect_outputs(output_dir, &options.report_suffix)?;

    Ok(UnpackReport {
        extract,
        flatten,
        outputs,
    })
}
