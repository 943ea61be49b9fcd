//! ZIP extraction into the output directory.

use crate::error::UnpackError;
use crate::types::{ExtractStats, Progress};
use crate::ProgressCallback;
use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, warn};
use zip::ZipArchive;

/// Extract every entry of `archive_path` into `output_dir`.
///
/// Internal relative paths are preserved, so `csv/patients.csv` lands in
/// `output_dir/csv/patients.csv`. Existing files are overwritten. Entries whose
/// names are absolute or climb out with `..` are skipped and counted.
///
/// The archive handle lives only for the duration of this call. Any failure
/// aborts the extraction and leaves whatever was already written in place.
///
/// # Errors
///
/// Returns [`UnpackError::Extraction`] when the archive is unreadable or
/// corrupt, or when an entry cannot be written.
pub fn extract_archive(
    archive_path: &Path,
    output_dir: &Path,
    progress_cb: &ProgressCallback<'_>,
) -> Result<ExtractStats, UnpackError> {
    let start_time = Instant::now();
    let mut stats = ExtractStats::default();

    let file = File::open(archive_path).map_err(|e| UnpackError::extraction(archive_path, e))?;
    let mut archive =
        ZipArchive::new(file).map_err(|e| UnpackError::extraction(archive_path, e))?;

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| UnpackError::extraction(archive_path, e))?;

        let relative = match entry.enclosed_name() {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => {
                warn!(entry = entry.name(), "skipping entry with unsafe path");
                stats.entries_skipped += 1;
                continue;
            }
        };
        let out_path = output_dir.join(&relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(|e| UnpackError::extraction(archive_path, e))?;
            stats.directories_created += 1;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|e| UnpackError::extraction(archive_path, e))?;
        }

        let mut out_file =
            File::create(&out_path).map_err(|e| UnpackError::extraction(archive_path, e))?;
        let bytes = io::copy(&mut entry, &mut out_file)
            .map_err(|e| UnpackError::extraction(archive_path, e))?;

        debug!(path = %relative.display(), bytes, "extracted entry");
        stats.files_extracted += 1;
        stats.bytes_written += bytes;
        progress_cb(&Progress::EntryExtracted {
            path: &relative,
            bytes,
        });
    }

    stats.duration = start_time.elapsed();
    Ok(stats)
}
