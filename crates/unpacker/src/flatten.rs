//! One-level flattening of the output directory.

use crate::error::UnpackError;
use crate::types::{FlattenStats, Progress};
use crate::ProgressCallback;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Move the contents of every immediate subdirectory of `dir` up into `dir`,
/// then remove the emptied subdirectories.
///
/// The set of subdirectories is taken before anything moves. An entry that is
/// itself a directory is moved up whole and is not flattened any further.
/// Name collisions at the top level are not checked: an existing file with the
/// same name is replaced.
pub fn flatten_one_level(
    dir: &Path,
    progress_cb: &ProgressCallback<'_>,
) -> Result<FlattenStats, UnpackError> {
    let mut stats = FlattenStats::default();

    let subdirs: Vec<PathBuf> = immediate_children(dir)?
        .into_iter()
        .filter(|entry| entry.file_type().is_dir())
        .map(walkdir::DirEntry::into_path)
        .collect();

    for subdir in subdirs {
        for entry in immediate_children(&subdir)? {
            let target = dir.join(entry.file_name());
            fs::rename(entry.path(), &target)
                .map_err(|e| UnpackError::filesystem("move", entry.path(), e))?;

            debug!(from = %entry.path().display(), to = %target.display(), "moved entry");
            stats.files_moved += 1;
            progress_cb(&Progress::Moved {
                from: entry.path(),
                to: &target,
            });
        }

        fs::remove_dir(&subdir)
            .map_err(|e| UnpackError::filesystem("remove directory", &subdir, e))?;
        stats.directories_removed += 1;
    }

    Ok(stats)
}

/// Direct children of `dir`, sorted by file name.
pub(crate) fn immediate_children(dir: &Path) -> Result<Vec<walkdir::DirEntry>, UnpackError> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| entry.map_err(UnpackError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_flatten_moves_nested_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("csv")).unwrap();
        fs::write(root.join("csv/patients.csv"), b"p").unwrap();
        fs::write(root.join("csv/visits.csv"), b"v").unwrap();

        let stats = flatten_one_level(root, &|_| {}).unwrap();

        assert_eq!(stats.files_moved, 2);
        assert_eq!(stats.directories_removed, 1);
        assert_eq!(fs::read(root.join("patients.csv")).unwrap(), b"p");
        assert_eq!(fs::read(root.join("visits.csv")).unwrap(), b"v");
        assert!(!root.join("csv").exists());
    }

    #[test]
    fn test_flatten_overwrites_collisions() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("patients.csv"), b"old").unwrap();
        fs::create_dir(root.join("csv")).unwrap();
        fs::write(root.join("csv/patients.csv"), b"new").unwrap();

        flatten_one_level(root, &|_| {}).unwrap();

        assert_eq!(fs::read(root.join("patients.csv")).unwrap(), b"new");
        assert!(!root.join("csv").exists());
    }

    #[test]
    fn test_flatten_only_one_level() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("outer/inner")).unwrap();
        fs::write(root.join("outer/a.csv"), b"a").unwrap();
        fs::write(root.join("outer/inner/b.csv"), b"b").unwrap();

        let stats = flatten_one_level(root, &|_| {}).unwrap();

        assert_eq!(stats.directories_removed, 1);
        assert!(!root.join("outer").exists());
        assert!(root.join("a.csv").is_file());
        // The grandchild directory comes up whole and stays a directory.
        assert!(root.join("inner").is_dir());
        assert!(root.join("inner/b.csv").is_file());
        assert!(!root.join("b.csv").exists());
    }

    #[test]
    fn test_flatten_leaves_top_level_files_alone() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("top.csv"), b"t").unwrap();

        let stats = flatten_one_level(root, &|_| {}).unwrap();

        assert_eq!(stats, FlattenStats::default());
        assert_eq!(fs::read(root.join("top.csv")).unwrap(), b"t");
    }

    #[test]
    fn test_flatten_removes_empty_subdirectory() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("empty")).unwrap();

        let stats = flatten_one_level(root, &|_| {}).unwrap();

        assert_eq!(stats.files_moved, 0);
        assert_eq!(stats.directories_removed, 1);
        assert!(!root.join("empty").exists());
    }

    #[test]
    fn test_immediate_children_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("b.csv"), b"").unwrap();
        fs::write(root.join("a.csv"), b"").unwrap();
        fs::create_dir(root.join("c")).unwrap();
        fs::write(root.join("c/deep.csv"), b"").unwrap();

        let names: Vec<_> = immediate_children(root)
            .unwrap()
            .into_iter()
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.csv", "b.csv", "c"]);
    }
}
