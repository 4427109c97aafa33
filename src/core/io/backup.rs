//! Filesystem backup of exported snapshots
//!
//! A backup is a timestamped directory holding a full CSV export. The
//! directory utilities (size, recursive listing) work over arbitrary
//! paths and never touch the in-memory data.

use crate::core::catalog::CourseCatalog;
use crate::core::directory::StudentDirectory;
use crate::core::error::Result;
use crate::core::io::csv;
use crate::core::registry::EnrollmentRegistry;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Timestamp format used in backup directory names
const BACKUP_STAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Create a timestamped backup under the backup root
///
/// The backup directory is named `backup_<yyyy-MM-dd_HH-mm-ss>` and
/// receives a full CSV export of the current data set.
///
/// # Errors
/// Returns an error if the directory cannot be created or the export
/// fails
pub fn create_backup(
    directory: &StudentDirectory,
    catalog: &CourseCatalog,
    registry: &EnrollmentRegistry,
    backup_root: &Path,
) -> Result<PathBuf> {
    let stamp = Local::now().format(BACKUP_STAMP_FORMAT);
    let backup_path = backup_root.join(format!("backup_{stamp}"));

    fs::create_dir_all(&backup_path)?;
    csv::export_all(directory, catalog, registry, &backup_path)?;

    Ok(backup_path)
}

/// Total size in bytes of all files under a directory, recursively
///
/// Entries that cannot be read are skipped rather than failing the
/// whole walk.
#[must_use]
pub fn directory_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.metadata().ok())
        .map(|metadata| metadata.len())
        .sum()
}

/// Recursive listing of a directory as sorted relative paths
///
/// Subdirectories carry a trailing `/`. The root itself is not listed.
#[must_use]
pub fn list_contents(root: &Path) -> Vec<String> {
    let mut entries: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .map(|entry| {
            let relative = entry
                .path()
                .strip_prefix(root)
                .unwrap_or(entry.path())
                .display()
                .to_string();
            if entry.file_type().is_dir() {
                format!("{relative}/")
            } else {
                relative
            }
        })
        .collect();
    entries.sort();
    entries
}

/// The most recently modified `backup_*` directory under the root
///
/// # Errors
/// Returns an error if the root cannot be read
pub fn latest_backup(backup_root: &Path) -> Result<Option<PathBuf>> {
    let mut latest: Option<(std::time::SystemTime, PathBuf)> = None;

    for entry in fs::read_dir(backup_root)? {
        let entry = entry?;
        let name = entry.file_name();
        let is_backup = entry.file_type()?.is_dir()
            && name.to_string_lossy().starts_with("backup_");
        if !is_backup {
            continue;
        }

        let modified = entry.metadata()?.modified()?;
        if latest.as_ref().is_none_or(|(when, _)| modified > *when) {
            latest = Some((modified, entry.path()));
        }
    }

    Ok(latest.map(|(_, path)| path))
}
