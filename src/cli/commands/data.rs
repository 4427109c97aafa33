//! Data commands: export, backup, backup-info

use crate::commands::Snapshot;
use campus_records::config::Config;
use campus_records::core::io::{backup, csv};
use campus_records::info;
use std::path::{Path, PathBuf};

/// Export the full data set as CSV into a directory
pub fn export(dir: Option<&Path>, config: &Config) {
    let snapshot = Snapshot::load(config);
    let target = dir.map_or_else(|| PathBuf::from(&config.paths.data_dir), Path::to_path_buf);

    match csv::export_all(
        &snapshot.directory,
        &snapshot.catalog,
        &snapshot.registry,
        &target,
    ) {
        Ok(()) => println!("✓ Exported data to {}", target.display()),
        Err(err) => {
            eprintln!("✗ Export failed: {err}");
            std::process::exit(1);
        }
    }
}

/// Create a timestamped backup of the data set
pub fn backup(config: &Config) {
    let snapshot = Snapshot::load(config);
    let backup_root = PathBuf::from(&config.paths.backup_dir);

    match backup::create_backup(
        &snapshot.directory,
        &snapshot.catalog,
        &snapshot.registry,
        &backup_root,
    ) {
        Ok(path) => {
            info!("Backup created at {}", path.display());
            println!("✓ Backup created: {}", path.display());
        }
        Err(err) => {
            eprintln!("✗ Backup failed: {err}");
            std::process::exit(1);
        }
    }
}

/// Show the size and contents of the latest backup
pub fn backup_info(config: &Config) {
    let backup_root = PathBuf::from(&config.paths.backup_dir);

    let latest = match backup::latest_backup(&backup_root) {
        Ok(Some(path)) => path,
        Ok(None) => {
            println!("No backups found in {}", backup_root.display());
            return;
        }
        Err(err) => {
            eprintln!("✗ Failed to inspect backups: {err}");
            std::process::exit(1);
        }
    };

    println!("Latest backup: {}", latest.display());
    println!("Total size: {} bytes", backup::directory_size(&latest));
    for entry in backup::list_contents(&latest) {
        println!("  {entry}");
    }
}
