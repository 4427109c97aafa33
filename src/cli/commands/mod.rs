//! Command handlers for the `CampusRecords` CLI

pub mod config;
pub mod courses;
pub mod data;
pub mod enrollment;
pub mod students;
pub mod transcript;

use campus_records::config::Config;
use campus_records::core::catalog::CourseCatalog;
use campus_records::core::directory::StudentDirectory;
use campus_records::core::io::csv;
use campus_records::core::registry::EnrollmentRegistry;
use campus_records::{debug, error};
use std::path::PathBuf;

/// The working data set a command operates on
///
/// Commands load the CSV snapshot from the configured data directory,
/// mutate through the public core operations, and write the snapshot
/// back. The snapshot layer never bypasses invariant checks.
pub struct Snapshot {
    /// Student directory
    pub directory: StudentDirectory,
    /// Course catalog
    pub catalog: CourseCatalog,
    /// Enrollment registry
    pub registry: EnrollmentRegistry,
    data_dir: PathBuf,
}

impl Snapshot {
    /// Load the snapshot from the configured data directory
    ///
    /// Missing snapshot files are treated as empty data sets. A snapshot
    /// that fails to load terminates the command; continuing would risk
    /// saving a truncated data set over a good one.
    #[must_use]
    pub fn load(config: &Config) -> Self {
        let data_dir = PathBuf::from(&config.paths.data_dir);

        let mut directory = StudentDirectory::new();
        let mut catalog = CourseCatalog::new();
        let mut registry = EnrollmentRegistry::new();

        if let Err(err) = csv::import_all(&data_dir, &mut directory, &mut catalog, &mut registry) {
            error!("Failed to load snapshot from {}: {err}", data_dir.display());
            eprintln!("✗ Failed to load data from {}: {err}", data_dir.display());
            std::process::exit(1);
        }

        debug!(
            "Snapshot loaded: {} students, {} courses, {} enrollments",
            directory.len(),
            catalog.len(),
            registry.len()
        );

        Self {
            directory,
            catalog,
            registry,
            data_dir,
        }
    }

    /// Write the snapshot back to the data directory
    pub fn save(&self) {
        if let Err(err) = csv::export_all(
            &self.directory,
            &self.catalog,
            &self.registry,
            &self.data_dir,
        ) {
            error!("Failed to save snapshot to {}: {err}", self.data_dir.display());
            eprintln!("✗ Failed to save data to {}: {err}", self.data_dir.display());
            std::process::exit(1);
        }
    }
}
