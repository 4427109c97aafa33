//! Integration tests for backup creation and directory utilities

use campus_records::core::catalog::CourseCatalog;
use campus_records::core::directory::StudentDirectory;
use campus_records::core::io::backup;
use campus_records::core::models::Semester;
use campus_records::core::registry::EnrollmentRegistry;
use std::fs;
use tempfile::TempDir;

fn sample_data() -> (StudentDirectory, CourseCatalog, EnrollmentRegistry) {
    let mut directory = StudentDirectory::new();
    directory
        .create(
            "S001".to_string(),
            "Ada Lovelace".to_string(),
            "ada@example.edu".to_string(),
        )
        .expect("create student");

    let mut catalog = CourseCatalog::new();
    catalog
        .create(
            "CS101".to_string(),
            "Intro to Programming".to_string(),
            3,
            "I-001".to_string(),
            Semester::Fall,
            "Computer Science".to_string(),
        )
        .expect("create course");

    let mut registry = EnrollmentRegistry::new();
    let student = directory.get("S001").unwrap().clone();
    let course = catalog.get("CS101").unwrap().clone();
    registry.enroll(&student, &course, &catalog).expect("enroll");

    (directory, catalog, registry)
}

#[test]
fn backup_creates_timestamped_directory_with_full_export() {
    let temp_dir = TempDir::new().expect("temp dir");
    let (directory, catalog, registry) = sample_data();

    let backup_path = backup::create_backup(&directory, &catalog, &registry, temp_dir.path())
        .expect("create backup");

    let name = backup_path.file_name().unwrap().to_string_lossy();
    assert!(name.starts_with("backup_"));
    assert!(backup_path.join("students.csv").exists());
    assert!(backup_path.join("courses.csv").exists());
    assert!(backup_path.join("enrollments.csv").exists());
}

#[test]
fn directory_size_sums_all_files_recursively() {
    let temp_dir = TempDir::new().expect("temp dir");
    fs::write(temp_dir.path().join("a.txt"), "12345").expect("write");
    fs::create_dir(temp_dir.path().join("sub")).expect("mkdir");
    fs::write(temp_dir.path().join("sub/b.txt"), "1234567890").expect("write");

    assert_eq!(backup::directory_size(temp_dir.path()), 15);
}

#[test]
fn list_contents_is_relative_and_sorted() {
    let temp_dir = TempDir::new().expect("temp dir");
    fs::write(temp_dir.path().join("b.txt"), "b").expect("write");
    fs::create_dir(temp_dir.path().join("sub")).expect("mkdir");
    fs::write(temp_dir.path().join("sub/a.txt"), "a").expect("write");

    let entries = backup::list_contents(temp_dir.path());
    assert_eq!(entries, vec!["b.txt", "sub/", "sub/a.txt"]);
}

#[test]
fn latest_backup_picks_newest_and_ignores_other_entries() {
    let temp_dir = TempDir::new().expect("temp dir");
    let root = temp_dir.path();

    fs::create_dir(root.join("backup_2024-01-01_00-00-00")).expect("mkdir");
    fs::create_dir(root.join("unrelated")).expect("mkdir");
    fs::write(root.join("backup_stray_file"), "").expect("write");

    let newest = root.join("backup_2024-06-01_00-00-00");
    fs::create_dir(&newest).expect("mkdir");
    // Writing into the directory bumps its modification time past the
    // earlier backup's
    fs::write(newest.join("students.csv"), "regNo,fullName,email,status\n").expect("write");

    let latest = backup::latest_backup(root).expect("scan").expect("found");
    assert_eq!(latest, newest);
}

#[test]
fn latest_backup_is_none_when_root_is_empty() {
    let temp_dir = TempDir::new().expect("temp dir");
    assert!(backup::latest_backup(temp_dir.path())
        .expect("scan")
        .is_none());
}
