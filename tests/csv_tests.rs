//! Integration tests for CSV snapshot import and export

use campus_records::core::catalog::CourseCatalog;
use campus_records::core::directory::StudentDirectory;
use campus_records::core::error::RecordsError;
use campus_records::core::io::csv;
use campus_records::core::models::{Grade, Semester};
use campus_records::core::registry::EnrollmentRegistry;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn imports_students_with_status() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = write_file(
        temp_dir.path(),
        "students.csv",
        "regNo,fullName,email,status\n\
         S001,Ada Lovelace,ada@example.edu,true\n\
         S002,Charles Babbage,charles@example.edu,false\n",
    );

    let mut directory = StudentDirectory::new();
    let imported = csv::import_students(&path, &mut directory).expect("import");

    assert_eq!(imported, 2);
    assert!(directory.get("S001").unwrap().active);
    assert!(!directory.get("S002").unwrap().active);
}

#[test]
fn imports_courses_and_validates_semester() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = write_file(
        temp_dir.path(),
        "courses.csv",
        "code,title,credits,instructor,semester,department\n\
         CS101,Intro to Programming,3,I-001,FALL,Computer Science\n",
    );

    let mut catalog = CourseCatalog::new();
    let imported = csv::import_courses(&path, &mut catalog).expect("import");

    assert_eq!(imported, 1);
    let course = catalog.get("CS101").unwrap();
    assert_eq!(course.credits, 3);
    assert_eq!(course.semester, Semester::Fall);
}

#[test]
fn course_import_rejects_unknown_semester() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = write_file(
        temp_dir.path(),
        "courses.csv",
        "code,title,credits,instructor,semester,department\n\
         CS101,Intro,3,I-001,WINTER,Computer Science\n",
    );

    let mut catalog = CourseCatalog::new();
    let err = csv::import_courses(&path, &mut catalog).unwrap_err();

    assert!(matches!(err, RecordsError::InvalidSemester(s) if s == "WINTER"));
    assert!(catalog.is_empty());
}

fn seeded(dir: &Path) -> (StudentDirectory, CourseCatalog) {
    write_file(
        dir,
        "students.csv",
        "regNo,fullName,email,status\nS001,Ada Lovelace,ada@example.edu,true\n",
    );
    write_file(
        dir,
        "courses.csv",
        "code,title,credits,instructor,semester,department\n\
         CS101,Intro to Programming,3,I-001,FALL,Computer Science\n\
         CS205,Data Structures,4,I-002,FALL,Computer Science\n",
    );

    let mut directory = StudentDirectory::new();
    let mut catalog = CourseCatalog::new();
    csv::import_students(&dir.join("students.csv"), &mut directory).expect("students");
    csv::import_courses(&dir.join("courses.csv"), &mut catalog).expect("courses");
    (directory, catalog)
}

#[test]
fn imports_enrollments_preserving_dates_and_grades() {
    let temp_dir = TempDir::new().expect("temp dir");
    let (directory, catalog) = seeded(temp_dir.path());

    let path = write_file(
        temp_dir.path(),
        "enrollments.csv",
        "studentRegNo,courseCode,enrollmentDate,grade\n\
         S001,CS101,2024-09-01 09:30:00,A\n\
         S001,CS205,2024-09-02 10:00:00,\n",
    );

    let mut registry = EnrollmentRegistry::new();
    let imported =
        csv::import_enrollments(&path, &directory, &catalog, &mut registry).expect("import");

    assert_eq!(imported, 2);
    let student = directory.get("S001").unwrap().clone();
    let enrollments = registry.enrollments_for_student(&student);
    assert_eq!(enrollments[0].grade, Some(Grade::A));
    assert_eq!(
        enrollments[0].enrolled_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        "2024-09-01 09:30:00"
    );
    assert!(enrollments[1].grade.is_none());
}

#[test]
fn enrollment_import_skips_unknown_references() {
    let temp_dir = TempDir::new().expect("temp dir");
    let (directory, catalog) = seeded(temp_dir.path());

    let path = write_file(
        temp_dir.path(),
        "enrollments.csv",
        "studentRegNo,courseCode,enrollmentDate,grade\n\
         S999,CS101,2024-09-01 09:30:00,A\n\
         S001,CS999,2024-09-01 09:30:00,B\n\
         S001,CS101,2024-09-01 09:30:00,\n",
    );

    let mut registry = EnrollmentRegistry::new();
    let imported =
        csv::import_enrollments(&path, &directory, &catalog, &mut registry).expect("import");

    // Only the row with a known student and course is kept
    assert_eq!(imported, 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn enrollment_import_does_not_bypass_invariants() {
    let temp_dir = TempDir::new().expect("temp dir");
    let (directory, catalog) = seeded(temp_dir.path());

    // The same pair twice: the replayed second row must hit the
    // duplicate check exactly as live input would
    let path = write_file(
        temp_dir.path(),
        "enrollments.csv",
        "studentRegNo,courseCode,enrollmentDate,grade\n\
         S001,CS101,2024-09-01 09:30:00,\n\
         S001,CS101,2024-09-02 09:30:00,\n",
    );

    let mut registry = EnrollmentRegistry::new();
    let err = csv::import_enrollments(&path, &directory, &catalog, &mut registry).unwrap_err();

    assert!(matches!(err, RecordsError::DuplicateEnrollment { .. }));
}

#[test]
fn enrollment_import_rejects_malformed_dates() {
    let temp_dir = TempDir::new().expect("temp dir");
    let (directory, catalog) = seeded(temp_dir.path());

    let path = write_file(
        temp_dir.path(),
        "enrollments.csv",
        "studentRegNo,courseCode,enrollmentDate,grade\n\
         S001,CS101,not-a-date,\n",
    );

    let mut registry = EnrollmentRegistry::new();
    let err = csv::import_enrollments(&path, &directory, &catalog, &mut registry).unwrap_err();

    assert!(matches!(err, RecordsError::Csv(msg) if msg.contains("line 2")));
}

#[test]
fn export_then_import_restores_the_data_set() {
    let temp_dir = TempDir::new().expect("temp dir");
    let (directory, catalog) = seeded(temp_dir.path());

    let student = directory.get("S001").unwrap().clone();
    let cs101 = catalog.get("CS101").unwrap().clone();
    let mut registry = EnrollmentRegistry::new();
    registry.enroll(&student, &cs101, &catalog).expect("enroll");
    registry.record_grade(&student, &cs101, Grade::S);

    let out_dir = temp_dir.path().join("out");
    csv::export_all(&directory, &catalog, &registry, &out_dir).expect("export");

    // Header rows are fixed
    let students_csv = fs::read_to_string(out_dir.join("students.csv")).expect("read");
    assert!(students_csv.starts_with("regNo,fullName,email,status\n"));
    let enrollments_csv = fs::read_to_string(out_dir.join("enrollments.csv")).expect("read");
    assert!(enrollments_csv.starts_with("studentRegNo,courseCode,enrollmentDate,grade\n"));
    assert!(enrollments_csv.contains(",S\n"));

    let mut directory2 = StudentDirectory::new();
    let mut catalog2 = CourseCatalog::new();
    let mut registry2 = EnrollmentRegistry::new();
    csv::import_all(&out_dir, &mut directory2, &mut catalog2, &mut registry2).expect("import");

    assert_eq!(directory2.len(), 1);
    assert_eq!(catalog2.len(), 2);
    assert_eq!(registry2.len(), 1);
    let restored = registry2.enrollments_for_student(&student);
    assert_eq!(restored[0].grade, Some(Grade::S));
}

#[test]
fn import_all_tolerates_missing_files() {
    let temp_dir = TempDir::new().expect("temp dir");

    let mut directory = StudentDirectory::new();
    let mut catalog = CourseCatalog::new();
    let mut registry = EnrollmentRegistry::new();
    csv::import_all(temp_dir.path(), &mut directory, &mut catalog, &mut registry)
        .expect("empty data dir is fine");

    assert!(directory.is_empty());
    assert!(catalog.is_empty());
    assert!(registry.is_empty());
}
