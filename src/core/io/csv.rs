//! CSV snapshot import and export
//!
//! Hand-parsed comma-separated files with fixed column headers. Import
//! constructs entities via the directory/catalog/registry creation
//! operations so no invariant check is bypassed; rows referring to
//! unknown students or courses are skipped with a warning, matching the
//! absent-optional lookup semantics of the core.

use crate::core::catalog::CourseCatalog;
use crate::core::directory::StudentDirectory;
use crate::core::error::{RecordsError, Result};
use crate::core::models::enrollment::DATE_FORMAT;
use crate::core::registry::EnrollmentRegistry;
use crate::warn;
use chrono::NaiveDateTime;
use std::fs;
use std::path::Path;

/// Snapshot file name for students
pub const STUDENTS_FILE: &str = "students.csv";
/// Snapshot file name for courses
pub const COURSES_FILE: &str = "courses.csv";
/// Snapshot file name for enrollments
pub const ENROLLMENTS_FILE: &str = "enrollments.csv";

const STUDENT_HEADER: &str = "regNo,fullName,email,status";
const COURSE_HEADER: &str = "code,title,credits,instructor,semester,department";
const ENROLLMENT_HEADER: &str = "studentRegNo,courseCode,enrollmentDate,grade";

/// Import students from a snapshot file into the directory
///
/// # Errors
/// Returns an error if the file cannot be read, a row is malformed, or
/// a registration number collides with an existing student
pub fn import_students(path: &Path, directory: &mut StudentDirectory) -> Result<usize> {
    let content = fs::read_to_string(path)?;
    let mut imported = 0;

    for (line_no, line) in content.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() < 4 {
            return Err(RecordsError::Csv(format!(
                "students line {}: expected 4 columns, found {}",
                line_no + 1,
                parts.len()
            )));
        }

        directory.create(
            parts[0].to_string(),
            parts[1].to_string(),
            parts[2].to_string(),
        )?;
        if !parts[3].eq_ignore_ascii_case("true") {
            directory.deactivate(parts[0]);
        }
        imported += 1;
    }

    Ok(imported)
}

/// Import courses from a snapshot file into the catalog
///
/// # Errors
/// Returns an error if the file cannot be read, a row is malformed, the
/// semester or credit column does not parse, or a course code collides
pub fn import_courses(path: &Path, catalog: &mut CourseCatalog) -> Result<usize> {
    let content = fs::read_to_string(path)?;
    let mut imported = 0;

    for (line_no, line) in content.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() < 6 {
            return Err(RecordsError::Csv(format!(
                "courses line {}: expected 6 columns, found {}",
                line_no + 1,
                parts.len()
            )));
        }

        let credits: u32 = parts[2].parse().map_err(|_| {
            RecordsError::Csv(format!(
                "courses line {}: invalid credit count '{}'",
                line_no + 1,
                parts[2]
            ))
        })?;
        let semester = parts[4].parse()?;

        catalog.create(
            parts[0].to_string(),
            parts[1].to_string(),
            credits,
            parts[3].to_string(),
            semester,
            parts[5].to_string(),
        )?;
        imported += 1;
    }

    Ok(imported)
}

/// Import enrollments from a snapshot file into the registry
///
/// Rows referencing a student or course that is not present are skipped
/// with a warning. Each kept row replays through the registry's full
/// enrollment validation, preserving its original timestamp.
///
/// # Errors
/// Returns an error if the file cannot be read, a row is malformed, or
/// a replayed row violates an enrollment invariant
pub fn import_enrollments(
    path: &Path,
    directory: &StudentDirectory,
    catalog: &CourseCatalog,
    registry: &mut EnrollmentRegistry,
) -> Result<usize> {
    let content = fs::read_to_string(path)?;
    let mut imported = 0;

    for (line_no, line) in content.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() < 3 {
            return Err(RecordsError::Csv(format!(
                "enrollments line {}: expected 4 columns, found {}",
                line_no + 1,
                parts.len()
            )));
        }

        let (Some(student), Some(course)) = (directory.get(parts[0]), catalog.get(parts[1]))
        else {
            warn!(
                "Skipping enrollment line {}: unknown student '{}' or course '{}'",
                line_no + 1,
                parts[0],
                parts[1]
            );
            continue;
        };

        let enrolled_at = NaiveDateTime::parse_from_str(parts[2], DATE_FORMAT).map_err(|_| {
            RecordsError::Csv(format!(
                "enrollments line {}: invalid enrollment date '{}'",
                line_no + 1,
                parts[2]
            ))
        })?;

        let student = student.clone();
        let course = course.clone();
        registry.enroll_at(&student, &course, catalog, enrolled_at)?;

        let grade_str = parts.get(3).copied().unwrap_or("");
        if !grade_str.is_empty() {
            registry.record_grade(&student, &course, grade_str.parse()?);
        }
        imported += 1;
    }

    Ok(imported)
}

/// Export all students to a snapshot file, sorted by registration number
///
/// # Errors
/// Returns an error if the file cannot be written
pub fn export_students(directory: &StudentDirectory, path: &Path) -> Result<()> {
    let mut lines = vec![STUDENT_HEADER.to_string()];
    lines.extend(directory.all().iter().map(|s| {
        format!(
            "{},{},{},{}",
            s.reg_no, s.full_name, s.email, s.active
        )
    }));
    write_lines(path, &lines)
}

/// Export all courses to a snapshot file, sorted by code
///
/// # Errors
/// Returns an error if the file cannot be written
pub fn export_courses(catalog: &CourseCatalog, path: &Path) -> Result<()> {
    let mut lines = vec![COURSE_HEADER.to_string()];
    lines.extend(catalog.all().iter().map(|c| {
        format!(
            "{},{},{},{},{},{}",
            c.code, c.title, c.credits, c.instructor, c.semester, c.department
        )
    }));
    write_lines(path, &lines)
}

/// Export all enrollments to a snapshot file, in insertion order
///
/// The grade column is empty for ungraded enrollments.
///
/// # Errors
/// Returns an error if the file cannot be written
pub fn export_enrollments(registry: &EnrollmentRegistry, path: &Path) -> Result<()> {
    let mut lines = vec![ENROLLMENT_HEADER.to_string()];
    lines.extend(registry.all().iter().map(|e| {
        format!(
            "{},{},{},{}",
            e.student_reg_no,
            e.course_code,
            e.enrolled_at.format(DATE_FORMAT),
            e.grade.map_or("", |g| g.as_str())
        )
    }));
    write_lines(path, &lines)
}

/// Export the full data set into a directory
///
/// Writes `students.csv`, `courses.csv`, and `enrollments.csv`, creating
/// the directory first if needed.
///
/// # Errors
/// Returns an error if the directory or any file cannot be written
pub fn export_all(
    directory: &StudentDirectory,
    catalog: &CourseCatalog,
    registry: &EnrollmentRegistry,
    dir: &Path,
) -> Result<()> {
    fs::create_dir_all(dir)?;
    export_students(directory, &dir.join(STUDENTS_FILE))?;
    export_courses(catalog, &dir.join(COURSES_FILE))?;
    export_enrollments(registry, &dir.join(ENROLLMENTS_FILE))?;
    Ok(())
}

/// Import any snapshot files present in a directory
///
/// Missing files are treated as empty data sets, so a first run against
/// an empty data directory succeeds cleanly.
///
/// # Errors
/// Returns an error if a present file fails to import
pub fn import_all(
    dir: &Path,
    directory: &mut StudentDirectory,
    catalog: &mut CourseCatalog,
    registry: &mut EnrollmentRegistry,
) -> Result<()> {
    let students = dir.join(STUDENTS_FILE);
    if students.exists() {
        import_students(&students, directory)?;
    }
    let courses = dir.join(COURSES_FILE);
    if courses.exists() {
        import_courses(&courses, catalog)?;
    }
    let enrollments = dir.join(ENROLLMENTS_FILE);
    if enrollments.exists() {
        import_enrollments(&enrollments, directory, catalog, registry)?;
    }
    Ok(())
}

fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(path, content)?;
    Ok(())
}
