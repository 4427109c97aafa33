//! Enrollment command handlers (enroll, unenroll, grade)

use crate::commands::Snapshot;
use campus_records::config::Config;
use campus_records::core::models::Grade;
use campus_records::info;

/// Enroll a student in a course
pub fn enroll(reg_no: &str, code: &str, config: &Config) {
    let mut snapshot = Snapshot::load(config);

    let Some(student) = snapshot.directory.get(reg_no).cloned() else {
        eprintln!("✗ student {reg_no} not found");
        std::process::exit(1);
    };
    let Some(course) = snapshot.catalog.get(code).cloned() else {
        eprintln!("✗ course {code} not found");
        std::process::exit(1);
    };

    match snapshot
        .registry
        .enroll(&student, &course, &snapshot.catalog)
    {
        Ok(enrollment) => {
            info!("Enrolled: {enrollment}");
            println!("✓ Enrolled {reg_no} in {code}");
        }
        Err(err) => {
            // Invariant violations surface verbatim; no state changed
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    }
    snapshot.save();
}

/// Remove a student's enrollment; a missing record is not an error
pub fn unenroll(reg_no: &str, code: &str, config: &Config) {
    let mut snapshot = Snapshot::load(config);

    if let (Some(student), Some(course)) = (
        snapshot.directory.get(reg_no).cloned(),
        snapshot.catalog.get(code).cloned(),
    ) {
        snapshot.registry.unenroll(&student, &course);
        snapshot.save();
    }
    println!("✓ Unenrolled {reg_no} from {code}");
}

/// Record a grade for an enrollment
pub fn grade(reg_no: &str, code: &str, grade_str: &str, config: &Config) {
    // Grade text is validated here at the boundary; the registry only
    // ever sees a valid enumerant.
    let grade: Grade = match grade_str.parse() {
        Ok(grade) => grade,
        Err(err) => {
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    };

    let mut snapshot = Snapshot::load(config);

    if let (Some(student), Some(course)) = (
        snapshot.directory.get(reg_no).cloned(),
        snapshot.catalog.get(code).cloned(),
    ) {
        snapshot.registry.record_grade(&student, &course, grade);
        snapshot.save();
    }
    println!("✓ Recorded grade {grade} for {reg_no} in {code}");
}
