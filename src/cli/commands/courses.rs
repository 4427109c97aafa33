//! Course command handler

use crate::args::CourseSubcommand;
use crate::commands::Snapshot;
use campus_records::config::Config;
use campus_records::core::models::Semester;
use campus_records::info;

/// Dispatch course subcommands
pub fn run(subcommand: CourseSubcommand, config: &Config) {
    let mut snapshot = Snapshot::load(config);

    match subcommand {
        CourseSubcommand::Add {
            code,
            title,
            credits,
            instructor,
            semester,
            department,
        } => {
            // Semester text is validated here at the boundary; the
            // catalog only ever sees a valid enumerant.
            let semester: Semester = match semester.parse() {
                Ok(semester) => semester,
                Err(err) => {
                    eprintln!("✗ {err}");
                    std::process::exit(1);
                }
            };

            match snapshot
                .catalog
                .create(code, title, credits, instructor, semester, department)
            {
                Ok(course) => {
                    info!("Course registered: {course}");
                    println!("✓ Registered {course}");
                }
                Err(err) => {
                    eprintln!("✗ {err}");
                    std::process::exit(1);
                }
            }
            snapshot.save();
        }
        CourseSubcommand::List {
            semester,
            department,
        } => {
            let courses = match (semester, department) {
                (Some(semester), _) => match semester.parse::<Semester>() {
                    Ok(semester) => snapshot.catalog.by_semester(semester),
                    Err(err) => {
                        eprintln!("✗ {err}");
                        std::process::exit(1);
                    }
                },
                (None, Some(department)) => snapshot.catalog.by_department(&department),
                (None, None) => snapshot.catalog.all(),
            };

            if courses.is_empty() {
                println!("No matching courses");
                return;
            }
            for course in courses {
                println!("{course}");
            }
        }
        CourseSubcommand::Remove { code } => {
            snapshot.catalog.remove(&code);
            snapshot.save();
            println!("✓ Removed {code}");
        }
    }
}
