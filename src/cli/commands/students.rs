//! Student command handler

use crate::args::StudentSubcommand;
use crate::commands::Snapshot;
use campus_records::config::Config;
use campus_records::info;

/// Dispatch student subcommands
pub fn run(subcommand: StudentSubcommand, config: &Config) {
    let mut snapshot = Snapshot::load(config);

    match subcommand {
        StudentSubcommand::Add {
            reg_no,
            full_name,
            email,
        } => {
            match snapshot.directory.create(reg_no, full_name, email) {
                Ok(student) => {
                    info!("Student registered: {student}");
                    println!("✓ Registered {student}");
                }
                Err(err) => {
                    eprintln!("✗ {err}");
                    std::process::exit(1);
                }
            }
            snapshot.save();
        }
        StudentSubcommand::List { active } => {
            let students = if active {
                snapshot.directory.active()
            } else {
                snapshot.directory.all()
            };

            if students.is_empty() {
                println!("No students registered");
                return;
            }
            for student in students {
                println!("{student}");
            }
        }
        StudentSubcommand::Deactivate { reg_no } => {
            snapshot.directory.deactivate(&reg_no);
            snapshot.save();
            println!("✓ Deactivated {reg_no}");
        }
    }
}
