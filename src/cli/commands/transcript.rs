//! Transcript command handler

use crate::commands::Snapshot;
use campus_records::config::Config;
use campus_records::core::transcript::{TranscriptComposer, TranscriptFormat};
use campus_records::error;

/// Print a student's transcript in the requested format
pub fn run(reg_no: &str, format_str: &str, config: &Config) {
    let format: TranscriptFormat = match format_str.parse() {
        Ok(format) => format,
        Err(err) => {
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    };

    let snapshot = Snapshot::load(config);

    let Some(student) = snapshot.directory.get(reg_no).cloned() else {
        eprintln!("✗ student {reg_no} not found");
        std::process::exit(1);
    };

    let composer = TranscriptComposer::new(&snapshot.registry, &snapshot.catalog);
    match format {
        TranscriptFormat::Text => composer.print(&student),
        TranscriptFormat::Pdf => {
            if let Err(err) = composer.generate_pdf(&student) {
                error!("Transcript rendering failed for {reg_no}: {err}");
                eprintln!("✗ {err}");
                std::process::exit(1);
            }
        }
    }
}
