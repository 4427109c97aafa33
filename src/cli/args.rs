//! CLI argument definitions for `CampusRecords`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use campus_records::config::ConfigOverrides;
use campus_records::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `data_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum StudentSubcommand {
    /// Register a new student.
    Add {
        /// Registration number (unique key)
        #[arg(value_name = "REG_NO")]
        reg_no: String,
        /// Full display name
        #[arg(value_name = "NAME")]
        full_name: String,
        /// Contact email
        #[arg(value_name = "EMAIL")]
        email: String,
    },
    /// List students.
    List {
        /// Show active students only
        #[arg(long)]
        active: bool,
    },
    /// Deactivate a student (students are never deleted).
    Deactivate {
        /// Registration number
        #[arg(value_name = "REG_NO")]
        reg_no: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum CourseSubcommand {
    /// Register a new course.
    Add {
        /// Course code (unique key)
        #[arg(value_name = "CODE")]
        code: String,
        /// Course title
        #[arg(value_name = "TITLE")]
        title: String,
        /// Credit count (must be positive)
        #[arg(value_name = "CREDITS")]
        credits: u32,
        /// Instructor identifier
        #[arg(value_name = "INSTRUCTOR")]
        instructor: String,
        /// Semester (spring, summer, fall)
        #[arg(value_name = "SEMESTER")]
        semester: String,
        /// Owning department
        #[arg(value_name = "DEPARTMENT")]
        department: String,
    },
    /// List courses.
    List {
        /// Filter by semester (spring, summer, fall)
        #[arg(long, value_name = "SEMESTER")]
        semester: Option<String>,
        /// Filter by department
        #[arg(long, value_name = "DEPARTMENT")]
        department: Option<String>,
    },
    /// Remove a course from the catalog.
    Remove {
        /// Course code
        #[arg(value_name = "CODE")]
        code: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Manage the student directory.
    Student {
        #[command(subcommand)]
        subcommand: StudentSubcommand,
    },
    /// Manage the course catalog.
    Course {
        #[command(subcommand)]
        subcommand: CourseSubcommand,
    },
    /// Enroll a student in a course.
    Enroll {
        /// Student registration number
        #[arg(value_name = "REG_NO")]
        reg_no: String,
        /// Course code
        #[arg(value_name = "CODE")]
        code: String,
    },
    /// Remove a student's enrollment in a course.
    Unenroll {
        /// Student registration number
        #[arg(value_name = "REG_NO")]
        reg_no: String,
        /// Course code
        #[arg(value_name = "CODE")]
        code: String,
    },
    /// Record (or overwrite) a grade for an enrollment.
    Grade {
        /// Student registration number
        #[arg(value_name = "REG_NO")]
        reg_no: String,
        /// Course code
        #[arg(value_name = "CODE")]
        code: String,
        /// Letter grade (S, A, B, C, D, E, F)
        #[arg(value_name = "GRADE")]
        grade: String,
    },
    /// Print a student's transcript.
    Transcript {
        /// Student registration number
        #[arg(value_name = "REG_NO")]
        reg_no: String,
        /// Output format: text or pdf
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: String,
    },
    /// Export the full data set as CSV.
    Export {
        /// Target directory (defaults to config `data_dir`)
        #[arg(short, long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },
    /// Create a timestamped backup of the data set.
    Backup,
    /// Show size and contents of the latest backup.
    BackupInfo,
}

#[derive(Parser, Debug)]
#[command(
    name = "campusrecords",
    about = "CampusRecords command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config data directory
    #[arg(long = "config-data-dir", value_name = "DIR")]
    pub config_data_dir: Option<PathBuf>,

    /// Override config data directory (short form)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override config backup directory
    #[arg(long = "config-backup-dir", value_name = "DIR")]
    pub config_backup_dir: Option<PathBuf>,

    /// Override config backup directory (short form)
    #[arg(long = "backup-dir", value_name = "DIR")]
    pub backup_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be
    /// applied to the loaded configuration. Short-form flags (e.g.,
    /// `--data-dir`) take precedence over long-form flags (e.g.,
    /// `--config-data-dir`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_data_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            backup_dir: self
                .backup_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_backup_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_data_dir: None,
            data_dir: None,
            config_backup_dir: None,
            backup_dir: None,
            command: Command::Config { subcommand: None },
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli().to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.data_dir.is_none());
        assert!(overrides.backup_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli();
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_verbose = Some(true);
        cli.data_dir = Some(PathBuf::from("/records/data"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.data_dir, Some("/records/data".to_string()));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let mut cli = bare_cli();
        cli.config_data_dir = Some(PathBuf::from("/long/data"));
        cli.data_dir = Some(PathBuf::from("/short/data"));
        cli.config_backup_dir = Some(PathBuf::from("/long/backups"));
        cli.backup_dir = Some(PathBuf::from("/short/backups"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.data_dir, Some("/short/data".to_string()));
        assert_eq!(overrides.backup_dir, Some("/short/backups".to_string()));
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        let mut cli = bare_cli();
        cli.config_data_dir = Some(PathBuf::from("/long/data"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.data_dir, Some("/long/data".to_string()));
    }
}
