//! Error types for the records core
//!
//! Lookup misses are modeled as `Option` returns, not errors. These variants
//! cover invariant violations and boundary parse failures, which surface to
//! the operator unchanged.

use crate::core::models::Semester;
use thiserror::Error;

/// Errors raised by the records core.
#[derive(Debug, Error)]
pub enum RecordsError {
    /// An enrollment already exists for the (student, course) pair.
    #[error("student {reg_no} is already enrolled in course {code}")]
    DuplicateEnrollment {
        /// Student registration number
        reg_no: String,
        /// Course code
        code: String,
    },

    /// Enrolling would push the student past the per-semester credit cap.
    #[error("enrolling in {code} would exceed the maximum of {limit} credits for {semester} ({attempted} attempted)")]
    CreditLimitExceeded {
        /// Course code of the rejected enrollment
        code: String,
        /// Semester whose cap would be exceeded
        semester: Semester,
        /// Credit total that enrolling would have produced
        attempted: u32,
        /// The per-semester credit cap
        limit: u32,
    },

    /// A textual grade did not match one of the recognized symbols.
    #[error("unrecognized grade '{0}'")]
    InvalidGrade(String),

    /// A textual semester did not match one of the recognized terms.
    #[error("unrecognized semester '{0}'")]
    InvalidSemester(String),

    /// A student with this registration number already exists.
    #[error("student with registration number {0} already exists")]
    DuplicateStudent(String),

    /// A course with this code already exists.
    #[error("course with code {0} already exists")]
    DuplicateCourse(String),

    /// An update was directed at a registration number the directory does not hold.
    #[error("student {0} not found")]
    UnknownStudent(String),

    /// An update was directed at a course code the catalog does not hold.
    #[error("course {0} not found")]
    UnknownCourse(String),

    /// Courses must carry at least one credit.
    #[error("course {0} must have at least one credit")]
    ZeroCredits(String),

    /// PDF transcript rendering is reserved for a future revision.
    #[error("PDF transcript generation is not supported")]
    PdfUnsupported,

    /// A CSV snapshot row could not be parsed.
    #[error("invalid CSV data: {0}")]
    Csv(String),

    /// Filesystem failure during import, export, or backup.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias for fallible core operations.
pub type Result<T> = std::result::Result<T, RecordsError>;
