//! Enrollment model

use super::Grade;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp format used for enrollment dates in CSV snapshots
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A student's enrollment in a course
///
/// Uniquely identified by the (student, course) key pair; at most one
/// enrollment exists per pair at a time. The enrollment date is set once
/// when the record is created. Records are owned exclusively by the
/// registry; per-student views are derived queries, not stored lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Registration number of the enrolled student
    pub student_reg_no: String,

    /// Code of the course enrolled in
    pub course_code: String,

    /// When the enrollment was created (immutable)
    pub enrolled_at: NaiveDateTime,

    /// Recorded grade, `None` until one is recorded
    pub grade: Option<Grade>,

    /// Registry-assigned insertion sequence, used for deterministic ordering
    pub(crate) seq: u64,
}

impl Enrollment {
    /// Whether this record links the given student and course keys
    #[must_use]
    pub fn matches(&self, reg_no: &str, code: &str) -> bool {
        self.student_reg_no == reg_no && self.course_code == code
    }

    /// Grade symbol, or the `Not Graded` literal used in transcripts
    #[must_use]
    pub fn grade_label(&self) -> &'static str {
        self.grade.map_or("Not Graded", Grade::as_str)
    }
}

impl fmt::Display for Enrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Enrollment: {} in {} [Grade: {}]",
            self.student_reg_no,
            self.course_code,
            self.grade_label()
        )
    }
}
