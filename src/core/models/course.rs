//! Course model

use super::Semester;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a course offering in the catalog
///
/// The course code is the identity key; two `Course` values with the same
/// `code` refer to the same entity regardless of the other fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course code (unique, immutable key, e.g. "CS2510")
    pub code: String,

    /// Course title
    pub title: String,

    /// Credit count (always > 0; enforced at the catalog boundary)
    pub credits: u32,

    /// Instructor identifier
    pub instructor: String,

    /// Term in which the course is offered
    pub semester: Semester,

    /// Owning department
    pub department: String,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `code` - Course code (unique key)
    /// * `title` - Course title
    /// * `credits` - Credit count
    /// * `instructor` - Instructor identifier
    /// * `semester` - Term in which the course is offered
    /// * `department` - Owning department
    #[must_use]
    pub const fn new(
        code: String,
        title: String,
        credits: u32,
        instructor: String,
        semester: Semester,
        department: String,
    ) -> Self {
        Self {
            code,
            title,
            credits,
            instructor,
            semester,
            department,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({} credits) - {}, {}",
            self.code, self.title, self.credits, self.department, self.semester
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new(
            "CS2510".to_string(),
            "Fundamentals of Computer Science 2".to_string(),
            4,
            "I-104".to_string(),
            Semester::Fall,
            "Computer Science".to_string(),
        );

        assert_eq!(course.code, "CS2510");
        assert_eq!(course.credits, 4);
        assert_eq!(course.semester, Semester::Fall);
    }

    #[test]
    fn test_course_display() {
        let course = Course::new(
            "MATH1342".to_string(),
            "Calculus 1".to_string(),
            4,
            "I-210".to_string(),
            Semester::Spring,
            "Mathematics".to_string(),
        );

        let rendered = course.to_string();
        assert!(rendered.contains("MATH1342"));
        assert!(rendered.contains("4 credits"));
        assert!(rendered.contains("SPRING"));
    }
}
