//! Transcript composition
//!
//! Renders a student's academic history as a deterministic text report.
//! Blocks are sorted by (semester, course code), not by enrollment order,
//! so repeated calls over unchanged data are byte-identical and suitable
//! for golden-file comparison.

use crate::core::catalog::CourseCatalog;
use crate::core::error::{RecordsError, Result};
use crate::core::models::{Course, Enrollment, Student};
use crate::core::registry::EnrollmentRegistry;
use std::fmt::Write as _;
use std::str::FromStr;

/// Supported transcript output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptFormat {
    /// Plain text report
    Text,
    /// PDF rendering (reserved for a future revision)
    Pdf,
}

impl FromStr for TranscriptFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "pdf" => Ok(Self::Pdf),
            _ => Err(format!("Unknown transcript format: {s}")),
        }
    }
}

/// Composes transcripts from registry and catalog state
#[derive(Debug, Clone, Copy)]
pub struct TranscriptComposer<'a> {
    registry: &'a EnrollmentRegistry,
    catalog: &'a CourseCatalog,
}

impl<'a> TranscriptComposer<'a> {
    /// Create a composer over the given registry and catalog
    #[must_use]
    pub const fn new(registry: &'a EnrollmentRegistry, catalog: &'a CourseCatalog) -> Self {
        Self { registry, catalog }
    }

    /// Generate the transcript text for a student
    ///
    /// One block per enrollment, sorted by (semester ordinal, course
    /// code); ungraded enrollments show the `Not Graded` literal. The
    /// footer carries the cumulative GPA to two decimal places.
    #[must_use]
    pub fn generate(&self, student: &Student) -> String {
        let mut rows: Vec<(&Course, &Enrollment)> = self
            .registry
            .enrollments_for_student(student)
            .into_iter()
            .filter_map(|e| self.catalog.get(&e.course_code).map(|c| (c, e)))
            .collect();
        rows.sort_by(|(a, _), (b, _)| {
            a.semester
                .cmp(&b.semester)
                .then_with(|| a.code.cmp(&b.code))
        });

        let gpa = self.registry.gpa(student, self.catalog);

        let mut out = String::new();
        out.push_str("ACADEMIC TRANSCRIPT\n");
        out.push_str("==================\n\n");
        let _ = writeln!(out, "Student: {} ({})", student.full_name, student.reg_no);
        out.push_str("------------------\n\n");

        for (course, enrollment) in rows {
            let _ = writeln!(out, "{}: {}", course.code, course.title);
            let _ = writeln!(
                out,
                "Credits: {}  Grade: {}",
                course.credits,
                enrollment.grade_label()
            );
            out.push('\n');
        }

        out.push_str("------------------\n");
        let _ = writeln!(out, "Cumulative GPA: {gpa:.2}");

        out
    }

    /// Write the transcript for a student to standard output
    pub fn print(&self, student: &Student) {
        println!("{}", self.generate(student));
    }

    /// Render the transcript as PDF
    ///
    /// # Errors
    /// Always returns `PdfUnsupported`; PDF rendering is a documented
    /// future extension point
    pub fn generate_pdf(&self, _student: &Student) -> Result<Vec<u8>> {
        Err(RecordsError::PdfUnsupported)
    }
}
