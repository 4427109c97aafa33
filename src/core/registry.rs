//! Enrollment registry and academic-standing computations
//!
//! The registry is the single source of truth for enrollment records,
//! indexed by the (student, course) key pair. Per-student and per-course
//! views are derived queries over that index, never stored lists, so the
//! two can't drift apart. Course attributes (credits, semester) are
//! resolved through the catalog at evaluation time rather than copied
//! into records.

use crate::core::catalog::CourseCatalog;
use crate::core::error::{RecordsError, Result};
use crate::core::models::{Course, Enrollment, Grade, Semester, Student};
use chrono::{Local, NaiveDateTime};
use std::collections::HashMap;

/// Maximum total credits a student may carry within one semester
pub const MAX_SEMESTER_CREDITS: u32 = 21;

type PairKey = (String, String);

/// Owns all enrollment records and enforces enrollment invariants
#[derive(Debug, Default)]
pub struct EnrollmentRegistry {
    records: HashMap<PairKey, Enrollment>,
    next_seq: u64,
}

impl EnrollmentRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enroll a student in a course, timestamped at call time
    ///
    /// Validation fully precedes mutation: a rejected call leaves the
    /// registry unchanged.
    ///
    /// # Errors
    /// Returns `DuplicateEnrollment` if the pair is already enrolled, or
    /// `CreditLimitExceeded` if the student's credits in the course's
    /// semester plus the course's credits would exceed the cap (landing
    /// exactly on the cap is allowed)
    pub fn enroll(
        &mut self,
        student: &Student,
        course: &Course,
        catalog: &CourseCatalog,
    ) -> Result<&Enrollment> {
        self.enroll_at(student, course, catalog, Local::now().naive_local())
    }

    /// Enroll with a caller-supplied timestamp
    ///
    /// Runs the same validation as [`enroll`](Self::enroll); snapshot
    /// import uses this so replayed records keep their original dates
    /// without bypassing invariant checks.
    ///
    /// # Errors
    /// Same as [`enroll`](Self::enroll)
    pub fn enroll_at(
        &mut self,
        student: &Student,
        course: &Course,
        catalog: &CourseCatalog,
        enrolled_at: NaiveDateTime,
    ) -> Result<&Enrollment> {
        let key = (student.reg_no.clone(), course.code.clone());

        if self.records.contains_key(&key) {
            return Err(RecordsError::DuplicateEnrollment {
                reg_no: student.reg_no.clone(),
                code: course.code.clone(),
            });
        }

        let attempted = self.semester_credits(student, course.semester, catalog) + course.credits;
        if attempted > MAX_SEMESTER_CREDITS {
            return Err(RecordsError::CreditLimitExceeded {
                code: course.code.clone(),
                semester: course.semester,
                attempted,
                limit: MAX_SEMESTER_CREDITS,
            });
        }

        let enrollment = Enrollment {
            student_reg_no: student.reg_no.clone(),
            course_code: course.code.clone(),
            enrolled_at,
            grade: None,
            seq: self.next_seq,
        };
        self.next_seq += 1;

        Ok(self.records.entry(key).or_insert(enrollment))
    }

    /// Remove the enrollment for a (student, course) pair
    ///
    /// Idempotent: an unmatched pair is a silent no-op. Re-enrolling
    /// after removal creates a fresh record with a new timestamp.
    pub fn unenroll(&mut self, student: &Student, course: &Course) {
        let key = (student.reg_no.clone(), course.code.clone());
        self.records.remove(&key);
    }

    /// Set or overwrite the grade on the matching enrollment
    ///
    /// An unmatched pair is a silent no-op. Grade validity is a boundary
    /// concern; the registry only ever receives valid enumerants.
    pub fn record_grade(&mut self, student: &Student, course: &Course, grade: Grade) {
        let key = (student.reg_no.clone(), course.code.clone());
        if let Some(enrollment) = self.records.get_mut(&key) {
            enrollment.grade = Some(grade);
        }
    }

    /// Whether an enrollment exists for the pair
    #[must_use]
    pub fn is_enrolled(&self, student: &Student, course: &Course) -> bool {
        self.records
            .contains_key(&(student.reg_no.clone(), course.code.clone()))
    }

    /// All enrollments of a student, in insertion order
    #[must_use]
    pub fn enrollments_for_student(&self, student: &Student) -> Vec<&Enrollment> {
        let mut enrollments: Vec<&Enrollment> = self
            .records
            .values()
            .filter(|e| e.student_reg_no == student.reg_no)
            .collect();
        enrollments.sort_by_key(|e| e.seq);
        enrollments
    }

    /// All enrollments in a course, in insertion order
    #[must_use]
    pub fn enrollments_for_course(&self, course: &Course) -> Vec<&Enrollment> {
        let mut enrollments: Vec<&Enrollment> = self
            .records
            .values()
            .filter(|e| e.course_code == course.code)
            .collect();
        enrollments.sort_by_key(|e| e.seq);
        enrollments
    }

    /// All enrollments, in insertion order
    #[must_use]
    pub fn all(&self) -> Vec<&Enrollment> {
        let mut enrollments: Vec<&Enrollment> = self.records.values().collect();
        enrollments.sort_by_key(|e| e.seq);
        enrollments
    }

    /// Cumulative GPA for a student
    ///
    /// Computed as `sum(points * credits) / sum(credits)` over graded
    /// enrollments only; ungraded enrollments are excluded entirely.
    /// Returns 0.0 when the student has no enrollments or none are
    /// graded (the division is guarded, not a fault).
    #[must_use]
    pub fn gpa(&self, student: &Student, catalog: &CourseCatalog) -> f64 {
        let mut total_points = 0.0;
        let mut total_credits = 0u32;

        for enrollment in self.enrollments_for_student(student) {
            let Some(grade) = enrollment.grade else {
                continue;
            };
            if let Some(course) = catalog.get(&enrollment.course_code) {
                total_points += grade.points() * f64::from(course.credits);
                total_credits += course.credits;
            }
        }

        if total_credits > 0 {
            total_points / f64::from(total_credits)
        } else {
            0.0
        }
    }

    /// Total credits a student carries in a semester
    ///
    /// Enrollments whose course no longer resolves in the catalog
    /// contribute nothing.
    #[must_use]
    pub fn semester_credits(
        &self,
        student: &Student,
        semester: Semester,
        catalog: &CourseCatalog,
    ) -> u32 {
        self.records
            .values()
            .filter(|e| e.student_reg_no == student.reg_no)
            .filter_map(|e| catalog.get(&e.course_code))
            .filter(|c| c.semester == semester)
            .map(|c| c.credits)
            .sum()
    }

    /// Number of enrollment records held
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no enrollments are held
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
