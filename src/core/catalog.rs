//! Course catalog
//!
//! Keyed CRUD over course offerings, unique by course code. Unlike
//! students, courses are removed outright; there is no soft-delete.

use crate::core::error::{RecordsError, Result};
use crate::core::models::{Course, Semester};
use std::collections::HashMap;

/// In-memory course catalog indexed by course code
#[derive(Debug, Default)]
pub struct CourseCatalog {
    courses: HashMap<String, Course>,
}

impl CourseCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and register a new course
    ///
    /// # Errors
    /// Returns `DuplicateCourse` if the code is taken, or `ZeroCredits`
    /// if the course carries no credits
    pub fn create(
        &mut self,
        code: String,
        title: String,
        credits: u32,
        instructor: String,
        semester: Semester,
        department: String,
    ) -> Result<&Course> {
        if self.courses.contains_key(&code) {
            return Err(RecordsError::DuplicateCourse(code));
        }
        if credits == 0 {
            return Err(RecordsError::ZeroCredits(code));
        }

        let course = Course::new(code.clone(), title, credits, instructor, semester, department);
        Ok(self.courses.entry(code).or_insert(course))
    }

    /// Look up a course by code
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    /// All courses, sorted by code for deterministic listings
    #[must_use]
    pub fn all(&self) -> Vec<&Course> {
        let mut courses: Vec<&Course> = self.courses.values().collect();
        courses.sort_by(|a, b| a.code.cmp(&b.code));
        courses
    }

    /// Courses offered by a department, sorted by code
    #[must_use]
    pub fn by_department(&self, department: &str) -> Vec<&Course> {
        self.all()
            .into_iter()
            .filter(|c| c.department == department)
            .collect()
    }

    /// Courses offered in a semester, sorted by code
    #[must_use]
    pub fn by_semester(&self, semester: Semester) -> Vec<&Course> {
        self.all()
            .into_iter()
            .filter(|c| c.semester == semester)
            .collect()
    }

    /// Courses taught by an instructor, sorted by code
    #[must_use]
    pub fn by_instructor(&self, instructor: &str) -> Vec<&Course> {
        self.all()
            .into_iter()
            .filter(|c| c.instructor == instructor)
            .collect()
    }

    /// Replace a course record, matched by code
    ///
    /// # Errors
    /// Returns `UnknownCourse` if the code is not held, or `ZeroCredits`
    /// if the replacement carries no credits
    pub fn update(&mut self, course: Course) -> Result<()> {
        if !self.courses.contains_key(&course.code) {
            return Err(RecordsError::UnknownCourse(course.code));
        }
        if course.credits == 0 {
            return Err(RecordsError::ZeroCredits(course.code));
        }
        self.courses.insert(course.code.clone(), course);
        Ok(())
    }

    /// Remove a course from the catalog; silent no-op on an absent key
    pub fn remove(&mut self, code: &str) {
        self.courses.remove(code);
    }

    /// Number of registered courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog holds no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
