//! Student directory
//!
//! Keyed CRUD over students, unique by registration number. Students are
//! deactivated rather than deleted so their academic history stays
//! resolvable.

use crate::core::error::{RecordsError, Result};
use crate::core::models::Student;
use std::collections::HashMap;

/// In-memory student directory indexed by registration number
#[derive(Debug, Default)]
pub struct StudentDirectory {
    students: HashMap<String, Student>,
}

impl StudentDirectory {
    /// Create an empty directory
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and register a new active student
    ///
    /// # Errors
    /// Returns `DuplicateStudent` if the registration number is taken
    pub fn create(&mut self, reg_no: String, full_name: String, email: String) -> Result<&Student> {
        if self.students.contains_key(&reg_no) {
            return Err(RecordsError::DuplicateStudent(reg_no));
        }

        let student = Student::new(reg_no.clone(), full_name, email);
        Ok(self.students.entry(reg_no).or_insert(student))
    }

    /// Look up a student by registration number
    #[must_use]
    pub fn get(&self, reg_no: &str) -> Option<&Student> {
        self.students.get(reg_no)
    }

    /// All students, sorted by registration number for deterministic listings
    #[must_use]
    pub fn all(&self) -> Vec<&Student> {
        let mut students: Vec<&Student> = self.students.values().collect();
        students.sort_by(|a, b| a.reg_no.cmp(&b.reg_no));
        students
    }

    /// Active students only, sorted by registration number
    #[must_use]
    pub fn active(&self) -> Vec<&Student> {
        self.all().into_iter().filter(|s| s.active).collect()
    }

    /// Replace a student record, matched by registration number
    ///
    /// # Errors
    /// Returns `UnknownStudent` if the registration number is not held
    pub fn update(&mut self, student: Student) -> Result<()> {
        if !self.students.contains_key(&student.reg_no) {
            return Err(RecordsError::UnknownStudent(student.reg_no));
        }
        self.students.insert(student.reg_no.clone(), student);
        Ok(())
    }

    /// Mark a student inactive; silent no-op on an absent key
    pub fn deactivate(&mut self, reg_no: &str) {
        if let Some(student) = self.students.get_mut(reg_no) {
            student.active = false;
        }
    }

    /// Number of registered students
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the directory holds no students
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory_with(reg_nos: &[&str]) -> StudentDirectory {
        let mut directory = StudentDirectory::new();
        for reg_no in reg_nos {
            directory
                .create(
                    (*reg_no).to_string(),
                    format!("Student {reg_no}"),
                    format!("{reg_no}@example.edu"),
                )
                .expect("create student");
        }
        directory
    }

    #[test]
    fn test_create_and_get() {
        let directory = directory_with(&["S001"]);

        let student = directory.get("S001").expect("student exists");
        assert_eq!(student.full_name, "Student S001");
        assert!(student.active);

        assert!(directory.get("S999").is_none());
    }

    #[test]
    fn test_create_rejects_duplicate_reg_no() {
        let mut directory = directory_with(&["S001"]);

        let err = directory
            .create(
                "S001".to_string(),
                "Someone Else".to_string(),
                "other@example.edu".to_string(),
            )
            .unwrap_err();

        assert!(matches!(err, RecordsError::DuplicateStudent(r) if r == "S001"));
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_all_is_sorted_by_reg_no() {
        let directory = directory_with(&["S003", "S001", "S002"]);

        let reg_nos: Vec<&str> = directory.all().iter().map(|s| s.reg_no.as_str()).collect();
        assert_eq!(reg_nos, vec!["S001", "S002", "S003"]);
    }

    #[test]
    fn test_deactivate_filters_from_active() {
        let mut directory = directory_with(&["S001", "S002"]);

        directory.deactivate("S001");
        // Deactivating an unknown key does nothing
        directory.deactivate("S999");

        assert_eq!(directory.len(), 2);
        let active: Vec<&str> = directory
            .active()
            .iter()
            .map(|s| s.reg_no.as_str())
            .collect();
        assert_eq!(active, vec!["S002"]);
    }

    #[test]
    fn test_update_replaces_record() {
        let mut directory = directory_with(&["S001"]);

        let mut student = directory.get("S001").expect("student exists").clone();
        student.email = "new@example.edu".to_string();
        directory.update(student).expect("update succeeds");

        assert_eq!(directory.get("S001").unwrap().email, "new@example.edu");
    }

    #[test]
    fn test_update_unknown_student_fails() {
        let mut directory = StudentDirectory::new();

        let stranger = Student::new(
            "S404".to_string(),
            "Missing".to_string(),
            "missing@example.edu".to_string(),
        );
        let err = directory.update(stranger).unwrap_err();

        assert!(matches!(err, RecordsError::UnknownStudent(r) if r == "S404"));
    }
}
