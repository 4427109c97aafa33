//! Student model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a student in the directory
///
/// The registration number is the identity key; two `Student` values with
/// the same `reg_no` refer to the same entity regardless of the other
/// fields. Students are never deleted, only deactivated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Registration number (unique, immutable key)
    pub reg_no: String,

    /// Display name
    pub full_name: String,

    /// Contact email
    pub email: String,

    /// Whether the student is active (new students start active)
    pub active: bool,
}

impl Student {
    /// Create a new active student
    ///
    /// # Arguments
    /// * `reg_no` - Registration number (unique key)
    /// * `full_name` - Display name
    /// * `email` - Contact email
    #[must_use]
    pub const fn new(reg_no: String, full_name: String, email: String) -> Self {
        Self {
            reg_no,
            full_name,
            email,
            active: true,
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) <{}> [{}]",
            self.full_name,
            self.reg_no,
            self.email,
            if self.active { "Active" } else { "Inactive" }
        )
    }
}
