//! Semester model

use crate::core::error::RecordsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Academic terms in the order they occur within a year.
///
/// The derived ordering (Spring < Summer < Fall) is the sort order used
/// when composing transcripts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Semester {
    /// Spring term
    Spring,
    /// Summer term
    Summer,
    /// Fall term
    Fall,
}

impl Semester {
    /// All semesters in ordinal order
    pub const ALL: [Self; 3] = [Self::Spring, Self::Summer, Self::Fall];

    /// Human-readable description of the term
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Spring => "Spring Semester",
            Self::Summer => "Summer Semester",
            Self::Fall => "Fall Semester",
        }
    }

    /// Canonical uppercase name used in CSV snapshots
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spring => "SPRING",
            Self::Summer => "SUMMER",
            Self::Fall => "FALL",
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Semester {
    type Err = RecordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SPRING" => Ok(Self::Spring),
            "SUMMER" => Ok(Self::Summer),
            "FALL" => Ok(Self::Fall),
            _ => Err(RecordsError::InvalidSemester(s.to_string())),
        }
    }
}
