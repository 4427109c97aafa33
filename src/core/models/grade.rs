//! Grade model

use crate::core::error::RecordsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter grades with their grade-point weights.
///
/// The scale runs S (10.0) down to F (0.0); there is no weight between
/// E (5.0) and F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// Outstanding (10.0)
    S,
    /// Excellent (9.0)
    A,
    /// Very Good (8.0)
    B,
    /// Good (7.0)
    C,
    /// Fair (6.0)
    D,
    /// Pass (5.0)
    E,
    /// Fail (0.0)
    F,
}

impl Grade {
    /// Grade-point weight used in GPA computation
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::S => 10.0,
            Self::A => 9.0,
            Self::B => 8.0,
            Self::C => 7.0,
            Self::D => 6.0,
            Self::E => 5.0,
            Self::F => 0.0,
        }
    }

    /// Human-readable description of the grade
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::S => "Outstanding",
            Self::A => "Excellent",
            Self::B => "Very Good",
            Self::C => "Good",
            Self::D => "Fair",
            Self::E => "Pass",
            Self::F => "Fail",
        }
    }

    /// Letter symbol used in CSV snapshots and transcripts
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Grade {
    type Err = RecordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "S" => Ok(Self::S),
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            "F" => Ok(Self::F),
            _ => Err(RecordsError::InvalidGrade(s.to_string())),
        }
    }
}
