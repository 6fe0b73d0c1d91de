//! Gleason pattern pairs to ISUP Grade Group.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StagingError};

/// Patterns a pathologist may assign on needle biopsy.
pub const GLEASON_PATTERNS: [u8; 3] = [3, 4, 5];

/// ISUP Grade Group, 1 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct GradeGroup(u8);

impl GradeGroup {
    pub const ONE: GradeGroup = GradeGroup(1);
    pub const TWO: GradeGroup = GradeGroup(2);
    pub const THREE: GradeGroup = GradeGroup(3);
    pub const FOUR: GradeGroup = GradeGroup(4);
    pub const FIVE: GradeGroup = GradeGroup(5);

    pub fn new(value: i64) -> Result<Self> {
        match value {
            1..=5 => Ok(Self(value as u8)),
            _ => Err(StagingError::InvalidGradeGroup { value }),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for GradeGroup {
    type Error = StagingError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<GradeGroup> for u8 {
    fn from(value: GradeGroup) -> Self {
        value.0
    }
}

impl fmt::Display for GradeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of grading one pattern pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GleasonGrade {
    pub primary: u8,
    pub secondary: u8,
    pub score: u8,
    /// `None` when the pair is not in the standard table.
    pub grade_group: Option<GradeGroup>,
    pub description: String,
}

impl GleasonGrade {
    /// `3+4=7` style notation.
    pub fn notation(&self) -> String {
        format!("{}+{}={}", self.primary, self.secondary, self.score)
    }
}

/// Map a primary/secondary pattern pair to its Grade Group.
///
/// Pairs are matched exactly, so 4+3 and 3+4 land in different groups even
/// though both sum to 7. Never fails.
pub fn grade(primary: u8, secondary: u8) -> GleasonGrade {
    let score = primary.saturating_add(secondary);
    let group = match (primary, secondary) {
        (3, 3) => Some(1),
        (3, 4) => Some(2),
        (4, 3) => Some(3),
        (4, 4) | (3, 5) | (5, 3) => Some(4),
        (4, 5) | (5, 4) | (5, 5) => Some(5),
        _ => None,
    };
    let grade_group = group.map(GradeGroup);
    let description = match grade_group {
        Some(gg) => format!("Gleason {primary}+{secondary}={score} → Grade Group {gg}"),
        None => format!(
            "Gleason {primary}+{secondary}={score} → pattern not in standard Grade Group table"
        ),
    };
    GleasonGrade {
        primary,
        secondary,
        score,
        grade_group,
        description,
    }
}
