//! Error taxonomy for staging and risk classification.

use thiserror::Error;

use crate::staging::tnm::Axis;

/// Failures that stop an evaluation before any label is produced.
///
/// Indeterminate grade groups and "cannot be determined" stage labels are
/// ordinary results, not errors.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum StagingError {
    /// TNM string whose category letter does not match the requested axis.
    #[error("{axis} stage must start with {axis} or c{axis}/p{axis} (e.g. 'c{axis}{example}'), got {input:?}")]
    InvalidStageFormat {
        axis: Axis,
        example: &'static str,
        input: String,
    },

    /// Zero or negative core denominator.
    #[error("total cores must be > 0, got {total}")]
    InvalidCoreCount { total: i64 },

    /// Positive core count outside `0..=total`.
    #[error("positive cores must be between 0 and {total}, got {positive}")]
    InvalidPositiveCores { positive: i64, total: i64 },

    /// Biopsy core record that violates the record invariants.
    #[error("invalid biopsy core {site}: {reason}")]
    InvalidCoreRecord { site: String, reason: String },

    /// PSA that is negative or not a finite number.
    #[error("PSA must be a finite value >= 0 ng/mL, got {value}")]
    InvalidPsa { value: f64 },

    /// Manually entered grade group outside 1-5.
    #[error("Grade Group must be between 1 and 5, got {value}")]
    InvalidGradeGroup { value: i64 },
}

impl StagingError {
    pub(crate) fn core(site: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCoreRecord {
            site: site.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for classification operations.
pub type Result<T> = std::result::Result<T, StagingError>;
