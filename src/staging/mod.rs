//! Staging and risk classification layer.

pub mod ajcc;
pub mod cores;
pub mod gleason;
pub mod nccn;
pub mod rules;
pub mod tnm;

pub use ajcc::{AjccInput, AjccResult, AjccStage};
pub use cores::{
    aggregate, BiopsyCore, BiopsySummary, CancerFocus, CoreFinding, CoreOrigin, CoreSite,
    CoreTemplate, GradedCore,
};
pub use gleason::{grade, GleasonGrade, GradeGroup};
pub use nccn::{IntermediateSubgroup, NccnInput, NccnResult, NccnRisk};
pub use tnm::{normalize, Axis, Basis, Tnm, TnmCategory};

use crate::error::{Result, StagingError};

/// PSA in ng/mL must be finite and non-negative.
pub fn check_psa(psa: f64) -> Result<f64> {
    if psa.is_finite() && psa >= 0.0 {
        Ok(psa)
    } else {
        Err(StagingError::InvalidPsa { value: psa })
    }
}
