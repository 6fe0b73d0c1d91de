//! Deterministic prostate cancer staging: AJCC 8th prognostic stage group,
//! NCCN risk group, biopsy core aggregation and the educational text derived
//! from them.

pub mod advisory;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod evaluate;
pub mod logging;
pub mod report;
pub mod staging;

pub use error::{Result, StagingError};
pub use evaluate::{evaluate, Evaluation, EvaluationInput, NccnOutcome};
