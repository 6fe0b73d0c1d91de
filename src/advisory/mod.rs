//! Educational text derived from the computed categories.
//!
//! Everything here is a direct lookup keyed on labels the classifiers have
//! already produced; no new decisions are made.

pub mod prognosis;
pub mod treatment;
pub mod workup;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::staging::{cores::BiopsySummary, nccn::NccnRisk, tnm::TnmCategory};

/// Extent of disease implied by N and M.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseCategory {
    Metastatic,
    NodePositive,
    Localized,
    Uncertain,
}

impl DiseaseCategory {
    pub fn label(self) -> &'static str {
        match self {
            DiseaseCategory::Metastatic => "Metastatic",
            DiseaseCategory::NodePositive => "Node-positive",
            DiseaseCategory::Localized => "Localized",
            DiseaseCategory::Uncertain => "Uncertain",
        }
    }
}

impl fmt::Display for DiseaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn classify_disease_category(n: &TnmCategory, m: &TnmCategory) -> DiseaseCategory {
    if m.has_distant_metastasis() {
        DiseaseCategory::Metastatic
    } else if n.has_regional_nodes() && m.is_m0() {
        DiseaseCategory::NodePositive
    } else if n.is_n0() && m.is_m0() {
        DiseaseCategory::Localized
    } else {
        DiseaseCategory::Uncertain
    }
}

/// Surgical margin status after prostatectomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginStatus {
    Negative,
    Close,
    Positive,
    NotReported,
}

impl MarginStatus {
    /// Lenient parse of free-text margin entries; anything unrecognised is
    /// treated as not reported.
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "negative" | "neg" | "r0" | "-" => MarginStatus::Negative,
            "close" => MarginStatus::Close,
            "positive" | "pos" | "r1" | "+" => MarginStatus::Positive,
            _ => MarginStatus::NotReported,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MarginStatus::Negative => "Negative",
            MarginStatus::Close => "Close",
            MarginStatus::Positive => "Positive",
            MarginStatus::NotReported => "Not reported",
        }
    }
}

/// All advisory text blocks for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    pub additional_evaluation: Vec<String>,
    pub treatment_options: Vec<String>,
    pub prognostic_context: Vec<String>,
}

impl Advisory {
    pub fn build(
        disease: DiseaseCategory,
        risk: Option<NccnRisk>,
        biopsy: Option<&BiopsySummary>,
        margin: MarginStatus,
    ) -> Self {
        let mut additional_evaluation = owned_lines(workup::additional_evaluation(risk));
        if let Some(summary) = biopsy {
            additional_evaluation.extend(workup::biopsy_findings_notes(summary));
        }
        additional_evaluation.extend(owned_lines(workup::margin_notes(margin)));
        Self {
            additional_evaluation,
            treatment_options: owned_lines(treatment::treatment_options(disease, risk)),
            prognostic_context: owned_lines(prognosis::prognostic_context(disease, risk)),
        }
    }
}

fn owned_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| (*line).to_owned()).collect()
}
