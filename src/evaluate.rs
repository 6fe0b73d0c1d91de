//! One complete evaluation: inputs in, every classification and advisory out.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    advisory::{self, Advisory, DiseaseCategory, MarginStatus},
    data::cores::CoreRecord,
    error::Result,
    staging::{
        self,
        ajcc::{self, AjccInput, AjccResult},
        cores::{self, BiopsyCore, BiopsySummary, CoreTemplate},
        gleason::GradeGroup,
        nccn::{self, NccnInput, NccnResult, NccnRisk},
        tnm::Tnm,
    },
};

/// Flat inputs for one patient evaluation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EvaluationInput {
    pub t_stage: String,
    pub n_stage: String,
    pub m_stage: String,
    /// ng/mL.
    pub psa: f64,
    /// Overall Grade Group entered by hand; ignored when biopsy detail exists.
    #[serde(default)]
    pub grade_group: Option<i64>,
    #[serde(default)]
    pub cores_positive: Option<i64>,
    #[serde(default)]
    pub cores_total: Option<i64>,
    /// Per-core detail; `None` means no detailed biopsy data.
    #[serde(default)]
    pub biopsy: Option<Vec<CoreRecord>>,
    #[serde(default)]
    pub margin: Option<String>,
}

impl EvaluationInput {
    pub fn has_biopsy_detail(&self) -> bool {
        self.biopsy.is_some()
    }
}

/// NCCN outcome, or why it was not computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum NccnOutcome {
    Computed(NccnResult),
    NotComputed { reason: String },
}

impl NccnOutcome {
    pub fn result(&self) -> Option<&NccnResult> {
        match self {
            NccnOutcome::Computed(result) => Some(result),
            NccnOutcome::NotComputed { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub tnm: Tnm,
    pub psa: f64,
    pub grade_group: Option<GradeGroup>,
    pub biopsy: Option<BiopsySummary>,
    pub cores_positive: Option<i64>,
    pub cores_total: Option<i64>,
    pub ajcc: AjccResult,
    pub nccn: NccnOutcome,
    pub disease: DiseaseCategory,
    pub margin: MarginStatus,
    pub advisory: Advisory,
}

impl Evaluation {
    pub fn risk(&self) -> Option<NccnRisk> {
        self.nccn.result().map(|r| r.risk)
    }

    /// True when biopsy detail was supplied and no core contained cancer.
    pub fn is_cancer_free_biopsy(&self) -> bool {
        self.biopsy.as_ref().is_some_and(|b| !b.has_cancer())
    }
}

/// Run every classifier over one set of inputs.
pub fn evaluate(input: &EvaluationInput, template: &CoreTemplate) -> Result<Evaluation> {
    let tnm = Tnm::parse(&input.t_stage, &input.n_stage, &input.m_stage)?;
    let psa = staging::check_psa(input.psa)?;

    let (biopsy, grade_group, cores_positive, cores_total) = match &input.biopsy {
        Some(records) => {
            let cores = records
                .iter()
                .map(|record| record.to_core(template))
                .collect::<Result<Vec<BiopsyCore>>>()?;
            let summary = cores::aggregate(&cores, template)?;
            if input.grade_group.is_some() {
                debug!("manual grade group ignored in favour of biopsy detail");
            }
            let gg = summary.highest_grade_group;
            let positive = summary.systematic_positive as i64;
            let total = summary.systematic_total as i64;
            (Some(summary), gg, Some(positive), Some(total))
        }
        None => {
            let gg = input.grade_group.map(GradeGroup::new).transpose()?;
            if let (Some(positive), Some(total)) = (input.cores_positive, input.cores_total) {
                nccn::check_core_counts(positive, total)?;
            }
            (None, gg, input.cores_positive, input.cores_total)
        }
    };

    let ajcc: AjccResult = ajcc::classify(&AjccInput {
        tnm: &tnm,
        psa,
        grade_group,
    });

    let nccn = match nccn_blocker(&tnm, biopsy.as_ref(), grade_group, cores_total) {
        Some(reason) => {
            warn!(%reason, "NCCN risk group not computed");
            NccnOutcome::NotComputed { reason }
        }
        None => match (grade_group, cores_positive, cores_total) {
            (Some(grade_group), Some(cores_positive), Some(cores_total)) => {
                NccnOutcome::Computed(nccn::classify(&NccnInput {
                    tnm: &tnm,
                    grade_group,
                    psa,
                    cores_positive,
                    cores_total,
                })?)
            }
            _ => NccnOutcome::NotComputed {
                reason: "Inputs incomplete for NCCN risk grouping.".to_string(),
            },
        },
    };

    let disease = advisory::classify_disease_category(&tnm.n, &tnm.m);
    let margin = input
        .margin
        .as_deref()
        .map_or(MarginStatus::NotReported, MarginStatus::parse);
    let risk = nccn.result().map(|r| r.risk);
    let advisory = Advisory::build(disease, risk, biopsy.as_ref(), margin);

    let nccn_label = risk.map_or_else(|| "not computed".to_string(), |r| r.to_string());
    info!(
        tnm = %tnm,
        ajcc = ajcc.label(),
        nccn = %nccn_label,
        disease = %disease,
        "evaluation complete"
    );

    Ok(Evaluation {
        tnm,
        psa,
        grade_group,
        biopsy,
        cores_positive,
        cores_total,
        ajcc,
        nccn,
        disease,
        margin,
        advisory,
    })
}

fn nccn_blocker(
    tnm: &Tnm,
    biopsy: Option<&BiopsySummary>,
    grade_group: Option<GradeGroup>,
    cores_total: Option<i64>,
) -> Option<String> {
    if !tnm.is_clinical() {
        return Some(
            "NCCN risk groups are defined on clinical staging; a pathologic (p) staging basis was supplied."
                .to_string(),
        );
    }
    if biopsy.is_some_and(|b| !b.has_cancer()) {
        return Some(
            "No confirmed adenocarcinoma on biopsy; NCCN risk group requires a cancer diagnosis."
                .to_string(),
        );
    }
    if grade_group.is_none() {
        return Some("Grade Group unknown; NCCN risk group requires a Grade Group.".to_string());
    }
    if cores_total.is_none() {
        return Some(
            "Systematic core counts unavailable; NCCN intermediate subclassification requires the percentage of positive cores."
                .to_string(),
        );
    }
    None
}
