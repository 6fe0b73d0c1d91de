//! NCCN risk groups for clinically localized prostate cancer.

use std::fmt;

use serde::Serialize;

use crate::{
    error::{Result, StagingError},
    staging::{
        gleason::GradeGroup,
        rules::{always, first_match, Rule, Verdict},
        tnm::Tnm,
    },
};

const REGIONAL_LABEL: &str = "Metastatic/regional disease (outside localized risk groups)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntermediateSubgroup {
    Favorable,
    Unfavorable,
}

impl IntermediateSubgroup {
    pub fn as_str(self) -> &'static str {
        match self {
            IntermediateSubgroup::Favorable => "Favorable",
            IntermediateSubgroup::Unfavorable => "Unfavorable",
        }
    }
}

/// NCCN risk category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NccnRisk {
    /// N1 and/or M1: outside the localized groups.
    Regional,
    VeryHigh,
    High,
    Intermediate(IntermediateSubgroup),
    Low,
    /// Inputs present but no bucket fits.
    Unclassifiable,
}

impl NccnRisk {
    pub fn category(self) -> &'static str {
        match self {
            NccnRisk::Regional => REGIONAL_LABEL,
            NccnRisk::VeryHigh => "Very high",
            NccnRisk::High => "High",
            NccnRisk::Intermediate(_) => "Intermediate",
            NccnRisk::Low => "Low",
            NccnRisk::Unclassifiable => "Unclassifiable",
        }
    }

    pub fn subcategory(self) -> Option<IntermediateSubgroup> {
        match self {
            NccnRisk::Intermediate(sub) => Some(sub),
            _ => None,
        }
    }
}

impl fmt::Display for NccnRisk {
    /// `Intermediate (Favorable intermediate)` or the bare category.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.subcategory() {
            Some(sub) => write!(f, "{} ({} intermediate)", self.category(), sub.as_str()),
            None => f.write_str(self.category()),
        }
    }
}

/// Inputs to the NCCN tree.
#[derive(Debug, Clone, Copy)]
pub struct NccnInput<'a> {
    pub tnm: &'a Tnm,
    pub grade_group: GradeGroup,
    pub psa: f64,
    /// Positive systematic cores; targeted cores never enter this count.
    pub cores_positive: i64,
    pub cores_total: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NccnResult {
    pub risk: NccnRisk,
    /// Name of the rule that fired.
    pub rule: &'static str,
    pub percent_cores_positive: f64,
    pub rationale: Vec<String>,
}

impl NccnResult {
    pub fn category(&self) -> &'static str {
        self.risk.category()
    }

    pub fn subcategory(&self) -> Option<&'static str> {
        self.risk.subcategory().map(IntermediateSubgroup::as_str)
    }
}

struct NccnFacts {
    t1_or_t2a: bool,
    t2b_to_t2c: bool,
    t3_to_t4: bool,
    nodes_or_metastasis: bool,
    gg: u8,
    psa: f64,
    percent: f64,
}

impl NccnFacts {
    fn very_high_criteria(&self) -> Vec<&'static str> {
        criteria(&[
            (self.t3_to_t4, "T3–T4"),
            (matches!(self.gg, 4 | 5), "Grade Group 4–5"),
            (self.psa > 40.0, "PSA >40"),
        ])
    }

    fn high_criteria(&self) -> Vec<&'static str> {
        criteria(&[
            (self.t3_to_t4, "T3–T4"),
            (matches!(self.gg, 4 | 5), "Grade Group 4–5"),
            (self.psa > 20.0, "PSA >20"),
        ])
    }

    fn intermediate_factors(&self) -> Vec<&'static str> {
        criteria(&[
            (self.t2b_to_t2c, "T2b–T2c"),
            (matches!(self.gg, 2 | 3), "Grade Group 2–3"),
            ((10.0..=20.0).contains(&self.psa), "PSA 10–20"),
        ])
    }
}

fn criteria(flags: &[(bool, &'static str)]) -> Vec<&'static str> {
    flags
        .iter()
        .filter(|(met, _)| *met)
        .map(|(_, name)| *name)
        .collect()
}

const NCCN_RULES: &[Rule<NccnFacts, NccnRisk>] = &[
    Rule {
        name: "regional_or_metastatic",
        when: has_nodes_or_metastasis,
        then: regional,
    },
    Rule {
        name: "very_high",
        when: meets_very_high,
        then: very_high,
    },
    Rule {
        name: "high",
        when: meets_high,
        then: high,
    },
    Rule {
        name: "favorable_intermediate",
        when: meets_favorable_intermediate,
        then: favorable_intermediate,
    },
    Rule {
        name: "unfavorable_intermediate",
        when: has_intermediate_factor,
        then: unfavorable_intermediate,
    },
    Rule {
        name: "low",
        when: meets_low,
        then: low,
    },
    Rule {
        name: "unclassifiable",
        when: always,
        then: unclassifiable,
    },
];

fn has_nodes_or_metastasis(f: &NccnFacts) -> bool {
    f.nodes_or_metastasis
}

fn regional(_: &NccnFacts) -> Verdict<NccnRisk> {
    Verdict::new(
        NccnRisk::Regional,
        "N1 and/or M1 present → outside clinically localized NCCN risk groups.",
    )
}

fn meets_very_high(f: &NccnFacts) -> bool {
    f.very_high_criteria().len() >= 2
}

fn very_high(f: &NccnFacts) -> Verdict<NccnRisk> {
    Verdict::with_notes(
        NccnRisk::VeryHigh,
        vec![
            format!("Very-high-risk criteria met: {}", f.very_high_criteria().join(", ")),
            "≥2 of: T3–T4, Grade Group 4–5, PSA >40 → Very high-risk.".to_string(),
        ],
    )
}

fn meets_high(f: &NccnFacts) -> bool {
    !f.high_criteria().is_empty()
}

fn high(f: &NccnFacts) -> Verdict<NccnRisk> {
    Verdict::with_notes(
        NccnRisk::High,
        vec![
            format!("High-risk criteria met: {}", f.high_criteria().join(", ")),
            "At least one of: T3–T4, Grade Group 4–5, PSA >20 → High-risk.".to_string(),
        ],
    )
}

fn has_intermediate_factor(f: &NccnFacts) -> bool {
    !f.intermediate_factors().is_empty()
}

fn meets_favorable_intermediate(f: &NccnFacts) -> bool {
    f.intermediate_factors().len() == 1 && matches!(f.gg, 1 | 2) && f.percent < 50.0
}

fn favorable_intermediate(f: &NccnFacts) -> Verdict<NccnRisk> {
    Verdict::with_notes(
        NccnRisk::Intermediate(IntermediateSubgroup::Favorable),
        vec![
            format!("Intermediate-risk factors: {}", f.intermediate_factors().join(", ")),
            "Favorable intermediate: 1 IRF, GG 1–2, <50% cores positive.".to_string(),
        ],
    )
}

fn unfavorable_intermediate(f: &NccnFacts) -> Verdict<NccnRisk> {
    Verdict::with_notes(
        NccnRisk::Intermediate(IntermediateSubgroup::Unfavorable),
        vec![
            format!("Intermediate-risk factors: {}", f.intermediate_factors().join(", ")),
            "Unfavorable intermediate: ≥2 IRFs and/or GG 3 and/or ≥50% cores positive."
                .to_string(),
        ],
    )
}

fn meets_low(f: &NccnFacts) -> bool {
    f.t1_or_t2a && f.gg == 1 && f.psa < 10.0
}

fn low(_: &NccnFacts) -> Verdict<NccnRisk> {
    Verdict::new(NccnRisk::Low, "T1–T2a, Grade Group 1, PSA <10 → Low-risk.")
}

fn unclassifiable(_: &NccnFacts) -> Verdict<NccnRisk> {
    Verdict::new(
        NccnRisk::Unclassifiable,
        "Does not meet NCCN low/intermediate/high/very-high criteria with given data.",
    )
}

/// Check a positive/total systematic core pair.
pub fn check_core_counts(positive: i64, total: i64) -> Result<()> {
    if total <= 0 {
        return Err(StagingError::InvalidCoreCount { total });
    }
    if !(0..=total).contains(&positive) {
        return Err(StagingError::InvalidPositiveCores { positive, total });
    }
    Ok(())
}

/// Assign the NCCN risk group.
///
/// Fails with [`StagingError::InvalidCoreCount`] when `cores_total <= 0` and
/// [`StagingError::InvalidPositiveCores`] when the positive count is outside
/// `0..=cores_total`.
pub fn classify(input: &NccnInput<'_>) -> Result<NccnResult> {
    check_core_counts(input.cores_positive, input.cores_total)?;
    let tnm = input.tnm;
    let percent = 100.0 * input.cores_positive as f64 / input.cores_total as f64;

    let basis = if tnm.is_clinical() { "Clinical TNM" } else { "TNM" };
    let mut rationale = vec![
        format!("{basis}: {tnm}"),
        format!(
            "PSA {:.1} ng/mL, highest biopsy Grade Group {}",
            input.psa, input.grade_group
        ),
        format!(
            "Systematic cores positive for cancer: {}/{} ({percent:.1}%)",
            input.cores_positive, input.cores_total
        ),
    ];

    let facts = NccnFacts {
        t1_or_t2a: tnm.t.is_t1() || tnm.t.is_t2a(),
        t2b_to_t2c: tnm.t.is_t2b_to_t2c(),
        t3_to_t4: tnm.t.is_t3_to_t4(),
        nodes_or_metastasis: tnm.n.has_regional_nodes() || tnm.m.has_distant_metastasis(),
        gg: input.grade_group.get(),
        psa: input.psa,
        percent,
    };

    let (rule, verdict) = first_match(NCCN_RULES, &facts)
        .unwrap_or_else(|| ("unclassifiable", unclassifiable(&facts)));
    rationale.extend(verdict.notes);

    Ok(NccnResult {
        risk: verdict.label,
        rule,
        percent_cores_positive: percent,
        rationale,
    })
}
