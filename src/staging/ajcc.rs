//! AJCC 8th edition prognostic stage groups.

use std::fmt;

use serde::Serialize;

use crate::staging::{
    gleason::GradeGroup,
    rules::{always, first_match, Rule, Verdict},
    tnm::Tnm,
};

/// Prognostic stage group, including the indeterminate outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AjccStage {
    I,
    IIA,
    IIB,
    IIC,
    IIIA,
    IIIB,
    IIIC,
    IVA,
    IVB,
    /// Primary tumour TX or T0.
    #[serde(rename = "undetermined_primary")]
    UndeterminedPrimary,
    /// No Grade Group available.
    #[serde(rename = "undetermined_grade")]
    UndeterminedGrade,
    /// Inputs fit no group.
    #[serde(rename = "undetermined")]
    Undetermined,
}

impl AjccStage {
    pub fn label(self) -> &'static str {
        match self {
            AjccStage::I => "Stage I",
            AjccStage::IIA => "Stage IIA",
            AjccStage::IIB => "Stage IIB",
            AjccStage::IIC => "Stage IIC",
            AjccStage::IIIA => "Stage IIIA",
            AjccStage::IIIB => "Stage IIIB",
            AjccStage::IIIC => "Stage IIIC",
            AjccStage::IVA => "Stage IVA",
            AjccStage::IVB => "Stage IVB",
            AjccStage::UndeterminedPrimary => "Stage cannot be determined (TX/T0)",
            AjccStage::UndeterminedGrade => {
                "Stage group cannot be determined (Grade Group unknown)"
            }
            AjccStage::Undetermined => "Stage group cannot be determined",
        }
    }

    /// False for the three "cannot be determined" outcomes.
    pub fn is_determined(self) -> bool {
        !matches!(
            self,
            AjccStage::UndeterminedPrimary | AjccStage::UndeterminedGrade | AjccStage::Undetermined
        )
    }
}

impl fmt::Display for AjccStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AjccInput<'a> {
    pub tnm: &'a Tnm,
    pub psa: f64,
    pub grade_group: Option<GradeGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AjccResult {
    pub stage: AjccStage,
    pub rule: &'static str,
    pub rationale: Vec<String>,
}

impl AjccResult {
    pub fn label(&self) -> &'static str {
        self.stage.label()
    }
}

struct AjccFacts {
    distant: bool,
    regional: bool,
    tx_or_t0: bool,
    t1: bool,
    t2: bool,
    t2a: bool,
    t2b_to_t2c: bool,
    t3_to_t4: bool,
    gg: u8,
    psa: f64,
}

impl AjccFacts {
    fn t1_or_t2(&self) -> bool {
        self.t1 || self.t2
    }
}

const AJCC_RULES: &[Rule<AjccFacts, AjccStage>] = &[
    Rule {
        name: "m1",
        when: |f| f.distant,
        then: |_| Verdict::new(AjccStage::IVB, "Any T, any N, M1 → Stage IVB."),
    },
    Rule {
        name: "n1",
        when: |f| f.regional,
        then: |_| Verdict::new(AjccStage::IVA, "Any T, N1, M0 → Stage IVA."),
    },
    Rule {
        name: "tx_t0",
        when: |f| f.tx_or_t0,
        then: |_| {
            Verdict::new(
                AjccStage::UndeterminedPrimary,
                "Primary tumor TX/T0 → Stage group cannot be assigned.",
            )
        },
    },
    Rule {
        name: "gg5",
        when: |f| f.gg == 5,
        then: |_| Verdict::new(AjccStage::IIIC, "Any T, N0/NX, M0, Grade Group 5 → Stage IIIC."),
    },
    Rule {
        name: "t3_t4",
        when: |f| f.t3_to_t4 && (1..=4).contains(&f.gg),
        then: |_| {
            Verdict::new(
                AjccStage::IIIB,
                "T3–T4, N0/NX, M0, Grade Group 1–4 → Stage IIIB.",
            )
        },
    },
    Rule {
        name: "psa_20",
        when: |f| f.t1_or_t2() && (1..=4).contains(&f.gg) && f.psa >= 20.0,
        then: |_| {
            Verdict::new(
                AjccStage::IIIA,
                "T1–T2, N0/NX, M0, Grade Group 1–4, PSA ≥20 → Stage IIIA.",
            )
        },
    },
    Rule {
        name: "gg3_gg4",
        when: |f| f.t1_or_t2() && matches!(f.gg, 3 | 4) && f.psa < 20.0,
        then: |_| {
            Verdict::new(
                AjccStage::IIC,
                "T1–T2, N0/NX, M0, Grade Group 3–4, PSA <20 → Stage IIC.",
            )
        },
    },
    Rule {
        name: "gg2",
        when: |f| f.t1_or_t2() && f.gg == 2 && f.psa < 20.0,
        then: |_| {
            Verdict::new(
                AjccStage::IIB,
                "T1–T2, N0/NX, M0, Grade Group 2, PSA <20 → Stage IIB.",
            )
        },
    },
    // T1/T2a need PSA 10-20 here while T2b-T2c qualify at any PSA <20
    Rule {
        name: "gg1_iia",
        when: |f| {
            f.gg == 1
                && f.psa < 20.0
                && (((f.t1 || f.t2a) && f.psa >= 10.0) || f.t2b_to_t2c)
        },
        then: |_| {
            Verdict::new(
                AjccStage::IIA,
                "Grade Group 1, N0/NX, M0, PSA <20 with appropriate T → Stage IIA.",
            )
        },
    },
    Rule {
        name: "gg1_i",
        when: |f| f.gg == 1 && (f.t1 || f.t2a) && f.psa < 10.0,
        then: |_| {
            Verdict::new(
                AjccStage::I,
                "cT1–cT2a, N0/NX, M0, Grade Group 1, PSA <10 → Stage I.",
            )
        },
    },
    Rule {
        name: "undetermined",
        when: always,
        then: undetermined,
    },
];

fn undetermined(_: &AjccFacts) -> Verdict<AjccStage> {
    Verdict::new(
        AjccStage::Undetermined,
        "Does not fit standard AJCC 8th prognostic groups with the provided data.",
    )
}

/// Assign the AJCC prognostic stage group. Total over all inputs.
pub fn classify(input: &AjccInput<'_>) -> AjccResult {
    let tnm = input.tnm;
    let group = input
        .grade_group
        .map_or_else(|| "unknown".to_string(), |gg| gg.to_string());
    let mut rationale = vec![
        format!("TNM: {tnm}"),
        format!("PSA {:.1} ng/mL, highest biopsy Grade Group {group}", input.psa),
    ];

    let Some(gg) = input.grade_group else {
        rationale.push(
            "Grade Group unknown → AJCC 8th prognostic stage group requires a Grade Group."
                .to_string(),
        );
        return AjccResult {
            stage: AjccStage::UndeterminedGrade,
            rule: "grade_group_unknown",
            rationale,
        };
    };

    let facts = AjccFacts {
        distant: tnm.m.has_distant_metastasis(),
        regional: tnm.n.has_regional_nodes(),
        tx_or_t0: tnm.t.is_tx_or_t0(),
        t1: tnm.t.is_t1(),
        t2: tnm.t.is_t2(),
        t2a: tnm.t.is_t2a(),
        t2b_to_t2c: tnm.t.is_t2b_to_t2c(),
        t3_to_t4: tnm.t.is_t3_to_t4(),
        gg: gg.get(),
        psa: input.psa,
    };

    let (rule, verdict) =
        first_match(AJCC_RULES, &facts).unwrap_or_else(|| ("undetermined", undetermined(&facts)));
    rationale.extend(verdict.notes);

    AjccResult {
        stage: verdict.label,
        rule,
        rationale,
    }
}
