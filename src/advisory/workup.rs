//! Additional-evaluation recommendations by NCCN risk group.

use crate::{
    advisory::MarginStatus,
    staging::{
        cores::BiopsySummary,
        nccn::{IntermediateSubgroup, NccnRisk},
    },
};

pub fn additional_evaluation(risk: Option<NccnRisk>) -> &'static [&'static str] {
    match risk {
        Some(NccnRisk::Low) => &[
            "Assess life expectancy and patient preferences before choosing active surveillance or treatment.",
            "Consider confirmatory testing (prostate MRI, repeat biopsy and/or tissue-based molecular assays) if active surveillance is being considered.",
            "Bone and soft-tissue staging imaging is not routinely indicated.",
        ],
        Some(NccnRisk::Intermediate(IntermediateSubgroup::Favorable)) => &[
            "Assess life expectancy; consider prostate MRI and tissue-based molecular assays when they would change management.",
            "Bone imaging is not routinely indicated; consider pelvic imaging if nomogram-predicted nodal risk exceeds 10%.",
            "Consider germline testing if family history or ancestry suggests hereditary risk.",
        ],
        Some(NccnRisk::Intermediate(IntermediateSubgroup::Unfavorable)) => &[
            "Consider bone imaging when T2 and PSA >10 ng/mL, and pelvic imaging if nomogram-predicted nodal risk exceeds 10%.",
            "PSMA PET may be used as an alternative to conventional staging imaging.",
            "Consider germline testing if family history or ancestry suggests hereditary risk.",
        ],
        Some(NccnRisk::High) | Some(NccnRisk::VeryHigh) => &[
            "Bone and pelvic/abdominal soft-tissue imaging (CT or MRI) is recommended; PSMA PET is an alternative.",
            "Germline genetic testing is recommended.",
            "Consider somatic tumor testing and tissue-based molecular assays where they would inform therapy.",
        ],
        Some(NccnRisk::Regional) => &[
            "Complete staging with bone and soft-tissue imaging; PSMA PET is appropriate.",
            "Germline genetic testing and somatic tumor testing are recommended.",
        ],
        Some(NccnRisk::Unclassifiable) => &[
            "Inputs did not fit an NCCN risk group; review the TNM, PSA and Grade Group entries before relying on this result.",
        ],
        None => &[
            "No NCCN risk group assigned; complete the clinical TNM, PSA and biopsy information to obtain workup recommendations.",
        ],
    }
}

/// Notes triggered by individual biopsy findings.
pub fn biopsy_findings_notes(summary: &BiopsySummary) -> Vec<String> {
    let mut notes = Vec::new();
    if summary.asap_count() > 0 {
        notes.push(format!(
            "ASAP present in {} core(s): repeat biopsy is typically recommended within 3–6 months if no cancer was diagnosed elsewhere.",
            summary.asap_count()
        ));
    }
    if summary.epe_cores > 0 {
        notes.push(format!(
            "Extraprostatic extension on {} core(s) ({} with Grade Group ≥3): consider prostate MRI to assess local extent.",
            summary.epe_cores, summary.epe_with_gg3_plus
        ));
    }
    if summary.pni_cores > 0 {
        notes.push(format!(
            "Perineural invasion on {} core(s) ({} with Grade Group ≥3).",
            summary.pni_cores, summary.pni_with_gg3_plus
        ));
    }
    notes
}

pub fn margin_notes(margin: MarginStatus) -> &'static [&'static str] {
    match margin {
        MarginStatus::Positive => &[
            "Positive surgical margin: discuss adjuvant versus early salvage radiotherapy guided by PSA monitoring.",
        ],
        MarginStatus::Close => &["Close surgical margin: document margin distance and follow PSA closely."],
        MarginStatus::Negative | MarginStatus::NotReported => &[],
    }
}
