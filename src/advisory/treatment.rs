//! Treatment-option summaries keyed by disease category and risk group.

use crate::{
    advisory::DiseaseCategory,
    staging::nccn::{IntermediateSubgroup, NccnRisk},
};

const GENERIC: &[&str] = &[
    "Treatment options depend on the extent of disease and risk group, which could not be fully established from the inputs; discuss in a multidisciplinary setting.",
];

pub fn treatment_options(disease: DiseaseCategory, risk: Option<NccnRisk>) -> &'static [&'static str] {
    use DiseaseCategory::{Localized, Metastatic, NodePositive};

    match (disease, risk) {
        (Metastatic, _) => &[
            "Androgen deprivation therapy (ADT) combined with an androgen receptor pathway inhibitor (abiraterone, apalutamide, enzalutamide or darolutamide).",
            "Docetaxel may be added for suitable patients with high-volume disease.",
            "Radiotherapy to the prostate may be considered for low-volume metastatic disease.",
        ],
        (NodePositive, _) => &[
            "External beam radiotherapy with long-term ADT, with abiraterone considered.",
            "Radical prostatectomy with pelvic lymph node dissection in selected patients.",
            "ADT alone for patients unfit for local therapy.",
        ],
        (Localized, Some(NccnRisk::Low)) => &[
            "Active surveillance is preferred for most patients.",
            "Radical prostatectomy or radiotherapy (external beam or brachytherapy) are alternatives.",
            "Observation when life expectancy is limited.",
        ],
        (Localized, Some(NccnRisk::Intermediate(IntermediateSubgroup::Favorable))) => &[
            "Active surveillance for selected patients.",
            "Radical prostatectomy, or radiotherapy (external beam or brachytherapy) without ADT.",
            "Observation when life expectancy is limited.",
        ],
        (Localized, Some(NccnRisk::Intermediate(IntermediateSubgroup::Unfavorable))) => &[
            "Radical prostatectomy with pelvic lymph node dissection as indicated.",
            "External beam radiotherapy with short-term ADT (4–6 months), with or without a brachytherapy boost.",
            "Observation when life expectancy is limited.",
        ],
        (Localized, Some(NccnRisk::High)) | (Localized, Some(NccnRisk::VeryHigh)) => &[
            "External beam radiotherapy with long-term ADT (18–36 months), with or without a brachytherapy boost; abiraterone may be added for very-high-risk disease.",
            "Radical prostatectomy with pelvic lymph node dissection in selected patients.",
        ],
        _ => GENERIC,
    }
}
