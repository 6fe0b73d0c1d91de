//! Plain-language prognostic context.

use crate::{
    advisory::DiseaseCategory,
    staging::nccn::{IntermediateSubgroup, NccnRisk},
};

pub fn prognostic_context(disease: DiseaseCategory, risk: Option<NccnRisk>) -> &'static [&'static str] {
    use DiseaseCategory::{Localized, Metastatic, NodePositive};

    match (disease, risk) {
        (Metastatic, _) => &[
            "The cancer has spread beyond the pelvis. It is usually not curable, but many men live for years with modern hormonal and systemic treatments.",
        ],
        (NodePositive, _) => &[
            "The cancer has reached nearby lymph nodes. Combined treatment can still control it for a long time and is sometimes curative.",
        ],
        (Localized, Some(NccnRisk::Low)) => &[
            "The cancer is confined to the prostate and slow-growing. The risk of it causing harm over the next 10–15 years is very low, which is why monitoring is often recommended.",
        ],
        (Localized, Some(NccnRisk::Intermediate(IntermediateSubgroup::Favorable))) => &[
            "The cancer is confined to the prostate with features that are only modestly concerning. Outcomes with treatment or careful monitoring are very good.",
        ],
        (Localized, Some(NccnRisk::Intermediate(IntermediateSubgroup::Unfavorable))) => &[
            "The cancer is confined to the prostate but has features that raise the chance of growth. Treatment is usually recommended and often curative.",
        ],
        (Localized, Some(NccnRisk::High)) => &[
            "The cancer has a higher chance of spreading if untreated. Combined treatment is often curative.",
        ],
        (Localized, Some(NccnRisk::VeryHigh)) => &[
            "The cancer has several aggressive features and a substantial chance of recurrence. Intensive combined treatment offers the best chance of long-term control.",
        ],
        _ => &[
            "Prognosis cannot be summarised until the extent of disease and risk group are established.",
        ],
    }
}
