use prostate_navigator::{
    advisory::{
        classify_disease_category, prognosis::prognostic_context, treatment::treatment_options,
        workup::additional_evaluation, Advisory, DiseaseCategory, MarginStatus,
    },
    staging::{
        nccn::{IntermediateSubgroup, NccnRisk},
        tnm::TnmCategory,
    },
};

fn disease(n: &str, m: &str) -> DiseaseCategory {
    classify_disease_category(&TnmCategory::n(n).unwrap(), &TnmCategory::m(m).unwrap())
}

#[test]
fn disease_category_from_n_and_m() {
    assert_eq!(disease("cN0", "cM1c"), DiseaseCategory::Metastatic);
    assert_eq!(disease("cN1", "cM1"), DiseaseCategory::Metastatic);
    assert_eq!(disease("cN1", "cM0"), DiseaseCategory::NodePositive);
    assert_eq!(disease("cN0", "cM0"), DiseaseCategory::Localized);
    assert_eq!(disease("cNX", "cM0"), DiseaseCategory::Uncertain);
    assert_eq!(DiseaseCategory::NodePositive.to_string(), "Node-positive");
}

#[test]
fn margin_parsing_is_lenient() {
    assert_eq!(MarginStatus::parse(" Positive "), MarginStatus::Positive);
    assert_eq!(MarginStatus::parse("R0"), MarginStatus::Negative);
    assert_eq!(MarginStatus::parse("close"), MarginStatus::Close);
    assert_eq!(MarginStatus::parse("pending"), MarginStatus::NotReported);
}

#[test]
fn treatment_depends_on_disease_before_risk() {
    let metastatic = treatment_options(DiseaseCategory::Metastatic, Some(NccnRisk::Low));
    assert!(metastatic[0].starts_with("Androgen deprivation therapy"));

    let low = treatment_options(DiseaseCategory::Localized, Some(NccnRisk::Low));
    assert_eq!(low[0], "Active surveillance is preferred for most patients.");

    let fallback = treatment_options(DiseaseCategory::Uncertain, None);
    assert_eq!(fallback.len(), 1);
    assert_eq!(
        treatment_options(DiseaseCategory::Localized, Some(NccnRisk::Unclassifiable)),
        fallback
    );
}

#[test]
fn every_risk_group_has_workup_text() {
    let groups = [
        None,
        Some(NccnRisk::Low),
        Some(NccnRisk::Intermediate(IntermediateSubgroup::Favorable)),
        Some(NccnRisk::Intermediate(IntermediateSubgroup::Unfavorable)),
        Some(NccnRisk::High),
        Some(NccnRisk::VeryHigh),
        Some(NccnRisk::Regional),
        Some(NccnRisk::Unclassifiable),
    ];
    for risk in groups {
        assert!(!additional_evaluation(risk).is_empty(), "{risk:?}");
        assert!(!prognostic_context(DiseaseCategory::Localized, risk).is_empty());
    }
}

#[test]
fn high_and_very_high_prognosis_differ() {
    assert_ne!(
        prognostic_context(DiseaseCategory::Localized, Some(NccnRisk::High)),
        prognostic_context(DiseaseCategory::Localized, Some(NccnRisk::VeryHigh))
    );
}

#[test]
fn advisory_appends_margin_notes() {
    let advisory = Advisory::build(
        DiseaseCategory::Localized,
        Some(NccnRisk::High),
        None,
        MarginStatus::Close,
    );
    assert_eq!(
        advisory.additional_evaluation.last().map(String::as_str),
        Some("Close surgical margin: document margin distance and follow PSA closely.")
    );
    assert_eq!(advisory.treatment_options.len(), 2);
    assert_eq!(advisory.prognostic_context.len(), 1);
}
