use prostate_navigator::{
    advisory::{DiseaseCategory, MarginStatus},
    data::cores::CoreRecord,
    evaluate, report,
    staging::{
        ajcc::AjccStage, check_psa, cores::CoreTemplate, gleason::GradeGroup, nccn::NccnRisk,
    },
    EvaluationInput, NccnOutcome, StagingError,
};

const SITES: [&str; 12] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"];

fn benign(site: &str) -> CoreRecord {
    CoreRecord {
        site: site.to_string(),
        result: "benign".to_string(),
        ..CoreRecord::default()
    }
}

fn cancer(site: &str, primary: u8, secondary: u8, percent: u8) -> CoreRecord {
    CoreRecord {
        site: site.to_string(),
        result: "cancer".to_string(),
        primary: Some(primary),
        secondary: Some(secondary),
        percent: Some(percent),
        ..CoreRecord::default()
    }
}

/// Twelve systematic records, benign except for `positives`.
fn sheet(positives: Vec<CoreRecord>) -> Vec<CoreRecord> {
    SITES
        .iter()
        .map(|site| {
            positives
                .iter()
                .find(|record| record.site == *site)
                .cloned()
                .unwrap_or_else(|| benign(site))
        })
        .collect()
}

fn clinical(psa: f64) -> EvaluationInput {
    EvaluationInput {
        t_stage: "cT1c".to_string(),
        n_stage: "cN0".to_string(),
        m_stage: "cM0".to_string(),
        psa,
        ..EvaluationInput::default()
    }
}

#[test]
fn biopsy_detail_drives_both_classifiers() {
    let input = EvaluationInput {
        biopsy: Some(sheet(vec![
            cancer("B", 3, 4, 20),
            cancer("E", 4, 4, 30),
            cancer("J", 3, 3, 5),
        ])),
        ..clinical(6.5)
    };
    let evaluation = evaluate(&input, &CoreTemplate::standard()).unwrap();

    assert_eq!(evaluation.grade_group, Some(GradeGroup::FOUR));
    assert_eq!(evaluation.cores_positive, Some(3));
    assert_eq!(evaluation.cores_total, Some(12));
    assert_eq!(evaluation.ajcc.stage, AjccStage::IIC);
    assert_eq!(evaluation.risk(), Some(NccnRisk::High));
    assert_eq!(evaluation.disease, DiseaseCategory::Localized);

    insta::assert_snapshot!(
        report::summary_line(&evaluation),
        @"cT1c cN0 cM0, PSA 6.5 ng/mL, highest biopsy GG 4 (Gleason 4+4=8), AJCC Stage IIC, NCCN High; systematic cancer cores 3/12 (25.0%), targeted cancer cores 0/3."
    );
}

#[test]
fn biopsy_detail_overrides_manual_grade_group() {
    let input = EvaluationInput {
        grade_group: Some(1),
        biopsy: Some(sheet(vec![cancer("A", 4, 3, 10)])),
        ..clinical(5.0)
    };
    let evaluation = evaluate(&input, &CoreTemplate::standard()).unwrap();
    assert_eq!(evaluation.grade_group, Some(GradeGroup::THREE));
}

#[test]
fn cancer_free_biopsy_assigns_nothing() {
    let mut records = sheet(Vec::new());
    records[3].result = "ASAP".to_string();
    let input = EvaluationInput {
        biopsy: Some(records),
        ..clinical(4.2)
    };
    let evaluation = evaluate(&input, &CoreTemplate::standard()).unwrap();

    assert!(evaluation.is_cancer_free_biopsy());
    assert_eq!(evaluation.grade_group, None);
    assert_eq!(evaluation.ajcc.stage, AjccStage::UndeterminedGrade);
    assert!(matches!(
        &evaluation.nccn,
        NccnOutcome::NotComputed { reason } if reason.starts_with("No confirmed adenocarcinoma")
    ));
    assert!(evaluation
        .advisory
        .additional_evaluation
        .iter()
        .any(|line| line.starts_with("ASAP present in 1 core(s)")));

    insta::assert_snapshot!(
        report::summary_line(&evaluation),
        @"No adenocarcinoma identified on biopsy. Systematic cores with cancer: 0/12 (0.0%). ASAP in 1 core(s). TNM cT1c cN0 cM0, PSA 4.2 ng/mL. AJCC prognostic stage and NCCN risk group are not assigned without confirmed cancer."
    );
}

#[test]
fn pathologic_basis_skips_nccn() {
    let input = EvaluationInput {
        t_stage: "pT2".to_string(),
        n_stage: "pN0".to_string(),
        m_stage: "cM0".to_string(),
        psa: 6.0,
        grade_group: Some(2),
        cores_positive: Some(3),
        cores_total: Some(12),
        margin: Some("positive".to_string()),
        ..EvaluationInput::default()
    };
    let evaluation = evaluate(&input, &CoreTemplate::standard()).unwrap();

    assert_eq!(evaluation.ajcc.stage, AjccStage::IIB);
    assert!(evaluation.risk().is_none());
    assert!(matches!(
        &evaluation.nccn,
        NccnOutcome::NotComputed { reason } if reason.contains("pathologic")
    ));
    assert_eq!(evaluation.margin, MarginStatus::Positive);
    assert!(evaluation
        .advisory
        .additional_evaluation
        .iter()
        .any(|line| line.starts_with("Positive surgical margin")));
}

#[test]
fn manual_entry_with_core_counts() {
    let input = EvaluationInput {
        t_stage: "cT2b".to_string(),
        grade_group: Some(1),
        cores_positive: Some(2),
        cores_total: Some(12),
        ..clinical(8.0)
    };
    let evaluation = evaluate(&input, &CoreTemplate::standard()).unwrap();

    assert_eq!(evaluation.ajcc.stage, AjccStage::IIA);
    insta::assert_snapshot!(
        report::summary_line(&evaluation),
        @"cT2b cN0 cM0, PSA 8.0 ng/mL, Grade Group 1, AJCC Stage IIA, NCCN Intermediate (Favorable intermediate); systematic cancer cores 2/12 (16.7%)."
    );
}

#[test]
fn manual_entry_without_core_counts() {
    let input = EvaluationInput {
        grade_group: Some(1),
        ..clinical(5.0)
    };
    let evaluation = evaluate(&input, &CoreTemplate::standard()).unwrap();

    assert_eq!(evaluation.ajcc.stage, AjccStage::I);
    assert!(matches!(
        &evaluation.nccn,
        NccnOutcome::NotComputed { reason } if reason.starts_with("Systematic core counts unavailable")
    ));
    assert_eq!(
        report::summary_line(&evaluation),
        "cT1c cN0 cM0, PSA 5.0 ng/mL, Grade Group 1, AJCC Stage I, NCCN not computed."
    );
}

#[test]
fn manual_zero_core_total_is_an_error() {
    let input = EvaluationInput {
        grade_group: Some(1),
        cores_positive: Some(0),
        cores_total: Some(0),
        ..clinical(5.0)
    };
    assert_eq!(
        evaluate(&input, &CoreTemplate::standard()).unwrap_err(),
        StagingError::InvalidCoreCount { total: 0 }
    );
}

#[test]
fn invalid_inputs_are_rejected() {
    let template = CoreTemplate::standard();

    let negative_psa = clinical(-1.0);
    assert!(matches!(
        evaluate(&negative_psa, &template),
        Err(StagingError::InvalidPsa { .. })
    ));

    let bad_grade = EvaluationInput {
        grade_group: Some(7),
        ..clinical(5.0)
    };
    assert_eq!(
        evaluate(&bad_grade, &template).unwrap_err(),
        StagingError::InvalidGradeGroup { value: 7 }
    );

    let bad_t = EvaluationInput {
        t_stage: "N1".to_string(),
        ..clinical(5.0)
    };
    assert!(matches!(
        evaluate(&bad_t, &template),
        Err(StagingError::InvalidStageFormat { .. })
    ));

    let unknown_site = EvaluationInput {
        biopsy: Some(vec![benign("Z")]),
        ..clinical(5.0)
    };
    assert!(matches!(
        evaluate(&unknown_site, &template),
        Err(StagingError::InvalidCoreRecord { .. })
    ));
}

#[test]
fn json_output_tags_nccn_status() {
    let input = EvaluationInput {
        grade_group: Some(1),
        cores_positive: Some(3),
        cores_total: Some(12),
        ..clinical(5.0)
    };
    let evaluation = evaluate(&input, &CoreTemplate::standard()).unwrap();
    let value = serde_json::to_value(&evaluation).unwrap();

    assert_eq!(value["nccn"]["status"], "computed");
    assert_eq!(value["nccn"]["risk"], "low");
    assert_eq!(value["ajcc"]["stage"], "I");
    assert_eq!(value["grade_group"], 1);
}

#[test]
fn repeated_site_records_are_rejected() {
    let input = EvaluationInput {
        biopsy: Some((0..5).map(|_| cancer("A", 3, 3, 10)).collect()),
        ..clinical(5.0)
    };
    assert!(matches!(
        evaluate(&input, &CoreTemplate::standard()),
        Err(StagingError::InvalidCoreRecord { ref site, .. }) if site == "A"
    ));
}

#[test]
fn exemplar_follows_template_order() {
    let mut records = sheet(vec![cancer("A", 4, 4, 10), cancer("L", 4, 4, 50)]);
    records.reverse();
    let input = EvaluationInput {
        biopsy: Some(records),
        ..clinical(5.0)
    };
    let evaluation = evaluate(&input, &CoreTemplate::standard()).unwrap();
    let biopsy = evaluation.biopsy.as_ref().unwrap();
    assert_eq!(biopsy.exemplar.as_ref().unwrap().site.code, "A");
    assert_eq!(biopsy.cancer_cores[1].site.code, "L");
}

#[test]
fn manual_positive_cores_outside_total_are_rejected() {
    for positive in [-1, 20] {
        let input = EvaluationInput {
            t_stage: "pT2".to_string(),
            grade_group: Some(2),
            cores_positive: Some(positive),
            cores_total: Some(12),
            ..clinical(5.0)
        };
        assert_eq!(
            evaluate(&input, &CoreTemplate::standard()).unwrap_err(),
            StagingError::InvalidPositiveCores {
                positive,
                total: 12
            }
        );
    }
}

#[test]
fn psa_must_be_finite_and_non_negative() {
    assert_eq!(check_psa(0.0), Ok(0.0));
    assert_eq!(check_psa(4.5), Ok(4.5));
    for value in [-0.1, f64::NAN, f64::INFINITY] {
        assert!(matches!(check_psa(value), Err(StagingError::InvalidPsa { .. })));
    }
}

#[test]
fn repeated_evaluation_is_identical() {
    let input = EvaluationInput {
        biopsy: Some(sheet(vec![cancer("C", 4, 3, 40), cancer("H", 3, 4, 15)])),
        margin: Some("close".to_string()),
        ..clinical(11.0)
    };
    let template = CoreTemplate::standard();
    let first = evaluate(&input, &template).unwrap();
    let second = evaluate(&input, &template).unwrap();

    assert_eq!(first.ajcc.rationale, second.ajcc.rationale);
    assert_eq!(
        first.nccn.result().map(|r| &r.rationale),
        second.nccn.result().map(|r| &r.rationale)
    );
    assert_eq!(
        report::render_report(&first, report::DEFAULT_TITLE),
        report::render_report(&second, report::DEFAULT_TITLE)
    );
}
