use prostate_navigator::{
    data::cores::CoreRecord,
    evaluate,
    report::{render_report, DEFAULT_TITLE},
    staging::cores::{CoreOrigin, CoreTemplate},
    EvaluationInput,
};

fn record(site: &str, result: &str) -> CoreRecord {
    CoreRecord {
        site: site.to_string(),
        result: result.to_string(),
        ..CoreRecord::default()
    }
}

fn case() -> EvaluationInput {
    let mut biopsy: Vec<CoreRecord> = "ABCDEFGHIJKL"
        .chars()
        .map(|site| record(&site.to_string(), "benign"))
        .collect();
    biopsy[2] = CoreRecord {
        result: "adenocarcinoma".to_string(),
        primary: Some(4),
        secondary: Some(3),
        percent: Some(55),
        epe: true,
        ..record("C", "")
    };
    biopsy.push(CoreRecord {
        origin: Some(CoreOrigin::Targeted),
        primary: Some(3),
        secondary: Some(4),
        percent: Some(30),
        description: Some("left anterior TZ".to_string()),
        ..record("T1", "cancer")
    });
    EvaluationInput {
        t_stage: "cT2c".to_string(),
        n_stage: "cN0".to_string(),
        m_stage: "cM0".to_string(),
        psa: 11.0,
        biopsy: Some(biopsy),
        ..EvaluationInput::default()
    }
}

#[test]
fn report_lists_every_section() {
    let evaluation = evaluate(&case(), &CoreTemplate::standard()).unwrap();
    let text = render_report(&evaluation, DEFAULT_TITLE);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Prostate Risk Navigator – Prostate cancer staging summary");
    assert!(lines.contains(&"TNM: cT2c, cN0, cM0"));
    assert!(lines.contains(&"Highest biopsy Grade Group: 3 (example C LEFT LATERAL APEX Gleason 4+3=7)"));
    assert!(lines.contains(&"Systematic cores with cancer: 1/12 (8.3%)"));
    assert!(lines.contains(&"Targeted cores with cancer: 1/3"));
    assert!(lines.contains(&"At least one core has ≥50% involvement."));
    assert!(lines.contains(&"EPE present in 1 core(s), 1 with Grade Group ≥3."));
    assert!(lines.contains(&"AJCC prognostic stage group: Stage IIC"));
    assert!(lines.contains(&"NCCN risk group: Intermediate (Unfavorable intermediate)"));
    assert!(lines.contains(&"- Intermediate-risk factors: T2b–T2c, Grade Group 2–3, PSA 10–20"));
    assert!(lines.contains(
        &"- Targeted T1 – Targeted core 1 (left anterior TZ): Gleason 3+4=7 (Grade Group 2), approx. 30% of core."
    ));
    assert!(lines.contains(&"Disease category: Localized"));
    assert!(lines.contains(&"Treatment options:"));

    let last = lines.last().copied().unwrap_or_default();
    assert!(last.starts_with("Summary: cT2c cN0 cM0, PSA 11.0 ng/mL, highest biopsy GG 3"));
}

#[test]
fn custom_title_and_manual_grade() {
    let input = EvaluationInput {
        t_stage: "cT1c".to_string(),
        n_stage: "cN0".to_string(),
        m_stage: "cM0".to_string(),
        psa: 4.0,
        grade_group: Some(1),
        cores_positive: Some(2),
        cores_total: Some(12),
        margin: Some("negative".to_string()),
        ..EvaluationInput::default()
    };
    let evaluation = evaluate(&input, &CoreTemplate::standard()).unwrap();
    let text = render_report(&evaluation, "Clinic");

    assert!(text.starts_with("Clinic – Prostate cancer staging summary\n"));
    assert!(text.contains("\nGrade Group: 1 (entered manually)\n"));
    assert!(text.contains("\nSurgical margin: Negative\n"));
    assert!(text.contains("\nNCCN risk group: Low\n"));
    assert!(!text.contains("Per-core cancer details:"));
}
