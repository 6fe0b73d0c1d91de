//! Compact summary line and plain-text report assembled from an evaluation.

use crate::{
    advisory::MarginStatus,
    evaluate::{Evaluation, NccnOutcome},
    staging::cores::BiopsySummary,
};

pub const DEFAULT_TITLE: &str = "Prostate Risk Navigator";

fn nccn_text(evaluation: &Evaluation) -> String {
    match &evaluation.nccn {
        NccnOutcome::Computed(result) => result.risk.to_string(),
        NccnOutcome::NotComputed { .. } => "not computed".to_string(),
    }
}

fn tnm_compact(evaluation: &Evaluation) -> String {
    let tnm = &evaluation.tnm;
    format!("{} {} {}", tnm.t, tnm.n, tnm.m)
}

/// Single line suitable for pasting into a clinical note.
pub fn summary_line(evaluation: &Evaluation) -> String {
    let tnm = tnm_compact(evaluation);
    let psa = evaluation.psa;

    match &evaluation.biopsy {
        Some(biopsy) if !biopsy.has_cancer() => format!(
            "No adenocarcinoma identified on biopsy. Systematic cores with cancer: 0/{} ({:.1}%). \
             ASAP in {} core(s). TNM {tnm}, PSA {psa:.1} ng/mL. AJCC prognostic stage and NCCN \
             risk group are not assigned without confirmed cancer.",
            biopsy.systematic_total,
            biopsy.percent_systematic_positive,
            biopsy.asap_count(),
        ),
        Some(biopsy) => {
            let gleason = biopsy
                .exemplar
                .as_ref()
                .map(|core| format!(" (Gleason {})", core.grade.notation()))
                .unwrap_or_default();
            let group = biopsy
                .highest_grade_group
                .map_or_else(|| "unknown".to_string(), |gg| gg.to_string());
            format!(
                "{tnm}, PSA {psa:.1} ng/mL, highest biopsy GG {group}{gleason}, AJCC {}, NCCN {}; \
                 systematic cancer cores {}/{} ({:.1}%), targeted cancer cores {}/{}.",
                evaluation.ajcc.label(),
                nccn_text(evaluation),
                biopsy.systematic_positive,
                biopsy.systematic_total,
                biopsy.percent_systematic_positive,
                biopsy.targeted_positive,
                biopsy.targeted_total,
            )
        }
        None => {
            let group = evaluation
                .grade_group
                .map_or_else(|| "unknown".to_string(), |gg| gg.to_string());
            let mut line = format!(
                "{tnm}, PSA {psa:.1} ng/mL, Grade Group {group}, AJCC {}, NCCN {}",
                evaluation.ajcc.label(),
                nccn_text(evaluation),
            );
            if let (Some(positive), Some(total)) = (evaluation.cores_positive, evaluation.cores_total)
            {
                if total > 0 {
                    let percent = 100.0 * positive as f64 / total as f64;
                    line.push_str(&format!(
                        "; systematic cancer cores {positive}/{total} ({percent:.1}%)"
                    ));
                }
            }
            line.push('.');
            line
        }
    }
}

/// Multi-line plain-text report.
pub fn render_report(evaluation: &Evaluation, title: &str) -> String {
    let mut lines = vec![
        format!("{title} – Prostate cancer staging summary"),
        String::new(),
        format!("TNM: {}", evaluation.tnm),
        format!("PSA: {:.1} ng/mL", evaluation.psa),
    ];

    match &evaluation.biopsy {
        Some(biopsy) => {
            lines.push(highest_grade_line(biopsy));
            lines.push(String::new());
            biopsy_lines(biopsy, &mut lines);
        }
        None => {
            let group = evaluation
                .grade_group
                .map_or_else(|| "unknown".to_string(), |gg| format!("{gg} (entered manually)"));
            lines.push(format!("Grade Group: {group}"));
        }
    }
    if evaluation.margin != MarginStatus::NotReported {
        lines.push(format!("Surgical margin: {}", evaluation.margin.label()));
    }

    lines.push(String::new());
    lines.push(format!(
        "AJCC prognostic stage group: {}",
        evaluation.ajcc.label()
    ));
    lines.extend(evaluation.ajcc.rationale.iter().map(|l| format!("- {l}")));

    lines.push(String::new());
    match &evaluation.nccn {
        NccnOutcome::Computed(result) => {
            lines.push(format!("NCCN risk group: {}", result.risk));
            lines.extend(result.rationale.iter().map(|l| format!("- {l}")));
        }
        NccnOutcome::NotComputed { reason } => {
            lines.push("NCCN risk group: not computed".to_string());
            lines.push(format!("- {reason}"));
        }
    }

    if let Some(biopsy) = evaluation.biopsy.as_ref().filter(|b| b.has_cancer()) {
        lines.push(String::new());
        lines.push("Per-core cancer details:".to_string());
        lines.extend(
            biopsy
                .cancer_cores
                .iter()
                .map(|core| format!("- {}", core.detail_line())),
        );
    }

    lines.push(String::new());
    lines.push(format!("Disease category: {}", evaluation.disease));

    let advisory = &evaluation.advisory;
    for (heading, block) in [
        ("Additional evaluation", &advisory.additional_evaluation),
        ("Treatment options", &advisory.treatment_options),
        ("Prognostic context", &advisory.prognostic_context),
    ] {
        lines.push(String::new());
        lines.push(format!("{heading}:"));
        lines.extend(block.iter().map(|l| format!("- {l}")));
    }

    lines.push(String::new());
    lines.push(format!("Summary: {}", summary_line(evaluation)));
    lines.join("\n")
}

fn highest_grade_line(biopsy: &BiopsySummary) -> String {
    match (&biopsy.highest_grade_group, &biopsy.exemplar) {
        (Some(gg), Some(core)) => format!(
            "Highest biopsy Grade Group: {gg} (example {} Gleason {})",
            core.site,
            core.grade.notation()
        ),
        _ => "Highest biopsy Grade Group: none (no confirmed cancer)".to_string(),
    }
}

fn biopsy_lines(biopsy: &BiopsySummary, lines: &mut Vec<String>) {
    lines.push(format!(
        "Systematic cores with cancer: {}/{} ({:.1}%)",
        biopsy.systematic_positive, biopsy.systematic_total, biopsy.percent_systematic_positive
    ));
    lines.push(format!(
        "Targeted cores with cancer: {}/{}",
        biopsy.targeted_positive, biopsy.targeted_total
    ));
    if !biopsy.has_cancer() {
        lines.push(format!(
            "Benign cores: {}/{} systematic, {}/{} targeted",
            biopsy.systematic_benign,
            biopsy.systematic_total,
            biopsy.targeted_benign,
            biopsy.targeted_total
        ));
    }
    if biopsy.high_volume {
        lines.push("At least one core has ≥50% involvement.".to_string());
    }
    if biopsy.high_grade_cores > 0 {
        lines.push(format!(
            "Cores with Grade Group 4–5: {}",
            biopsy.high_grade_cores
        ));
    }
    if biopsy.asap_count() > 0 {
        lines.push(format!("ASAP present in {} core(s).", biopsy.asap_count()));
    }
    if biopsy.epe_cores > 0 {
        lines.push(format!(
            "EPE present in {} core(s), {} with Grade Group ≥3.",
            biopsy.epe_cores, biopsy.epe_with_gg3_plus
        ));
    }
    if biopsy.pni_cores > 0 {
        lines.push(format!(
            "PNI present in {} core(s), {} with Grade Group ≥3.",
            biopsy.pni_cores, biopsy.pni_with_gg3_plus
        ));
    }
}
