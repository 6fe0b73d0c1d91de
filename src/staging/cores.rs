//! Per-core biopsy records and their reduction to a biopsy summary.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{Result, StagingError},
    staging::gleason::{self, GleasonGrade, GradeGroup, GLEASON_PATTERNS},
};

/// Standard 12-core systematic template (A–L).
pub const SYSTEMATIC_SITES: &[(&str, &str)] = &[
    ("A", "LEFT LATERAL BASE"),
    ("B", "LEFT LATERAL MID"),
    ("C", "LEFT LATERAL APEX"),
    ("D", "LEFT MEDIAL BASE"),
    ("E", "LEFT MEDIAL MID"),
    ("F", "LEFT MEDIAL APEX"),
    ("G", "RIGHT MEDIAL BASE"),
    ("H", "RIGHT MEDIAL MID"),
    ("I", "RIGHT MEDIAL APEX"),
    ("J", "RIGHT LATERAL BASE"),
    ("K", "RIGHT LATERAL MID"),
    ("L", "RIGHT LATERAL APEX"),
];

/// Optional imaging-directed cores.
pub const TARGETED_SITES: &[(&str, &str)] = &[
    ("T1", "Targeted core 1"),
    ("T2", "Targeted core 2"),
    ("T3", "Targeted core 3"),
];

const HIGH_VOLUME_PERCENT: u8 = 50;

/// One sampled location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreSite {
    pub code: String,
    pub label: String,
}

impl CoreSite {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

impl fmt::Display for CoreSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoreOrigin {
    Systematic,
    Targeted,
}

impl fmt::Display for CoreOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreOrigin::Systematic => f.write_str("Systematic"),
            CoreOrigin::Targeted => f.write_str("Targeted"),
        }
    }
}

/// Histology of a cancer-positive core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancerFocus {
    pub primary: u8,
    pub secondary: u8,
    /// Percent of the core involved, 1–100.
    pub percent: u8,
    #[serde(default)]
    pub epe: bool,
    #[serde(default)]
    pub pni: bool,
}

/// Pathology result; Gleason detail only exists on `Cancer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "result")]
pub enum CoreFinding {
    Benign,
    Asap,
    NotTaken,
    Cancer(CancerFocus),
}

/// One validated biopsy core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BiopsyCore {
    site: CoreSite,
    origin: CoreOrigin,
    finding: CoreFinding,
    description: Option<String>,
}

impl BiopsyCore {
    pub fn new(
        site: CoreSite,
        origin: CoreOrigin,
        finding: CoreFinding,
        description: Option<String>,
    ) -> Result<Self> {
        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        if origin == CoreOrigin::Systematic {
            if finding == CoreFinding::NotTaken {
                return Err(StagingError::core(
                    &site.code,
                    "\"not taken\" is only valid for targeted cores",
                ));
            }
            if description.is_some() {
                return Err(StagingError::core(
                    &site.code,
                    "site descriptions are only recorded for targeted cores",
                ));
            }
        }
        if let CoreFinding::Cancer(focus) = finding {
            for pattern in [focus.primary, focus.secondary] {
                if !GLEASON_PATTERNS.contains(&pattern) {
                    return Err(StagingError::core(
                        &site.code,
                        format!("Gleason pattern {pattern} is not one of 3, 4, 5"),
                    ));
                }
            }
            if !(1..=100).contains(&focus.percent) {
                return Err(StagingError::core(
                    &site.code,
                    format!("percent involvement {} is outside 1-100", focus.percent),
                ));
            }
        }
        Ok(Self {
            site,
            origin,
            finding,
            description,
        })
    }

    pub fn systematic(code: &str, label: &str, finding: CoreFinding) -> Result<Self> {
        Self::new(CoreSite::new(code, label), CoreOrigin::Systematic, finding, None)
    }

    pub fn targeted(
        code: &str,
        label: &str,
        finding: CoreFinding,
        description: Option<String>,
    ) -> Result<Self> {
        Self::new(
            CoreSite::new(code, label),
            CoreOrigin::Targeted,
            finding,
            description,
        )
    }

    pub fn site(&self) -> &CoreSite {
        &self.site
    }

    pub fn origin(&self) -> CoreOrigin {
        self.origin
    }

    pub fn finding(&self) -> CoreFinding {
        self.finding
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Fixed site lists that supply the aggregation denominators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoreTemplate {
    pub systematic: Vec<CoreSite>,
    pub targeted: Vec<CoreSite>,
}

impl CoreTemplate {
    /// 12 systematic sites and 3 targeted slots.
    pub fn standard() -> Self {
        Self::with_targeted(TARGETED_SITES.len())
    }

    /// Standard systematic sites with up to `count` targeted slots.
    pub fn with_targeted(count: usize) -> Self {
        let to_sites = |sites: &[(&str, &str)]| {
            sites
                .iter()
                .map(|(code, label)| CoreSite::new(*code, *label))
                .collect::<Vec<_>>()
        };
        let count = count.min(TARGETED_SITES.len());
        Self {
            systematic: to_sites(SYSTEMATIC_SITES),
            targeted: to_sites(&TARGETED_SITES[..count]),
        }
    }

    fn sites(&self, origin: CoreOrigin) -> &[CoreSite] {
        match origin {
            CoreOrigin::Systematic => &self.systematic,
            CoreOrigin::Targeted => &self.targeted,
        }
    }

    /// Index of a site code within one origin's list.
    pub fn position(&self, origin: CoreOrigin, code: &str) -> Option<usize> {
        self.sites(origin)
            .iter()
            .position(|s| s.code.eq_ignore_ascii_case(code))
    }

    /// Look up a site label by code within one origin.
    pub fn site(&self, origin: CoreOrigin, code: &str) -> Option<&CoreSite> {
        self.position(origin, code).map(|idx| &self.sites(origin)[idx])
    }

    /// Origin implied by a site code, systematic sites first.
    pub fn origin_of(&self, code: &str) -> Option<CoreOrigin> {
        [CoreOrigin::Systematic, CoreOrigin::Targeted]
            .into_iter()
            .find(|origin| self.site(*origin, code).is_some())
    }
}

impl Default for CoreTemplate {
    fn default() -> Self {
        Self::standard()
    }
}

/// A cancer core after grading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradedCore {
    pub site: CoreSite,
    pub origin: CoreOrigin,
    pub description: Option<String>,
    pub grade: GleasonGrade,
    pub percent: u8,
    pub epe: bool,
    pub pni: bool,
}

impl GradedCore {
    /// One-line detail used by the report.
    pub fn detail_line(&self) -> String {
        let extra = match (&self.origin, &self.description) {
            (CoreOrigin::Targeted, Some(desc)) => format!(" ({desc})"),
            _ => String::new(),
        };
        let group = self
            .grade
            .grade_group
            .map_or_else(|| "not assigned".to_string(), |gg| gg.to_string());
        let mut line = format!(
            "{} {} – {}{}: Gleason {} (Grade Group {}), approx. {}% of core",
            self.origin,
            self.site.code,
            self.site.label,
            extra,
            self.grade.notation(),
            group,
            self.percent
        );
        let features: Vec<&str> = [(self.epe, "EPE"), (self.pni, "PNI")]
            .iter()
            .filter(|(present, _)| *present)
            .map(|(_, name)| *name)
            .collect();
        if !features.is_empty() {
            line.push_str(&format!(", {}", features.join(", ")));
        }
        line.push('.');
        line
    }
}

/// Aggregate view of all cores of one biopsy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiopsySummary {
    pub systematic_total: usize,
    pub targeted_total: usize,
    pub systematic_positive: usize,
    pub targeted_positive: usize,
    pub systematic_asap: usize,
    pub targeted_asap: usize,
    pub systematic_benign: usize,
    pub targeted_benign: usize,
    pub targeted_not_taken: usize,
    pub percent_systematic_positive: f64,
    /// Highest Grade Group across every cancer core, `None` without cancer.
    pub highest_grade_group: Option<GradeGroup>,
    /// First core carrying the highest Grade Group.
    pub exemplar: Option<GradedCore>,
    pub high_volume: bool,
    pub high_grade_cores: usize,
    pub epe_cores: usize,
    pub pni_cores: usize,
    pub epe_with_gg3_plus: usize,
    pub pni_with_gg3_plus: usize,
    /// Cancer cores in template order, systematic first.
    pub cancer_cores: Vec<GradedCore>,
}

impl BiopsySummary {
    pub fn total_positive(&self) -> usize {
        self.systematic_positive + self.targeted_positive
    }

    pub fn asap_count(&self) -> usize {
        self.systematic_asap + self.targeted_asap
    }

    pub fn has_cancer(&self) -> bool {
        !self.cancer_cores.is_empty()
    }
}

/// Reduce per-core records to a single biopsy summary.
pub fn aggregate(cores: &[BiopsyCore], template: &CoreTemplate) -> Result<BiopsySummary> {
    let systematic_total = template.systematic.len();
    if systematic_total == 0 {
        return Err(StagingError::InvalidCoreCount { total: 0 });
    }
    let targeted_total = template.targeted.len();

    // one record per template site, visited systematic first then in template order
    let mut ordered: Vec<(CoreOrigin, usize, &BiopsyCore)> = Vec::with_capacity(cores.len());
    for core in cores {
        let position = template
            .position(core.origin, &core.site.code)
            .ok_or_else(|| {
                StagingError::core(
                    &core.site.code,
                    format!("not a {} site in the core template", core.origin),
                )
            })?;
        if ordered
            .iter()
            .any(|(origin, at, _)| *origin == core.origin && *at == position)
        {
            return Err(StagingError::core(
                &core.site.code,
                "site recorded more than once",
            ));
        }
        ordered.push((core.origin, position, core));
    }
    ordered.sort_by_key(|(origin, position, _)| (*origin != CoreOrigin::Systematic, *position));

    let mut summary = BiopsySummary {
        systematic_total,
        targeted_total,
        systematic_positive: 0,
        targeted_positive: 0,
        systematic_asap: 0,
        targeted_asap: 0,
        systematic_benign: 0,
        targeted_benign: 0,
        targeted_not_taken: 0,
        percent_systematic_positive: 0.0,
        highest_grade_group: None,
        exemplar: None,
        high_volume: false,
        high_grade_cores: 0,
        epe_cores: 0,
        pni_cores: 0,
        epe_with_gg3_plus: 0,
        pni_with_gg3_plus: 0,
        cancer_cores: Vec::new(),
    };

    for (_, _, core) in ordered {
        let is_systematic = core.origin == CoreOrigin::Systematic;
        match core.finding {
            CoreFinding::Cancer(focus) => {
                if is_systematic {
                    summary.systematic_positive += 1;
                } else {
                    summary.targeted_positive += 1;
                }
                let graded = tally_cancer(&mut summary, core, focus);
                debug!(site = %graded.site, grade = %graded.grade.description, "graded cancer core");
                summary.cancer_cores.push(graded);
            }
            CoreFinding::Asap if is_systematic => summary.systematic_asap += 1,
            CoreFinding::Asap => summary.targeted_asap += 1,
            CoreFinding::Benign if is_systematic => summary.systematic_benign += 1,
            CoreFinding::Benign => summary.targeted_benign += 1,
            CoreFinding::NotTaken => summary.targeted_not_taken += 1,
        }
    }

    summary.percent_systematic_positive =
        100.0 * summary.systematic_positive as f64 / systematic_total as f64;

    // strict > keeps the earliest template site on ties
    for core in &summary.cancer_cores {
        if let Some(gg) = core.grade.grade_group {
            if summary.highest_grade_group.map_or(true, |best| gg > best) {
                summary.highest_grade_group = Some(gg);
                summary.exemplar = Some(core.clone());
            }
        }
    }

    Ok(summary)
}

fn tally_cancer(summary: &mut BiopsySummary, core: &BiopsyCore, focus: CancerFocus) -> GradedCore {
    let grade = gleason::grade(focus.primary, focus.secondary);
    let gg = grade.grade_group.map(GradeGroup::get);
    if focus.percent >= HIGH_VOLUME_PERCENT {
        summary.high_volume = true;
    }
    if matches!(gg, Some(4 | 5)) {
        summary.high_grade_cores += 1;
    }
    let gg3_plus = matches!(gg, Some(3..=5));
    if focus.epe {
        summary.epe_cores += 1;
        if gg3_plus {
            summary.epe_with_gg3_plus += 1;
        }
    }
    if focus.pni {
        summary.pni_cores += 1;
        if gg3_plus {
            summary.pni_with_gg3_plus += 1;
        }
    }
    GradedCore {
        site: core.site.clone(),
        origin: core.origin,
        description: core.description.clone(),
        grade,
        percent: focus.percent,
        epe: focus.epe,
        pni: focus.pni,
    }
}
