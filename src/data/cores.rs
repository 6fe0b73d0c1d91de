//! Raw biopsy core records as they arrive from case files and core sheets.

use std::path::Path;

use anyhow::Context;
use csv::{ReaderBuilder, Trim};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use tracing::info;

use crate::{
    error::{Result, StagingError},
    staging::cores::{BiopsyCore, CancerFocus, CoreFinding, CoreOrigin, CoreTemplate},
};

/// One unvalidated core row, e.g. a line of
/// `site,origin,result,primary,secondary,percent,epe,pni,description`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CoreRecord {
    pub site: String,
    /// Inferred from the template when absent.
    #[serde(default)]
    pub origin: Option<CoreOrigin>,
    pub result: String,
    #[serde(default)]
    pub primary: Option<u8>,
    #[serde(default)]
    pub secondary: Option<u8>,
    #[serde(default)]
    pub percent: Option<u8>,
    #[serde(default, deserialize_with = "flag")]
    pub epe: bool,
    #[serde(default, deserialize_with = "flag")]
    pub pni: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl CoreRecord {
    /// Resolve the site against `template` and enforce the record invariants.
    pub fn to_core(&self, template: &CoreTemplate) -> Result<BiopsyCore> {
        let code = self.site.trim();
        let origin = match self.origin {
            Some(origin) => origin,
            None => template
                .origin_of(code)
                .ok_or_else(|| StagingError::core(code, "site is not in the core template"))?,
        };
        let site = template.site(origin, code).cloned().ok_or_else(|| {
            StagingError::core(code, format!("not a {} site in the core template", origin))
        })?;
        let finding = self.finding(code)?;
        BiopsyCore::new(site, origin, finding, self.description.clone())
    }

    fn finding(&self, code: &str) -> Result<CoreFinding> {
        let result = self
            .result
            .trim()
            .to_ascii_lowercase()
            .replace(['_', '-'], " ");
        let has_cancer_fields =
            self.primary.is_some() || self.secondary.is_some() || self.percent.is_some();
        let finding = match result.as_str() {
            "cancer" | "adenocarcinoma" => {
                let missing = |field: &str| {
                    StagingError::core(code, format!("cancer core is missing {field}"))
                };
                return Ok(CoreFinding::Cancer(CancerFocus {
                    primary: self.primary.ok_or_else(|| missing("primary pattern"))?,
                    secondary: self.secondary.ok_or_else(|| missing("secondary pattern"))?,
                    percent: self.percent.ok_or_else(|| missing("percent involvement"))?,
                    epe: self.epe,
                    pni: self.pni,
                }));
            }
            "benign" => CoreFinding::Benign,
            "asap" => CoreFinding::Asap,
            "not taken" => CoreFinding::NotTaken,
            other => {
                return Err(StagingError::core(
                    code,
                    format!("unknown pathology result {other:?}"),
                ))
            }
        };
        if has_cancer_fields || self.epe || self.pni {
            return Err(StagingError::core(
                code,
                "Gleason patterns, percent and EPE/PNI are only recorded for cancer cores",
            ));
        }
        Ok(finding)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    match Option::<FlagValue>::deserialize(deserializer)? {
        None => Ok(false),
        Some(FlagValue::Bool(value)) => Ok(value),
        Some(FlagValue::Int(value)) => Ok(value != 0),
        Some(FlagValue::Text(text)) => match text.trim().to_ascii_lowercase().as_str() {
            "" | "n" | "no" | "false" | "0" => Ok(false),
            "y" | "yes" | "true" | "1" => Ok(true),
            other => Err(D::Error::custom(format!("expected yes/no, got {other:?}"))),
        },
    }
}

/// Read a CSV core sheet with a header row.
pub fn read_core_sheet(path: &Path) -> anyhow::Result<Vec<CoreRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening core sheet {}", path.display()))?;
    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<CoreRecord>().enumerate() {
        let record = row.with_context(|| format!("parsing core sheet row {}", idx + 1))?;
        records.push(record);
    }
    info!(path = %path.display(), rows = records.len(), "read core sheet");
    Ok(records)
}
