//! Runtime configuration utilities for prostate-navigator.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

use crate::{report::DEFAULT_TITLE, staging::cores::CoreTemplate};

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Folder receiving exported text reports.
    pub reports_dir: PathBuf,
    /// Heading printed at the top of each report.
    pub report_title: String,
    /// Number of targeted core slots offered (0–3).
    pub targeted_sites: usize,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let reports_dir = env::var("PRN_REPORTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./reports"));
        let report_title =
            env::var("PRN_REPORT_TITLE").unwrap_or_else(|_| DEFAULT_TITLE.to_string());
        let targeted_sites = match env::var("PRN_TARGETED_SITES") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PRN_TARGETED_SITES must be a count, got {raw:?}"))?,
            Err(_) => 3,
        };

        Ok(Self {
            reports_dir,
            report_title,
            targeted_sites,
        })
    }

    /// Core template implied by the configured targeted slot count.
    pub fn core_template(&self) -> CoreTemplate {
        CoreTemplate::with_targeted(self.targeted_sites)
    }

    /// Convenience helper for derived output path segments.
    pub fn join_output<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.reports_dir.join(path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reports_dir: PathBuf::from("./reports"),
            report_title: DEFAULT_TITLE.to_string(),
            targeted_sites: 3,
        }
    }
}
