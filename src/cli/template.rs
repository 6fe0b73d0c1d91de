//! CLI entry-point listing the core template.

use anyhow::Result;
use tracing::instrument;

use crate::{config::Settings, staging::CoreOrigin};

#[instrument(skip(settings))]
pub fn run(settings: &Settings) -> Result<()> {
    let template = settings.core_template();
    for (origin, sites) in [
        (CoreOrigin::Systematic, &template.systematic),
        (CoreOrigin::Targeted, &template.targeted),
    ] {
        for site in sites {
            println!("{}\t{}\t{}", site.code, origin.to_string().to_lowercase(), site.label);
        }
    }
    Ok(())
}
