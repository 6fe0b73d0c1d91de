//! CLI entry-point for a full case evaluation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{cli::OutputFormat, config::Settings, data, evaluate, report};

/// Args for the `evaluate` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// JSON case file.
    #[arg(long)]
    pub input: PathBuf,
    /// CSV core sheet replacing any biopsy detail in the case file.
    #[arg(long)]
    pub cores: Option<PathBuf>,
    /// Output rendering.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Also write the text report to the configured reports directory.
    #[arg(long)]
    pub export: bool,
}

#[instrument(skip(settings))]
pub fn run(args: Args, settings: &Settings) -> Result<()> {
    let input = data::case::load_case(&args.input, args.cores.as_deref())?;
    let evaluation = evaluate::evaluate(&input, &settings.core_template())
        .with_context(|| format!("evaluating {}", args.input.display()))?;
    let text = report::render_report(&evaluation, &settings.report_title);

    match args.format {
        OutputFormat::Text => println!("{text}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&evaluation)?),
        OutputFormat::Summary => println!("{}", report::summary_line(&evaluation)),
    }

    if args.export {
        std::fs::create_dir_all(&settings.reports_dir).context("creating reports dir")?;
        let name = format!(
            "prostate_staging_report_{}.txt",
            Utc::now().format("%Y%m%dT%H%M%SZ")
        );
        let out_path = settings.join_output(name);
        std::fs::write(&out_path, format!("{text}\n"))
            .with_context(|| format!("writing {}", out_path.display()))?;
        info!(path = %out_path.display(), "wrote report");
        eprintln!("report written to {}", out_path.display());
    }
    Ok(())
}
