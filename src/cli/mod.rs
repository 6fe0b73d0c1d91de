//! Command-line interface wiring for prostate-navigator.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Settings;

pub mod evaluate;
pub mod grade;
pub mod risk;
pub mod stage;
pub mod template;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "AJCC 8th stage group and NCCN risk classification for prostate cancer",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Evaluate(args) => evaluate::run(args, &settings),
            Commands::Stage(args) => stage::run(args),
            Commands::Risk(args) => risk::run(args),
            Commands::Grade(args) => grade::run(args),
            Commands::Template => template::run(&settings),
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the full evaluation for a JSON case file.
    Evaluate(evaluate::Args),
    /// AJCC prognostic stage group only.
    Stage(stage::Args),
    /// NCCN risk group only.
    Risk(risk::Args),
    /// Grade Group for one Gleason pattern pair.
    Grade(grade::Args),
    /// List the biopsy core sites accepted in case files and core sheets.
    Template,
}

/// Output rendering for classification commands.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text report.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// Single compact summary line.
    Summary,
}

/// Shared TNM/PSA arguments.
#[derive(Debug, Clone, clap::Args)]
pub struct StagingArgs {
    /// T category, e.g. cT2a.
    #[arg(long = "t", default_value = "cT1c")]
    pub t_stage: String,
    /// N category, e.g. cN0.
    #[arg(long = "n", default_value = "cN0")]
    pub n_stage: String,
    /// M category, e.g. cM0.
    #[arg(long = "m", default_value = "cM0")]
    pub m_stage: String,
    /// PSA in ng/mL.
    #[arg(long)]
    pub psa: f64,
}

pub(crate) fn print_rationale(label: &str, rationale: &[String]) {
    println!("{label}");
    for line in rationale {
        println!("- {line}");
    }
}
