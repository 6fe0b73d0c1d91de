//! CLI entry-point for AJCC staging alone.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    cli::{print_rationale, StagingArgs},
    staging::{self, ajcc, AjccInput, GradeGroup, Tnm},
};

/// Args for the `stage` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    #[command(flatten)]
    pub staging: StagingArgs,
    /// Highest Grade Group (1-5); omit when unknown.
    #[arg(long)]
    pub grade_group: Option<i64>,
}

#[instrument]
pub fn run(args: Args) -> Result<()> {
    let tnm = Tnm::parse(
        &args.staging.t_stage,
        &args.staging.n_stage,
        &args.staging.m_stage,
    )?;
    let psa = staging::check_psa(args.staging.psa)?;
    let grade_group = args.grade_group.map(GradeGroup::new).transpose()?;
    let result = ajcc::classify(&AjccInput {
        tnm: &tnm,
        psa,
        grade_group,
    });
    print_rationale(result.label(), &result.rationale);
    Ok(())
}
