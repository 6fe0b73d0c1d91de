//! CLI entry-point for the NCCN risk group alone.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    cli::{print_rationale, StagingArgs},
    staging::{self, nccn, GradeGroup, NccnInput, Tnm},
};

/// Args for the `risk` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    #[command(flatten)]
    pub staging: StagingArgs,
    /// Highest biopsy Grade Group (1-5).
    #[arg(long)]
    pub grade_group: i64,
    /// Systematic cores containing cancer.
    #[arg(long, default_value_t = 0)]
    pub cores_positive: i64,
    /// Systematic cores sampled.
    #[arg(long, default_value_t = 12)]
    pub cores_total: i64,
}

#[instrument]
pub fn run(args: Args) -> Result<()> {
    let tnm = Tnm::parse(
        &args.staging.t_stage,
        &args.staging.n_stage,
        &args.staging.m_stage,
    )?;
    let psa = staging::check_psa(args.staging.psa)?;
    let result = nccn::classify(&NccnInput {
        tnm: &tnm,
        grade_group: GradeGroup::new(args.grade_group)?,
        psa,
        cores_positive: args.cores_positive,
        cores_total: args.cores_total,
    })?;
    print_rationale(&result.risk.to_string(), &result.rationale);
    Ok(())
}
