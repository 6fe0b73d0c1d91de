//! CLI entry-point for Gleason grading.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::staging::gleason;

/// Args for the `grade` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Primary (most prevalent) Gleason pattern.
    #[arg(long)]
    pub primary: u8,
    /// Secondary Gleason pattern.
    #[arg(long)]
    pub secondary: u8,
}

#[instrument]
pub fn run(args: Args) -> Result<()> {
    let grade = gleason::grade(args.primary, args.secondary);
    println!("{}", grade.description);
    Ok(())
}
