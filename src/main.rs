//! Entry point wiring CLI dispatch to the classification library.

use anyhow::Result;
use prostate_navigator::{cli::Cli, config::Settings, logging};
use tracing::{debug, instrument};

#[instrument]
fn main() -> Result<()> {
    logging::init_tracing()?;
    let settings = Settings::load()?;
    let cli = Cli::parse();

    debug!(?cli, "starting command");
    cli.dispatch(settings)
}
