//! Binary crate for the `hko-weather` command-line viewer.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Rendering the weather page in the terminal

use clap::Parser;

mod cli;
mod logging;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    logging::setup_logging(cmd.log_level.as_deref())?;
    cmd.run().await
}
