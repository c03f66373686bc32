//! Command-line entry point for phonics chunk segmentation

use anyhow::Result;
use clap::Parser;
use phonics_cli::commands::Commands;

#[derive(Debug, Parser)]
#[command(name = "phonics", version)]
#[command(about = "Split English words into phonics chunks for early-reading practice")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
