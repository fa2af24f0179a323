//! prose-stepper: walk prose one fragment at a time

use clap::Parser;
use prose_stepper_cli::commands::Commands;

/// Step through prose by sentence, word or word fragment
#[derive(Debug, Parser)]
#[command(name = "prose-stepper", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    Cli::parse().command.execute()
}
