//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::OutputFormat;

/// typecov - Suggest attack type coverage for a team.
#[derive(Debug, Parser)]
#[command(name = "typecov")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Team file, one member per line (overrides the config file)
    pub input: Option<PathBuf>,

    /// Configuration file path [default: ./typecov.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also print the global combo index
    #[arg(long)]
    pub dump_index: bool,

    /// Keep combinations no real creature uses (324 instead of 306)
    #[arg(long)]
    pub include_unused: bool,

    /// Skip the intro banner and team listing
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
