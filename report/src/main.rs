//! typecov - print attack type coverage suggestions for a team file.

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use typecov_chart::TYPE_CHART;
use typecov_coverage::CoverageContext;
use typecov_report::{team_members, Cli, Config, Formatter};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = Config::discover(cli.config.as_deref())?;
    config.apply(cli);
    tracing::info!(input = %config.input.display(), format = ?config.format, "starting");

    let entries = typecov_team::read_team_file(&config.input)?;
    for entry in &entries {
        for tag in entry.unknown() {
            tracing::warn!(line = entry.line, name = %tag, "unknown type name");
        }
    }

    let members = team_members(&entries);
    let context = CoverageContext::new(&TYPE_CHART, config.universe());
    let report = context.analyze_team(&members);
    tracing::info!(
        members = report.members.len(),
        without_stab = report.without_stab.len(),
        "team analyzed"
    );

    let formatter = Formatter::new(config.format, config.quiet);
    let index = config.dump_index.then(|| context.index());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    formatter
        .write(&mut out, &entries, &report, index)
        .context("Failed to write report")?;
    out.flush().context("Failed to write report")?;

    Ok(())
}

/// Logs go to stderr so the report on stdout stays clean. `RUST_LOG`
/// overrides the level picked by `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}
