//! typecov - type coverage reports from a team file.
//!
//! The binary reads a team file, analyzes every member against the global
//! combo index and prints either tab-aligned tables or JSON.

pub mod cli;
pub mod config;
pub mod output;

pub use cli::Cli;
pub use config::{ChartSettings, Config, ConfigError, OutputFormat};
pub use output::Formatter;

use typecov_coverage::Member;
use typecov_team::TeamEntry;

/// Members for the analyzer, in file order.
///
/// Unknown type names are kept; they only surface in the report.
pub fn team_members(entries: &[TeamEntry]) -> Vec<Member> {
    entries
        .iter()
        .map(|entry| Member::new(entry.primary.clone(), entry.secondary.clone()))
        .collect()
}
