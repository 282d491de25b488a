//! Coverage recommendations for a team.
//!
//! Given the combo universe from `typecov-chart`, this crate profiles every
//! combo, counts how many combos each attack type hits, and picks up to four
//! attack types per team member: first the member's own types (STAB), then
//! the types that best cover what the member's own types miss.
//!
//! # Main Types
//!
//! - [`ComboIndex`] - Per-combo weakness/resistance/immunity lists
//! - [`TypeCounts`] - Per-attack-type tallies over a combo index
//! - [`CoverageSelection`] - Up to four ranked attack types
//! - [`CoverageContext`] - Global index and tallies, built once per run
//! - [`TeamReport`] - Per-member results plus the team summary
//!
//! # Example Usage
//!
//! ```
//! use typecov_chart::Type;
//! use typecov_coverage::{CoverageContext, Member};
//!
//! let context = CoverageContext::standard();
//! let report = context.analyze_team(&[Member::single(Type::Fire)]);
//!
//! let fire = &report.members[0];
//! assert_eq!(fire.coverage.header()[0], "fire");
//! assert!(!report.without_stab.contains(&Type::Fire));
//! ```

mod aggregate;
mod analysis;
mod index;
mod member;
mod residual;
mod select;

pub use aggregate::{TypeAggregate, TypeCounts, TypeTally};
pub use analysis::{types_without_stab, CoverageContext, CoverageTable, MemberReport, TeamReport};
pub use index::{ComboIndex, IndexEntry};
pub use member::Member;
pub use residual::{covered_combos, recommend, residual_combos};
pub use select::{select, CoveragePick, CoverageSelection, MAX_PICKS};
