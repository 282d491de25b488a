//! Static type chart and effectiveness profiles.
//!
//! This crate holds the fixed rules every coverage computation starts from.
//!
//! # Overview
//!
//! ```text
//! typecov-chart (types, chart, combos, profiles) ← THIS CRATE
//!        │
//!        ├─> typecov-coverage (combo index, aggregates, coverage picks)
//!        └─> typecov-team (team file parsing)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - The 18 types in canonical order
//! - [`TypeTag`] - A team member's type slot, possibly naming no known type
//! - [`TypeChart`] - Strength, weakness, resistance and immunity tables
//! - [`TypeCombo`] - One or two types describing a defender
//! - [`ComboUniverse`] - Every legal combination
//! - [`EffectivenessProfile`] - A combo's four-way interaction profile
//!
//! # Example Usage
//!
//! ```
//! use typecov_chart::{ComboUniverse, Type, TypeCombo, TYPE_CHART};
//!
//! let universe = ComboUniverse::standard();
//! assert_eq!(universe.len(), 306);
//!
//! let profile = TypeCombo::pair(Type::Water, Type::Ground).profile(&TYPE_CHART);
//! assert!(profile.is_weak_to(Type::Grass));
//! assert!(profile.is_immune_to(Type::Electric));
//! ```

mod chart;
mod combos;
mod profile;
mod types;

pub use chart::{Relation, TypeChart, TYPE_CHART};
pub use combos::{unused_combos, ComboUniverse, TypeCombo, UNUSED_COMBOS};
pub use profile::EffectivenessProfile;
pub use types::{Type, TypeTag, UnknownType};
