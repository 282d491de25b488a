//! Ranking attack types by coverage

use std::cmp::Reverse;

use serde::Serialize;
use typecov_chart::TypeTag;

use crate::aggregate::{TypeAggregate, TypeCounts};

/// Most types a selection holds (one per move slot)
pub const MAX_PICKS: usize = 4;

/// One selected attack type and its counts
///
/// A count is `None` when the type has no aggregate entry at all, which is
/// different from an entry with a count of zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoveragePick {
    pub tag: TypeTag,
    pub weak: Option<usize>,
    pub resist: Option<usize>,
    pub immune: Option<usize>,
}

impl CoveragePick {
    fn new(tag: TypeTag, counts: &TypeCounts) -> Self {
        Self {
            weak: lookup(&counts.weak, &tag),
            resist: lookup(&counts.resist, &tag),
            immune: lookup(&counts.immune, &tag),
            tag,
        }
    }

    /// `["{n} weak to", "{n} resists", "{n} immune"]`, `None` for a missing entry
    pub fn labels(&self) -> [String; 3] {
        [
            label(self.weak, "weak to"),
            label(self.resist, "resists"),
            label(self.immune, "immune"),
        ]
    }

    fn rank(&self) -> (usize, usize, usize) {
        (
            self.weak.unwrap_or(0),
            self.resist.unwrap_or(0),
            self.immune.unwrap_or(0),
        )
    }
}

/// Up to [`MAX_PICKS`] attack types, best first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CoverageSelection {
    picks: Vec<CoveragePick>,
}

impl CoverageSelection {
    pub fn picks(&self) -> &[CoveragePick] {
        &self.picks
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Type names, in pick order
    pub fn header(&self) -> Vec<String> {
        self.picks.iter().map(|p| p.tag.to_string()).collect()
    }
}

/// Rank `candidates` and keep the best [`MAX_PICKS`]
///
/// Ranking is by super effective count, then resisted count, then immune
/// count, all descending; missing counts rank as zero. Equal candidates keep
/// their input order. `None` slots take part in ranking but are never picked.
pub fn select(candidates: &[Option<TypeTag>], counts: &TypeCounts) -> CoverageSelection {
    let mut ranked: Vec<Option<CoveragePick>> = candidates
        .iter()
        .map(|slot| slot.clone().map(|tag| CoveragePick::new(tag, counts)))
        .collect();

    ranked.sort_by_key(|slot| Reverse(slot.as_ref().map(CoveragePick::rank).unwrap_or_default()));

    let picks = ranked.into_iter().take(MAX_PICKS).flatten().collect();
    CoverageSelection { picks }
}

fn lookup(aggregate: &TypeAggregate, tag: &TypeTag) -> Option<usize> {
    tag.known().and_then(|t| aggregate.count(t))
}

fn label(count: Option<usize>, suffix: &str) -> String {
    match count {
        Some(n) => format!("{n} {suffix}"),
        None => format!("None {suffix}"),
    }
}
