//! Per-type counts over a combo index

use serde::Serialize;
use typecov_chart::{Type, TypeCombo};

use crate::index::{ComboIndex, IndexEntry};

/// How many combos list a type in one category, and which
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypeTally {
    pub count: usize,
    pub combos: Vec<TypeCombo>,
}

/// Tallies for a set of attacking types in one category
///
/// Ordered by descending count, ties in the order the types were given.
/// Every requested type has an entry, even with a zero count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypeAggregate {
    entries: Vec<(Type, TypeTally)>,
}

impl TypeAggregate {
    fn tally(entries: &[IndexEntry], types: &[Type]) -> Self {
        let mut tallies: Vec<(Type, TypeTally)> = types
            .iter()
            .map(|&t| {
                let combos: Vec<TypeCombo> = entries
                    .iter()
                    .filter(|e| e.types.contains(&t))
                    .map(|e| e.combo)
                    .collect();
                let tally = TypeTally {
                    count: combos.len(),
                    combos,
                };
                (t, tally)
            })
            .collect();

        tallies.sort_by(|a, b| b.1.count.cmp(&a.1.count));
        Self { entries: tallies }
    }

    pub fn get(&self, t: Type) -> Option<&TypeTally> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == t)
            .map(|(_, tally)| tally)
    }

    /// Count for `t`, or `None` if `t` was not aggregated
    pub fn count(&self, t: Type) -> Option<usize> {
        self.get(t).map(|tally| tally.count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Type, &TypeTally)> {
        self.entries.iter().map(|(t, tally)| (*t, tally))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Weak, resist and immune tallies over the same combo set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypeCounts {
    /// Combos each type hits super effectively
    pub weak: TypeAggregate,
    /// Combos that resist each type
    pub resist: TypeAggregate,
    /// Combos immune to each type
    pub immune: TypeAggregate,
}

impl TypeCounts {
    /// Invert `index` into per-type tallies for `types`
    pub fn aggregate(index: &ComboIndex, types: &[Type]) -> Self {
        Self {
            weak: TypeAggregate::tally(&index.weaknesses, types),
            resist: TypeAggregate::tally(&index.resistances, types),
            immune: TypeAggregate::tally(&index.immunities, types),
        }
    }
}
