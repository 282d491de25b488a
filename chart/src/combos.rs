//! Type combinations and the universe of legal combinations

use std::collections::HashSet;
use std::fmt;

use crate::chart::TypeChart;
use crate::profile::EffectivenessProfile;
use crate::types::Type;

/// One or two types describing a defender
///
/// A pair of identical types collapses to the single-type form. Pairs are
/// ordered: `(water, ground)` and `(ground, water)` are different keys, and
/// the stock universe holds both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeCombo {
    first: Type,
    second: Option<Type>,
}

impl TypeCombo {
    /// Build a combo, collapsing `(t, t)` to `(t, None)`
    pub fn new(first: Type, second: Option<Type>) -> Self {
        let second = second.filter(|s| *s != first);
        Self { first, second }
    }

    pub fn single(t: Type) -> Self {
        Self::new(t, None)
    }

    pub fn pair(first: Type, second: Type) -> Self {
        Self::new(first, Some(second))
    }

    pub fn first(&self) -> Type {
        self.first
    }

    pub fn second(&self) -> Option<Type> {
        self.second
    }

    /// The one or two member types
    pub fn types(&self) -> Vec<Type> {
        std::iter::once(self.first).chain(self.second).collect()
    }

    /// Whether `t` is one of the member types
    pub fn contains(&self, t: Type) -> bool {
        self.first == t || self.second == Some(t)
    }

    /// Effectiveness profile of this combo as a defender
    pub fn profile(&self, chart: &TypeChart) -> EffectivenessProfile {
        EffectivenessProfile::of(chart, &self.types())
    }
}

impl fmt::Display for TypeCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.second {
            Some(second) => write!(f, "{} {}", self.first, second),
            None => write!(f, "{}", self.first),
        }
    }
}

/// Combinations no real creature uses
///
/// Both orderings are listed because the universe keeps ordered pairs.
pub const UNUSED_COMBOS: [(Type, Type); 18] = [
    (Type::Normal, Type::Ice),
    (Type::Normal, Type::Bug),
    (Type::Normal, Type::Rock),
    (Type::Normal, Type::Steel),
    (Type::Fire, Type::Fairy),
    (Type::Ice, Type::Poison),
    (Type::Ground, Type::Fairy),
    (Type::Bug, Type::Dragon),
    (Type::Rock, Type::Ghost),
    (Type::Ice, Type::Normal),
    (Type::Bug, Type::Normal),
    (Type::Rock, Type::Normal),
    (Type::Steel, Type::Normal),
    (Type::Fairy, Type::Fire),
    (Type::Poison, Type::Ice),
    (Type::Fairy, Type::Ground),
    (Type::Dragon, Type::Bug),
    (Type::Ghost, Type::Rock),
];

/// [`UNUSED_COMBOS`] as combo keys
pub fn unused_combos() -> Vec<TypeCombo> {
    UNUSED_COMBOS
        .iter()
        .map(|&(a, b)| TypeCombo::pair(a, b))
        .collect()
}

/// Every legal combination, in generation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboUniverse {
    combos: Vec<TypeCombo>,
}

impl ComboUniverse {
    /// Cross product of `types` with itself, minus `excluded`
    ///
    /// Exclusions that match nothing are ignored.
    pub fn generate(types: &[Type], excluded: &[TypeCombo]) -> Self {
        let excluded: HashSet<TypeCombo> = excluded.iter().copied().collect();
        let mut seen = HashSet::new();

        let combos = types
            .iter()
            .flat_map(|&first| types.iter().map(move |&second| TypeCombo::pair(first, second)))
            .filter(|combo| !excluded.contains(combo))
            .filter(|combo| seen.insert(*combo))
            .collect();

        Self { combos }
    }

    /// All 18 types without the unused combinations (306 combos)
    pub fn standard() -> Self {
        Self::generate(Type::all(), &unused_combos())
    }

    /// All 18 types, nothing excluded (324 combos)
    pub fn unrestricted() -> Self {
        Self::generate(Type::all(), &[])
    }

    pub fn combos(&self) -> &[TypeCombo] {
        &self.combos
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeCombo> {
        self.combos.iter()
    }

    pub fn len(&self) -> usize {
        self.combos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }

    pub fn contains(&self, combo: &TypeCombo) -> bool {
        self.combos.contains(combo)
    }

    /// Combos not in `remove`, keeping universe order
    pub fn difference(&self, remove: &HashSet<TypeCombo>) -> Vec<TypeCombo> {
        self.combos
            .iter()
            .filter(|combo| !remove.contains(combo))
            .copied()
            .collect()
    }
}
