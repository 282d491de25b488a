//! Per-combo effectiveness lists

use serde::Serialize;
use typecov_chart::{Relation, Type, TypeChart, TypeCombo};

/// One combo and the types related to it in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub combo: TypeCombo,
    pub types: Vec<Type>,
}

/// Profiles of a combo set, split into one list per category
///
/// Each list is ordered by descending number of types, ties kept in the
/// order the combos were given. The order only matters for dumps; counting
/// ignores it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComboIndex {
    pub strengths: Vec<IndexEntry>,
    pub weaknesses: Vec<IndexEntry>,
    pub resistances: Vec<IndexEntry>,
    pub immunities: Vec<IndexEntry>,
}

impl ComboIndex {
    /// Profile every combo as a defender
    pub fn build(chart: &TypeChart, combos: &[TypeCombo]) -> Self {
        let mut index = Self::default();

        for combo in combos {
            let profile = combo.profile(chart);
            index.strengths.push(entry(combo, profile.strengths));
            index.weaknesses.push(entry(combo, profile.weaknesses));
            index.resistances.push(entry(combo, profile.resistances));
            index.immunities.push(entry(combo, profile.immunities));
        }

        for list in [
            &mut index.strengths,
            &mut index.weaknesses,
            &mut index.resistances,
            &mut index.immunities,
        ] {
            list.sort_by(|a, b| b.types.len().cmp(&a.types.len()));
        }

        index
    }

    /// Entries for one category
    pub fn category(&self, relation: Relation) -> &[IndexEntry] {
        match relation {
            Relation::Strength => &self.strengths,
            Relation::Weakness => &self.weaknesses,
            Relation::Resistance => &self.resistances,
            Relation::Immunity => &self.immunities,
        }
    }

    /// Number of combos indexed
    pub fn len(&self) -> usize {
        self.weaknesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weaknesses.is_empty()
    }
}

fn entry(combo: &TypeCombo, types: impl IntoIterator<Item = Type>) -> IndexEntry {
    IndexEntry {
        combo: *combo,
        types: types.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typecov_chart::{ComboUniverse, TYPE_CHART};

    #[test]
    fn test_build_indexes_every_combo() {
        let universe = ComboUniverse::standard();
        let index = ComboIndex::build(&TYPE_CHART, universe.combos());
        assert_eq!(index.len(), 306);
        for relation in [
            Relation::Strength,
            Relation::Weakness,
            Relation::Resistance,
            Relation::Immunity,
        ] {
            assert_eq!(index.category(relation).len(), 306);
        }
    }

    #[test]
    fn test_lists_sorted_by_length() {
        let universe = ComboUniverse::standard();
        let index = ComboIndex::build(&TYPE_CHART, universe.combos());
        for list in [&index.weaknesses, &index.resistances, &index.immunities] {
            assert!(list.windows(2).all(|w| w[0].types.len() >= w[1].types.len()));
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        // Fire resists more types than Water; neither has an immunity
        let combos = [TypeCombo::single(Type::Water), TypeCombo::single(Type::Fire)];
        let index = ComboIndex::build(&TYPE_CHART, &combos);
        let order: Vec<_> = index.resistances.iter().map(|e| e.combo).collect();
        assert_eq!(order, vec![TypeCombo::single(Type::Fire), TypeCombo::single(Type::Water)]);

        let order: Vec<_> = index.immunities.iter().map(|e| e.combo).collect();
        assert_eq!(order, vec![TypeCombo::single(Type::Water), TypeCombo::single(Type::Fire)]);
    }

    #[test]
    fn test_entries_match_profiles() {
        let combo = TypeCombo::pair(Type::Ghost, Type::Dark);
        let index = ComboIndex::build(&TYPE_CHART, &[combo]);
        assert_eq!(index.weaknesses[0].types, vec![Type::Fairy]);
        assert_eq!(
            index.immunities[0].types,
            vec![Type::Normal, Type::Fighting, Type::Psychic]
        );
    }

    #[test]
    fn test_empty_combo_set() {
        let index = ComboIndex::build(&TYPE_CHART, &[]);
        assert!(index.is_empty());
    }
}
