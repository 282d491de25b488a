//! Effectiveness profiles for one or two defending types

use std::collections::BTreeSet;

use crate::chart::{Relation, TypeChart};
use crate::types::Type;

/// How a combo interacts with every attacking type
///
/// `weaknesses`, `resistances` and `immunities` never share a type.
/// `strengths` is the offensive axis and is independent of the other three.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectivenessProfile {
    /// Types the combo hits super effectively
    pub strengths: BTreeSet<Type>,
    /// Types that hit the combo super effectively
    pub weaknesses: BTreeSet<Type>,
    /// Types the combo resists
    pub resistances: BTreeSet<Type>,
    /// Types the combo is immune to. Sorted, but a list: if both member types
    /// grant the same immunity it appears twice.
    pub immunities: Vec<Type>,
}

impl EffectivenessProfile {
    /// Profile of the given member types as a defender
    ///
    /// Immunity overrides weakness and resistance. A type that is both a raw
    /// weakness and a raw resistance cancels out of both lists.
    pub fn of(chart: &TypeChart, types: &[Type]) -> Self {
        let strengths = union(chart, Relation::Strength, types);
        let weak_raw = union(chart, Relation::Weakness, types);
        let resist_raw = union(chart, Relation::Resistance, types);

        let mut immunities: Vec<Type> = types
            .iter()
            .flat_map(|t| chart.immunities(*t))
            .copied()
            .collect();
        immunities.sort();

        let weaknesses = weak_raw
            .iter()
            .copied()
            .filter(|t| !immunities.contains(t))
            .filter(|t| !resist_raw.contains(t))
            .collect();

        let resistances = resist_raw
            .iter()
            .copied()
            .filter(|t| !immunities.contains(t))
            .filter(|t| !weak_raw.contains(t))
            .collect();

        Self {
            strengths,
            weaknesses,
            resistances,
            immunities,
        }
    }

    /// Types this profile does not hit super effectively, in canonical order
    pub fn uncovered(&self) -> Vec<Type> {
        Type::all()
            .iter()
            .copied()
            .filter(|t| !self.strengths.contains(t))
            .collect()
    }

    pub fn is_weak_to(&self, attacking: Type) -> bool {
        self.weaknesses.contains(&attacking)
    }

    pub fn resists(&self, attacking: Type) -> bool {
        self.resistances.contains(&attacking)
    }

    pub fn is_immune_to(&self, attacking: Type) -> bool {
        self.immunities.contains(&attacking)
    }
}

fn union(chart: &TypeChart, relation: Relation, types: &[Type]) -> BTreeSet<Type> {
    types
        .iter()
        .flat_map(|t| chart.related(relation, *t))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::TYPE_CHART;
    use crate::combos::ComboUniverse;

    fn set(types: &[Type]) -> BTreeSet<Type> {
        types.iter().copied().collect()
    }

    #[test]
    fn test_fire_profile() {
        let fire = EffectivenessProfile::of(&TYPE_CHART, &[Type::Fire]);
        assert_eq!(
            fire.strengths,
            set(&[Type::Grass, Type::Ice, Type::Bug, Type::Steel])
        );
        assert_eq!(
            fire.weaknesses,
            set(&[Type::Water, Type::Ground, Type::Rock])
        );
        assert_eq!(
            fire.resistances,
            set(&[
                Type::Fire,
                Type::Grass,
                Type::Ice,
                Type::Bug,
                Type::Steel,
                Type::Fairy
            ])
        );
        assert!(fire.immunities.is_empty());
    }

    #[test]
    fn test_immunity_overrides_weakness() {
        // Fighting is a raw weakness of Dark, but Ghost is immune to it
        let profile = EffectivenessProfile::of(&TYPE_CHART, &[Type::Ghost, Type::Dark]);
        assert_eq!(
            profile.immunities,
            vec![Type::Normal, Type::Fighting, Type::Psychic]
        );
        assert!(!profile.is_weak_to(Type::Fighting));
        assert!(!profile.is_weak_to(Type::Psychic));
        assert!(profile.is_immune_to(Type::Normal));
        assert_eq!(profile.weaknesses, set(&[Type::Fairy]));
        assert_eq!(profile.resistances, set(&[Type::Poison]));
    }

    #[test]
    fn test_weakness_and_resistance_cancel() {
        // Water/Ground: Fire is resisted by both halves, Water hits Ground but
        // Water resists it, Electric is absorbed by Ground's immunity
        let profile = EffectivenessProfile::of(&TYPE_CHART, &[Type::Water, Type::Ground]);
        assert_eq!(profile.weaknesses, set(&[Type::Grass]));
        assert_eq!(
            profile.resistances,
            set(&[Type::Fire, Type::Poison, Type::Rock, Type::Steel])
        );
        assert_eq!(profile.immunities, vec![Type::Electric]);
        assert!(!profile.is_weak_to(Type::Water));
        assert!(!profile.resists(Type::Water));
    }

    #[test]
    fn test_strengths_ignore_defensive_filters() {
        let profile = EffectivenessProfile::of(&TYPE_CHART, &[Type::Ghost, Type::Normal]);
        assert_eq!(profile.strengths, set(&[Type::Psychic, Type::Ghost]));
        assert_eq!(profile.immunities, vec![Type::Normal, Type::Fighting, Type::Ghost]);
        assert!(profile.weaknesses.contains(&Type::Dark));
    }

    #[test]
    fn test_categories_are_disjoint_for_every_combo() {
        for combo in ComboUniverse::unrestricted().iter() {
            let profile = combo.profile(&TYPE_CHART);
            let immune = set(&profile.immunities);
            assert!(profile.weaknesses.is_disjoint(&profile.resistances), "{combo}");
            assert!(profile.weaknesses.is_disjoint(&immune), "{combo}");
            assert!(profile.resistances.is_disjoint(&immune), "{combo}");
        }
    }

    #[test]
    fn test_profile_is_deterministic() {
        for combo in ComboUniverse::standard().iter() {
            assert_eq!(combo.profile(&TYPE_CHART), combo.profile(&TYPE_CHART));
        }
    }

    #[test]
    fn test_empty_types_give_empty_profile() {
        let profile = EffectivenessProfile::of(&TYPE_CHART, &[]);
        assert_eq!(profile, EffectivenessProfile::default());
        assert_eq!(profile.uncovered().len(), 18);
    }

    #[test]
    fn test_uncovered() {
        let fire = EffectivenessProfile::of(&TYPE_CHART, &[Type::Fire]);
        let uncovered = fire.uncovered();
        assert_eq!(uncovered.len(), 14);
        assert_eq!(uncovered[0], Type::Normal);
        assert!(!uncovered.contains(&Type::Steel));
        assert!(uncovered.contains(&Type::Fire));
    }
}
