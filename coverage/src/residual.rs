//! Coverage left over after a member's own types

use std::collections::{BTreeSet, HashSet};

use typecov_chart::{ComboUniverse, Type, TypeChart, TypeCombo, TypeTag};

use crate::aggregate::{TypeAggregate, TypeCounts};
use crate::index::ComboIndex;
use crate::member::Member;
use crate::select::{select, CoverageSelection};

/// Combos hit super effectively by at least one of `strengths`
pub fn covered_combos(strengths: &BTreeSet<Type>, weak: &TypeAggregate) -> HashSet<TypeCombo> {
    strengths
        .iter()
        .filter_map(|t| weak.get(*t))
        .flat_map(|tally| tally.combos.iter().copied())
        .collect()
}

/// Combos of `universe` that none of `strengths` hits super effectively
///
/// `weak` must be the weak aggregate of the whole universe. Universe order is
/// kept.
pub fn residual_combos(
    strengths: &BTreeSet<Type>,
    universe: &ComboUniverse,
    weak: &TypeAggregate,
) -> Vec<TypeCombo> {
    universe.difference(&covered_combos(strengths, weak))
}

/// Best attack types against `residual`, excluding the member's own types
pub fn recommend(chart: &TypeChart, member: &Member, residual: &[TypeCombo]) -> CoverageSelection {
    let index = ComboIndex::build(chart, residual);
    let counts = TypeCounts::aggregate(&index, Type::all());

    let candidates: Vec<Option<TypeTag>> = Type::all()
        .iter()
        .copied()
        .filter(|t| !member.has_type(*t))
        .map(|t| Some(TypeTag::Known(t)))
        .collect();

    select(&candidates, &counts)
}
