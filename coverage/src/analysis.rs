//! Whole-team coverage analysis

use serde::Serialize;
use typecov_chart::{ComboUniverse, EffectivenessProfile, Type, TypeChart, TYPE_CHART};

use crate::aggregate::TypeCounts;
use crate::index::ComboIndex;
use crate::member::Member;
use crate::residual::{recommend, residual_combos};
use crate::select::{select, CoverageSelection};

/// STAB picks followed by recommended picks, as one table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageTable {
    pub stab: CoverageSelection,
    pub options: CoverageSelection,
}

impl CoverageTable {
    pub fn join(stab: CoverageSelection, options: CoverageSelection) -> Self {
        Self { stab, options }
    }

    /// Column headers: STAB type names, then recommended type names
    pub fn header(&self) -> Vec<String> {
        let mut header = self.stab.header();
        header.extend(self.options.header());
        header
    }

    /// One `[weak, resist, immune]` label triple per column
    pub fn columns(&self) -> Vec<[String; 3]> {
        self.stab
            .picks()
            .iter()
            .chain(self.options.picks())
            .map(|pick| pick.labels())
            .collect()
    }

    /// Columns transposed into weak, resist and immune rows
    pub fn rows(&self) -> [Vec<String>; 3] {
        let mut rows: [Vec<String>; 3] = Default::default();
        for column in self.columns() {
            for (row, cell) in rows.iter_mut().zip(column) {
                row.push(cell);
            }
        }
        rows
    }
}

/// Everything derived for one member
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberReport {
    pub member: Member,
    pub profile: EffectivenessProfile,
    /// Types the member's own types do not hit super effectively
    pub uncovered: Vec<Type>,
    /// Number of combos left after the member's own strengths
    pub residual: usize,
    pub coverage: CoverageTable,
}

/// Reports for a whole team, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamReport {
    pub members: Vec<MemberReport>,
    /// Types no member has innately
    pub without_stab: Vec<Type>,
}

/// Global data shared by every member analysis
///
/// Built once per run; per-member work only reads it.
#[derive(Debug, Clone)]
pub struct CoverageContext<'a> {
    chart: &'a TypeChart,
    universe: ComboUniverse,
    index: ComboIndex,
    counts: TypeCounts,
}

impl<'a> CoverageContext<'a> {
    pub fn new(chart: &'a TypeChart, universe: ComboUniverse) -> Self {
        let index = ComboIndex::build(chart, universe.combos());
        let counts = TypeCounts::aggregate(&index, Type::all());
        tracing::debug!(combos = universe.len(), "built global combo index");

        Self {
            chart,
            universe,
            index,
            counts,
        }
    }

    pub fn chart(&self) -> &'a TypeChart {
        self.chart
    }

    pub fn universe(&self) -> &ComboUniverse {
        &self.universe
    }

    pub fn index(&self) -> &ComboIndex {
        &self.index
    }

    pub fn counts(&self) -> &TypeCounts {
        &self.counts
    }

    /// Profile, STAB picks and recommendations for one member
    pub fn analyze_member(&self, member: &Member) -> MemberReport {
        let profile = member.profile(self.chart);
        let uncovered = profile.uncovered();

        let residual = residual_combos(&profile.strengths, &self.universe, &self.counts.weak);
        let stab = select(&member.slots(), &self.counts);
        let options = recommend(self.chart, member, &residual);

        tracing::debug!(
            member = %member,
            residual = residual.len(),
            options = ?options.header(),
            "analyzed member"
        );

        MemberReport {
            member: member.clone(),
            profile,
            uncovered,
            residual: residual.len(),
            coverage: CoverageTable::join(stab, options),
        }
    }

    /// Analyze every member, in order
    pub fn analyze_team(&self, members: &[Member]) -> TeamReport {
        TeamReport {
            members: members.iter().map(|m| self.analyze_member(m)).collect(),
            without_stab: types_without_stab(members),
        }
    }
}

impl CoverageContext<'static> {
    /// Stock chart over the 306 legal combos
    pub fn standard() -> Self {
        Self::new(&TYPE_CHART, ComboUniverse::standard())
    }
}

/// Types that no member has innately, in canonical order
pub fn types_without_stab(members: &[Member]) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|t| !members.iter().any(|m| m.has_type(*t)))
        .collect()
}
