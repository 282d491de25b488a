//! Static type interaction tables

use crate::types::Type;

use Type::*;

/// The four ways one type can relate to another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Types this type hits super effectively (offensive)
    Strength,
    /// Types that hit this type super effectively
    Weakness,
    /// Types whose damage this type resists
    Resistance,
    /// Types whose damage this type takes none of
    Immunity,
}

type Table = [&'static [Type]; Type::COUNT];

/// Relation tables indexed by [`Type::index`]
///
/// Row `t` of each table lists the types related to `t`; for the defensive
/// tables `t` is the defender.
#[derive(Debug)]
pub struct TypeChart {
    strengths: Table,
    weaknesses: Table,
    resistances: Table,
    immunities: Table,
}

impl TypeChart {
    /// Types related to `t` in the given way
    pub fn related(&self, relation: Relation, t: Type) -> &'static [Type] {
        let table = match relation {
            Relation::Strength => &self.strengths,
            Relation::Weakness => &self.weaknesses,
            Relation::Resistance => &self.resistances,
            Relation::Immunity => &self.immunities,
        };
        table[t.index()]
    }

    pub fn strengths(&self, t: Type) -> &'static [Type] {
        self.related(Relation::Strength, t)
    }

    pub fn weaknesses(&self, t: Type) -> &'static [Type] {
        self.related(Relation::Weakness, t)
    }

    pub fn resistances(&self, t: Type) -> &'static [Type] {
        self.related(Relation::Resistance, t)
    }

    pub fn immunities(&self, t: Type) -> &'static [Type] {
        self.related(Relation::Immunity, t)
    }
}

/// Gen 6+ chart
///
/// Order: Normal, Fire, Water, Electric, Grass, Ice, Fighting, Poison, Ground,
///        Flying, Psychic, Bug, Rock, Ghost, Dragon, Dark, Steel, Fairy
#[rustfmt::skip]
pub static TYPE_CHART: TypeChart = TypeChart {
    strengths: [
        &[],
        &[Grass, Ice, Bug, Steel],
        &[Fire, Ground, Rock],
        &[Water, Flying],
        &[Water, Ground, Rock],
        &[Grass, Ground, Flying, Dragon],
        &[Normal, Ice, Rock, Dark, Steel],
        &[Grass, Fairy],
        &[Fire, Electric, Poison, Rock, Steel],
        &[Grass, Fighting, Bug],
        &[Fighting, Poison],
        &[Grass, Psychic, Dark],
        &[Fire, Ice, Flying, Bug],
        &[Psychic, Ghost],
        &[Dragon],
        &[Psychic, Ghost],
        &[Ice, Rock, Fairy],
        &[Fighting, Dragon, Dark],
    ],
    weaknesses: [
        &[Fighting],
        &[Water, Rock, Ground],
        &[Electric, Grass],
        &[Ground],
        &[Fire, Ice, Poison, Flying, Bug],
        &[Fire, Fighting, Rock, Steel],
        &[Flying, Psychic, Fairy],
        &[Ground, Psychic],
        &[Water, Ice, Grass],
        &[Electric, Ice, Rock],
        &[Bug, Ghost, Dark],
        &[Fire, Flying, Rock],
        &[Water, Grass, Fighting, Ground, Steel],
        &[Ghost, Dark],
        &[Ice, Dragon, Fairy],
        &[Fighting, Bug, Fairy],
        &[Fire, Fighting, Ground],
        &[Poison, Steel],
    ],
    resistances: [
        &[],
        &[Fire, Grass, Ice, Bug, Steel, Fairy],
        &[Fire, Water, Ice, Steel],
        &[Electric, Flying, Steel],
        &[Water, Electric, Grass, Ground],
        &[Ice],
        &[Bug, Rock, Dark],
        &[Fighting, Poison, Bug, Fairy],
        &[Poison, Rock],
        &[Fighting, Bug, Grass],
        &[Fighting, Psychic],
        &[Fighting, Ground, Grass],
        &[Normal, Fire, Poison, Flying],
        &[Poison, Bug],
        &[Fire, Water, Electric, Grass],
        &[Ghost, Dark],
        &[Normal, Grass, Ice, Psychic, Flying, Bug, Rock, Dragon, Steel, Fairy],
        &[Fighting, Bug, Dark],
    ],
    immunities: [
        &[Ghost],
        &[],
        &[],
        &[],
        &[],
        &[],
        &[],
        &[],
        &[Electric],
        &[Ground],
        &[],
        &[],
        &[],
        &[Normal, Fighting],
        &[],
        &[Psychic],
        &[Poison],
        &[Dragon],
    ],
};
