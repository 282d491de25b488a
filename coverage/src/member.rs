//! Team members

use std::fmt;

use serde::Serialize;
use typecov_chart::{EffectivenessProfile, Type, TypeChart, TypeTag};

/// A team member, described by one or two type tags
///
/// A repeated tag collapses to a single-type member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Member {
    tags: Vec<TypeTag>,
}

impl Member {
    pub fn new(primary: TypeTag, secondary: Option<TypeTag>) -> Self {
        let secondary = secondary.filter(|s| *s != primary);
        Self {
            tags: std::iter::once(primary).chain(secondary).collect(),
        }
    }

    pub fn single(t: Type) -> Self {
        Self::new(t.into(), None)
    }

    pub fn pair(first: Type, second: Type) -> Self {
        Self::new(first.into(), Some(second.into()))
    }

    pub fn tags(&self) -> &[TypeTag] {
        &self.tags
    }

    /// Tags that name a chart type
    pub fn known_types(&self) -> Vec<Type> {
        self.tags.iter().filter_map(TypeTag::known).collect()
    }

    /// Tags that name no chart type
    pub fn unknown_tags(&self) -> impl Iterator<Item = &str> {
        self.tags
            .iter()
            .filter(|tag| tag.known().is_none())
            .map(TypeTag::name)
    }

    /// Whether the member innately has `t`
    pub fn has_type(&self, t: Type) -> bool {
        self.tags.contains(&TypeTag::Known(t))
    }

    /// Both type slots; a single-type member has an empty second slot
    pub fn slots(&self) -> [Option<TypeTag>; 2] {
        [self.tags.first().cloned(), self.tags.get(1).cloned()]
    }

    /// Profile of the member as a defender; unknown tags contribute nothing
    pub fn profile(&self, chart: &TypeChart) -> EffectivenessProfile {
        EffectivenessProfile::of(chart, &self.known_types())
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.tags.iter().map(TypeTag::name).collect();
        f.write_str(&names.join(" "))
    }
}
