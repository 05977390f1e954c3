//! BaseStats - the caller-owned input snapshot of unmodified stats.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::deck_stats::DeckStats;

/// Base attribute, skill, and deck-stat values before any improvements.
///
/// Owned by the caller and never mutated by the resolution engine; the
/// aggregator copies the three containers into its result and works on the
/// copies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseStats {
    /// Map of attribute name to base value
    #[serde(default)]
    pub attributes: HashMap<String, i32>,
    /// Map of skill name to base value
    #[serde(default)]
    pub skills: HashMap<String, i32>,
    /// The deck's attribute array
    #[serde(default)]
    pub deck_stats: DeckStats,
}

impl BaseStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: i32) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    pub fn with_skill(mut self, name: impl Into<String>, value: i32) -> Self {
        self.skills.insert(name.into(), value);
        self
    }

    pub fn with_deck_stats(mut self, deck_stats: DeckStats) -> Self {
        self.deck_stats = deck_stats;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::DeckStat;

    #[test]
    fn builder_sets_all_three_containers() {
        let base = BaseStats::new()
            .with_attribute("logic", 4)
            .with_skill("hacking", 3)
            .with_deck_stats(DeckStats::new(2, 3, 4, 5));

        assert_eq!(base.attributes.get("logic"), Some(&4));
        assert_eq!(base.skills.get("hacking"), Some(&3));
        assert_eq!(base.deck_stats.get(DeckStat::Attack), 2);
    }
}
