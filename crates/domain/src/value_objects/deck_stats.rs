//! DeckStat and DeckStats - the four-stat array of a cyberdeck
//!
//! Catalog data spells deck stat names inconsistently (`"Attack"`, `"attack"`,
//! `"Data Processing"`, `"dataProcessing"`); everything normalizes onto the
//! four canonical variants here before aggregation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The four deck stats of the attribute array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeckStat {
    Attack,
    Sleaze,
    DataProcessing,
    Firewall,
}

impl DeckStat {
    /// All stats in canonical display order.
    pub const ALL: [DeckStat; 4] = [
        DeckStat::Attack,
        DeckStat::Sleaze,
        DeckStat::DataProcessing,
        DeckStat::Firewall,
    ];

    /// Canonical catalog spelling (`dataProcessing`, not `Data Processing`).
    pub fn key(&self) -> &'static str {
        match self {
            DeckStat::Attack => "attack",
            DeckStat::Sleaze => "sleaze",
            DeckStat::DataProcessing => "dataProcessing",
            DeckStat::Firewall => "firewall",
        }
    }

    /// Human-readable label for table output.
    pub fn label(&self) -> &'static str {
        match self {
            DeckStat::Attack => "Attack",
            DeckStat::Sleaze => "Sleaze",
            DeckStat::DataProcessing => "Data Processing",
            DeckStat::Firewall => "Firewall",
        }
    }
}

impl fmt::Display for DeckStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for DeckStat {
    type Err = DomainError;

    /// Parses any case/spacing variant of a deck stat name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(|c| c.to_lowercase())
            .collect();
        match normalized.as_str() {
            "attack" => Ok(DeckStat::Attack),
            "sleaze" => Ok(DeckStat::Sleaze),
            "dataprocessing" => Ok(DeckStat::DataProcessing),
            "firewall" => Ok(DeckStat::Firewall),
            _ => Err(DomainError::parse(format!("Unknown deck stat: {}", s))),
        }
    }
}

/// One value per deck stat.
///
/// This is an immutable-by-convention value object; the aggregator clones it
/// out of `BaseStats` and mutates the clone, never the original.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckStats {
    #[serde(default)]
    pub attack: i32,
    #[serde(default)]
    pub sleaze: i32,
    #[serde(default)]
    pub data_processing: i32,
    #[serde(default)]
    pub firewall: i32,
}

impl DeckStats {
    pub fn new(attack: i32, sleaze: i32, data_processing: i32, firewall: i32) -> Self {
        Self {
            attack,
            sleaze,
            data_processing,
            firewall,
        }
    }

    pub fn get(&self, stat: DeckStat) -> i32 {
        match stat {
            DeckStat::Attack => self.attack,
            DeckStat::Sleaze => self.sleaze,
            DeckStat::DataProcessing => self.data_processing,
            DeckStat::Firewall => self.firewall,
        }
    }

    pub fn set(&mut self, stat: DeckStat, value: i32) {
        match stat {
            DeckStat::Attack => self.attack = value,
            DeckStat::Sleaze => self.sleaze = value,
            DeckStat::DataProcessing => self.data_processing = value,
            DeckStat::Firewall => self.firewall = value,
        }
    }

    pub fn add(&mut self, stat: DeckStat, delta: i32) {
        self.set(stat, self.get(stat) + delta);
    }

    /// Exchange the values of two stats (deck attribute-array reassignment).
    pub fn swap(&mut self, a: DeckStat, b: DeckStat) {
        if a == b {
            return;
        }
        let tmp = self.get(a);
        self.set(a, self.get(b));
        self.set(b, tmp);
    }

    /// Iterate `(stat, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (DeckStat, i32)> + '_ {
        DeckStat::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_stat_parses_spelling_variants() {
        assert_eq!("Attack".parse::<DeckStat>(), Ok(DeckStat::Attack));
        assert_eq!("attack".parse::<DeckStat>(), Ok(DeckStat::Attack));
        assert_eq!(
            "Data Processing".parse::<DeckStat>(),
            Ok(DeckStat::DataProcessing)
        );
        assert_eq!(
            "dataProcessing".parse::<DeckStat>(),
            Ok(DeckStat::DataProcessing)
        );
        assert_eq!("data_processing".parse::<DeckStat>(), Ok(DeckStat::DataProcessing));
        assert_eq!("FIREWALL".parse::<DeckStat>(), Ok(DeckStat::Firewall));
    }

    #[test]
    fn deck_stat_rejects_unknown_names() {
        assert!(matches!(
            "armor".parse::<DeckStat>(),
            Err(DomainError::Parse(_))
        ));
    }

    #[test]
    fn get_set_add_round_trip() {
        let mut stats = DeckStats::new(4, 3, 2, 1);
        assert_eq!(stats.get(DeckStat::Attack), 4);
        stats.add(DeckStat::Sleaze, 2);
        assert_eq!(stats.get(DeckStat::Sleaze), 5);
        stats.set(DeckStat::Firewall, 7);
        assert_eq!(stats.firewall, 7);
    }

    #[test]
    fn swap_exchanges_exactly_two_values() {
        let mut stats = DeckStats::new(4, 3, 2, 1);
        stats.swap(DeckStat::Attack, DeckStat::DataProcessing);
        assert_eq!(stats.attack, 2);
        assert_eq!(stats.data_processing, 4);
        assert_eq!(stats.sleaze, 3);
        assert_eq!(stats.firewall, 1);
    }

    #[test]
    fn swap_with_self_is_identity() {
        let mut stats = DeckStats::new(4, 3, 2, 1);
        stats.swap(DeckStat::Sleaze, DeckStat::Sleaze);
        assert_eq!(stats, DeckStats::new(4, 3, 2, 1));
    }

    #[test]
    fn serde_uses_camel_case_keys() {
        let stats = DeckStats::new(1, 2, 3, 4);
        let json = serde_json::to_value(stats).expect("serializes");
        assert_eq!(json["dataProcessing"], 3);
        let back: DeckStats = serde_json::from_value(json).expect("deserializes");
        assert_eq!(back, stats);
    }
}
