//! Deck presets - named factory configurations of the deck stat array.

use serde::{Deserialize, Serialize};

use crate::value_objects::DeckStats;

/// Slot count used when a preset names neither `programSlots` nor `rating`.
pub const DEFAULT_PROGRAM_SLOTS: u32 = 6;

/// A factory deck configuration from the preset catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckPreset {
    pub name: String,
    pub attack: i32,
    pub sleaze: i32,
    pub data_processing: i32,
    pub firewall: i32,
    #[serde(default)]
    pub program_slots: Option<u32>,
    #[serde(default)]
    pub rating: Option<u32>,
}

impl DeckPreset {
    /// The preset's stat array as a `DeckStats` value.
    pub fn deck_stats(&self) -> DeckStats {
        DeckStats::new(self.attack, self.sleaze, self.data_processing, self.firewall)
    }

    /// Number of program slots this deck offers.
    ///
    /// Older preset data carries only a deck rating, which doubles as the
    /// slot count.
    pub fn slot_count(&self) -> u32 {
        self.program_slots
            .or(self.rating)
            .unwrap_or(DEFAULT_PROGRAM_SLOTS)
    }
}
