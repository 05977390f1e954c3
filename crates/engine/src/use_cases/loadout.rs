//! Loadout - the snapshot of which modifier sources are active.
//!
//! The engine core never decides what is active; this type is the plain,
//! copyable snapshot of that state, assembled by whatever front end drives
//! the pipeline. Collecting sources from it is read-only against the
//! catalog: sources are cloned and the chosen option injected on the clone.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use deckbldr_domain::{
    BaseStats, DeckPreset, DeckStat, DeckStats, ImprovementKind, ModifierSource,
};

use crate::infrastructure::Catalog;

/// Active-source selection plus base stat inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loadout {
    /// Name of the deck preset the stats started from
    #[serde(default)]
    pub preset: Option<String>,
    /// Current deck stat array, including any reassignment swaps
    #[serde(default)]
    pub deck_stats: DeckStats,
    #[serde(default)]
    pub attributes: HashMap<String, i32>,
    #[serde(default)]
    pub skills: HashMap<String, i32>,
    /// Names of checked qualities, in selection order
    #[serde(default)]
    pub qualities: Vec<String>,
    /// Program slots; `None` is an empty slot
    #[serde(default)]
    pub program_slots: Vec<Option<String>>,
    /// Chosen option per choice-kind quality
    #[serde(default)]
    pub quality_options: HashMap<String, String>,
    /// Chosen option per choice-kind program
    #[serde(default)]
    pub program_options: HashMap<String, String>,
}

impl Loadout {
    /// Reset deck stats and program slots from a preset (factory reset).
    pub fn apply_preset(&mut self, preset: &DeckPreset) {
        self.preset = Some(preset.name.clone());
        self.deck_stats = preset.deck_stats();
        self.program_slots = vec![None; preset.slot_count() as usize];
    }

    /// Fill in preset defaults without clobbering explicit values: deck
    /// stats only when none were given, slot sizing only when the slot list
    /// is empty.
    pub fn apply_preset_defaults(&mut self, preset: &DeckPreset) {
        if self.deck_stats == DeckStats::default() {
            self.deck_stats = preset.deck_stats();
        }
        if self.program_slots.is_empty() {
            self.program_slots = vec![None; preset.slot_count() as usize];
        }
    }

    /// Exchange two deck stat values (attribute-array reassignment).
    pub fn swap_deck_stats(&mut self, a: DeckStat, b: DeckStat) {
        self.deck_stats.swap(a, b);
    }

    /// The base snapshot handed to the aggregator.
    pub fn base_stats(&self) -> BaseStats {
        BaseStats {
            attributes: self.attributes.clone(),
            skills: self.skills.clone(),
            deck_stats: self.deck_stats,
        }
    }

    /// Collect the active modifier sources: checked qualities first, then
    /// occupied program slots in slot order. Names the catalog does not know
    /// are skipped with a warning. Choice selections are injected on cloned
    /// sources only when the source actually is choice-kind.
    pub fn collect_sources(&self, catalog: &Catalog) -> Vec<ModifierSource> {
        let mut sources = Vec::new();

        for name in &self.qualities {
            match catalog.quality(name) {
                Some(quality) => {
                    sources.push(with_option(quality, self.quality_options.get(name)))
                }
                None => tracing::warn!(quality = %name, "loadout references unknown quality, skipping"),
            }
        }

        for name in self.program_slots.iter().flatten() {
            match catalog.program(name) {
                Some(program) => {
                    sources.push(with_option(program, self.program_options.get(name)))
                }
                None => tracing::warn!(program = %name, "loadout references unknown program, skipping"),
            }
        }

        sources
    }
}

fn with_option(source: &ModifierSource, option: Option<&String>) -> ModifierSource {
    let mut cloned = source.clone();
    if cloned.kind() == ImprovementKind::Choice {
        cloned.selected_option = option.cloned();
    }
    cloned
}
