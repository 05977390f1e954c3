//! Deck sheet use case - the full resolve-then-tabulate pipeline.
//!
//! Every call recomputes from scratch: collect the active sources, aggregate
//! them over the loadout's base stats, and compute one row per active matrix
//! action. Catalogs are small, so re-running the whole pipeline on each
//! input change is cheaper than any caching scheme would be to maintain.

use std::collections::HashMap;
use std::sync::Arc;

use deckbldr_domain::{aggregate, compute_action_row, DeckStats, NoteEntry};

use crate::infrastructure::Catalog;
use crate::use_cases::loadout::Loadout;

/// One rendered row of the matrix action table.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    pub name: String,
    pub description: Option<String>,
    pub action: Option<String>,
    pub marks: Option<String>,
    pub limit: String,
    pub formula: String,
    pub opposed_roll: Option<String>,
    pub total: i32,
}

/// A fully resolved deck sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckSheet {
    /// Deck stats after improvements
    pub deck_stats: DeckStats,
    pub rows: Vec<SheetRow>,
    pub notes: Vec<NoteEntry>,
}

/// Container for deck sheet use cases.
pub struct SheetUseCases {
    catalog: Arc<Catalog>,
}

impl SheetUseCases {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Build the sheet for a loadout.
    pub fn build(&self, loadout: &Loadout) -> DeckSheet {
        let sources = loadout.collect_sources(&self.catalog);
        let resolved = aggregate(&loadout.base_stats(), &sources);

        // Legacy direct-bonus path: nothing feeds it here, the detail
        // ledgers carry every bonus.
        let direct_bonuses = HashMap::new();

        let rows = self
            .catalog
            .matrix_actions
            .iter()
            .filter(|action| action.is_active)
            .map(|action| {
                let row = compute_action_row(action, &resolved, &direct_bonuses);
                SheetRow {
                    name: action.name.clone(),
                    description: action.description.clone(),
                    action: action.action.clone(),
                    marks: action.marks.clone(),
                    limit: row.limit_display,
                    formula: row.formula_display,
                    opposed_roll: action.opposed_roll.clone(),
                    total: row.total,
                }
            })
            .collect();

        DeckSheet {
            deck_stats: resolved.deck_stats,
            rows,
            notes: resolved.notes,
        }
    }
}
