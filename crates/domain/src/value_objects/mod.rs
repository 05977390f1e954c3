//! Value objects for the stat system.

mod base_stats;
mod deck_stats;
mod resolved;

pub use base_stats::BaseStats;
pub use deck_stats::{DeckStat, DeckStats};
pub use resolved::{Contribution, NoteEntry, OriginKind, Replacement, ResolvedStats};
