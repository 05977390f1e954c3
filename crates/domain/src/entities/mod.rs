//! Catalog entities consumed by the resolution engine.

mod deck_preset;
mod matrix_action;
mod modifier_source;

pub use deck_preset::{DeckPreset, DEFAULT_PROGRAM_SLOTS};
pub use matrix_action::MatrixAction;
pub use modifier_source::{
    Improvement, ImprovementKind, ImprovementSpec, ModifierSource, DEFAULT_BUCKET,
};
