pub mod entities;
pub mod error;
pub mod ids;
pub mod resolution;
pub mod value_objects;

pub use entities::{
    DeckPreset, Improvement, ImprovementKind, ImprovementSpec, MatrixAction, ModifierSource,
    DEFAULT_BUCKET, DEFAULT_PROGRAM_SLOTS,
};
pub use error::DomainError;
pub use ids::ActionId;
pub use resolution::{
    aggregate, compute_action_row, format_component_name, resolve_bucket, resolve_formula,
    ActionRow,
};
pub use value_objects::{
    BaseStats, Contribution, DeckStat, DeckStats, NoteEntry, OriginKind, Replacement,
    ResolvedStats,
};
