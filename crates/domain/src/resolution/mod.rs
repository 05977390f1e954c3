//! The improvement-resolution engine.
//!
//! A full resolution pass is `aggregate` over the active sources followed by
//! `compute_action_row` per catalog action. Both are pure functions of their
//! inputs; the surrounding application re-runs the whole pipeline on every
//! input change rather than patching previous results.

mod aggregate;
mod formula;
mod pool;
mod selection;

pub use aggregate::aggregate;
pub use formula::resolve_formula;
pub use pool::{compute_action_row, format_component_name, ActionRow};
pub use selection::resolve_bucket;
