//! The improvement aggregator - folds modifier sources into resolved stats.

use crate::entities::{Improvement, ImprovementKind, ModifierSource};
use crate::value_objects::{BaseStats, Contribution, NoteEntry, Replacement, ResolvedStats};

use super::selection::resolve_bucket;

/// Fold an ordered collection of modifier sources into a resolved stat set.
///
/// Sources are processed in three kind-groups, replacement first, then
/// static, then choice, preserving source order within each group. The
/// replacement group must run first so its substitution rules are on record
/// before any formula lookup uses them. Within a target, deltas sum
/// unconditionally; there is no last-write-wins.
///
/// Neither `base` nor any source is mutated, and nothing here fails: sparse
/// sources simply contribute nothing.
pub fn aggregate(base: &BaseStats, sources: &[ModifierSource]) -> ResolvedStats {
    let mut resolved = ResolvedStats::from_base(base);

    let mut replacement_group = Vec::new();
    let mut static_group = Vec::new();
    let mut choice_group = Vec::new();
    for source in sources {
        match source.kind() {
            ImprovementKind::Replacement => replacement_group.push(source),
            ImprovementKind::Static => static_group.push(source),
            ImprovementKind::Choice => choice_group.push(source),
        }
    }

    for source in replacement_group {
        record_replacements(source, &mut resolved);
    }
    for source in static_group.into_iter().chain(choice_group) {
        apply_source(source, &mut resolved);
    }

    resolved
}

/// Replacement-kind sources only register substitution rules, read from the
/// default bucket; any other improvement they carry is ignored.
fn record_replacements(source: &ModifierSource, resolved: &mut ResolvedStats) {
    let Some(spec) = source.improvements.as_ref() else {
        return;
    };
    for improvement in spec.default_bucket() {
        if let Improvement::Replacement { from, to } = improvement {
            resolved
                .replacements
                .push(Replacement::new(from.clone(), to.clone()));
        }
    }
}

fn apply_source(source: &ModifierSource, resolved: &mut ResolvedStats) {
    for improvement in resolve_bucket(source) {
        match improvement {
            Improvement::Attribute { deltas } => {
                for (name, delta) in deltas {
                    resolved.add_attribute(name, *delta);
                }
            }
            Improvement::Skill { deltas } => {
                for (name, delta) in deltas {
                    resolved.add_skill(name, *delta);
                }
            }
            Improvement::DeckStat { deltas } => {
                for (stat, delta) in deltas {
                    resolved.deck_stats.add(*stat, *delta);
                }
            }
            Improvement::Notes { text } => {
                resolved.notes.push(NoteEntry {
                    text: text.clone(),
                    source: source.display_name(),
                });
            }
            Improvement::MatrixAction { action, value } => {
                let contribution = Contribution::new(&source.name, *value, source.origin());
                match action {
                    Some(id) => resolved.add_targeted(id.clone(), contribution),
                    None => resolved.add_global(contribution),
                }
            }
            // Substitution rules outside a replacement-kind source are inert
            Improvement::Replacement { .. } => {}
        }
    }
}
