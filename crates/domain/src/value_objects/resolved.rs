//! ResolvedStats - the output of one improvement-resolution pass.
//!
//! Created fresh on every call to [`aggregate`](crate::resolution::aggregate);
//! the surrounding application re-resolves from scratch on every input change
//! instead of patching a previous result.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::base_stats::BaseStats;
use super::deck_stats::DeckStats;
use crate::ids::ActionId;

/// Whether a contribution came from a program or a quality.
///
/// Provenance labeling only: a modifier source with a rating is a program,
/// one without is a quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OriginKind {
    Program,
    Quality,
}

impl fmt::Display for OriginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OriginKind::Program => write!(f, "program"),
            OriginKind::Quality => write!(f, "quality"),
        }
    }
}

/// A single named bonus feeding a matrix action's dice pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    /// Source name as shown in formula strings (no option suffix)
    pub name: String,
    /// The value to add (positive) or subtract (negative)
    pub value: i32,
    pub origin: OriginKind,
}

impl Contribution {
    pub fn new(name: impl Into<String>, value: i32, origin: OriginKind) -> Self {
        Self {
            name: name.into(),
            value,
            origin,
        }
    }
}

/// Free text attached by a modifier source, for display beside the sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteEntry {
    pub text: String,
    /// Display name of the contributing source, option suffix included
    pub source: String,
}

/// A formula-substitution rule: wherever a matrix action's formula references
/// `from`, read `to` instead.
///
/// Scoped to formula resolution only; direct attribute/skill lookups are
/// never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

impl Replacement {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Fully resolved stat set: base values plus every active improvement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStats {
    pub attributes: HashMap<String, i32>,
    pub skills: HashMap<String, i32>,
    pub deck_stats: DeckStats,
    /// Summed targeted bonuses per action id
    pub matrix_actions: HashMap<ActionId, i32>,
    /// Per-action contribution ledger, in encounter order
    pub matrix_action_details: HashMap<ActionId, Vec<Contribution>>,
    /// Contributions that apply to every action's pool
    pub global_matrix_action_details: Vec<Contribution>,
    /// Formula-substitution rules, in source order
    pub replacements: Vec<Replacement>,
    pub notes: Vec<NoteEntry>,
}

impl ResolvedStats {
    /// Start a resolution pass from a base snapshot.
    ///
    /// The three stat containers are copied; mutating one copy never affects
    /// another, and never affects `base`.
    pub fn from_base(base: &BaseStats) -> Self {
        Self {
            attributes: base.attributes.clone(),
            skills: base.skills.clone(),
            deck_stats: base.deck_stats,
            ..Self::default()
        }
    }

    pub fn attribute(&self, name: &str) -> i32 {
        self.attributes.get(name).copied().unwrap_or(0)
    }

    pub fn skill(&self, name: &str) -> i32 {
        self.skills.get(name).copied().unwrap_or(0)
    }

    /// Contribution ledger for one action, empty when none were recorded.
    pub fn details_for(&self, id: &ActionId) -> &[Contribution] {
        self.matrix_action_details
            .get(id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub(crate) fn add_attribute(&mut self, name: &str, delta: i32) {
        *self.attributes.entry(name.to_string()).or_insert(0) += delta;
    }

    pub(crate) fn add_skill(&mut self, name: &str, delta: i32) {
        *self.skills.entry(name.to_string()).or_insert(0) += delta;
    }

    pub(crate) fn add_targeted(&mut self, id: ActionId, contribution: Contribution) {
        *self.matrix_actions.entry(id.clone()).or_insert(0) += contribution.value;
        self.matrix_action_details
            .entry(id)
            .or_default()
            .push(contribution);
    }

    pub(crate) fn add_global(&mut self, contribution: Contribution) {
        self.global_matrix_action_details.push(contribution);
    }
}
