//! Modifier sources - qualities and programs that alter stats.
//!
//! A source carries an improvement specification: one or more named buckets
//! of improvement entries. Static sources always use the `"default"` bucket;
//! choice-kind sources switch buckets based on an externally chosen option;
//! replacement-kind sources rewrite which formula components derived actions
//! read from.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ids::ActionId;
use crate::value_objects::{DeckStat, OriginKind};

/// Name of the bucket every improvement spec falls back to.
pub const DEFAULT_BUCKET: &str = "default";

/// How a source's improvement buckets are selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImprovementKind {
    /// Always the default bucket
    #[default]
    Static,
    /// Bucket keyed by the source's selected option
    Choice,
    /// Default bucket holds formula-substitution rules
    Replacement,
}

/// One effect entry within a modifier source's specification.
///
/// Explicit variants per target, each carrying only its payload; catalog
/// conversion maps the loosely-typed wire entries onto these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "affects", rename_all = "camelCase")]
pub enum Improvement {
    /// Deltas added to named attributes
    Attribute { deltas: Vec<(String, i32)> },
    /// Deltas added to named skills
    Skill { deltas: Vec<(String, i32)> },
    /// Deltas added to canonical deck stats
    DeckStat { deltas: Vec<(DeckStat, i32)> },
    /// Dice-pool bonus for one action, or for all actions when `action` is
    /// absent
    MatrixAction {
        action: Option<ActionId>,
        value: i32,
    },
    /// Free text shown beside the sheet
    Notes { text: String },
    /// Formula substitution; only meaningful inside a replacement-kind spec
    Replacement { from: String, to: String },
}

/// A source's improvement buckets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementSpec {
    #[serde(default)]
    pub kind: ImprovementKind,
    /// Bucket name to entries; `"default"` plus option-named buckets for
    /// choice-kind specs
    #[serde(default)]
    pub selections: HashMap<String, Vec<Improvement>>,
}

impl ImprovementSpec {
    pub fn new(kind: ImprovementKind) -> Self {
        Self {
            kind,
            selections: HashMap::new(),
        }
    }

    pub fn with_bucket(
        mut self,
        name: impl Into<String>,
        entries: Vec<Improvement>,
    ) -> Self {
        self.selections.insert(name.into(), entries);
        self
    }

    pub fn bucket(&self, name: &str) -> Option<&[Improvement]> {
        self.selections.get(name).map(|v| v.as_slice())
    }

    /// The `"default"` bucket, empty when absent.
    pub fn default_bucket(&self) -> &[Improvement] {
        self.bucket(DEFAULT_BUCKET).unwrap_or(&[])
    }

    /// Option names beyond the default bucket, for choice-kind UIs.
    pub fn option_names(&self) -> Vec<&str> {
        self.selections
            .keys()
            .map(|k| k.as_str())
            .filter(|k| *k != DEFAULT_BUCKET)
            .collect()
    }
}

/// A quality or program that can alter stats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierSource {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Present on programs, absent on qualities
    #[serde(default)]
    pub rating: Option<i32>,
    /// Chosen bucket key, set externally when the source is choice-kind
    #[serde(default)]
    pub selected_option: Option<String>,
    #[serde(default)]
    pub improvements: Option<ImprovementSpec>,
}

impl ModifierSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_rating(mut self, rating: i32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_improvements(mut self, spec: ImprovementSpec) -> Self {
        self.improvements = Some(spec);
        self
    }

    pub fn with_selected_option(mut self, option: impl Into<String>) -> Self {
        self.selected_option = Some(option.into());
        self
    }

    /// The spec's kind, `Static` when no spec is present.
    pub fn kind(&self) -> ImprovementKind {
        self.improvements
            .as_ref()
            .map(|spec| spec.kind)
            .unwrap_or_default()
    }

    /// Program when rated, quality otherwise.
    pub fn origin(&self) -> OriginKind {
        if self.rating.is_some() {
            OriginKind::Program
        } else {
            OriginKind::Quality
        }
    }

    /// Name with the active option appended, for note attribution.
    pub fn display_name(&self) -> String {
        match &self.selected_option {
            Some(option) => format!("{} ({})", self.name, option),
            None => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_defaults_to_static_without_spec() {
        let source = ModifierSource::new("Analytical Mind");
        assert_eq!(source.kind(), ImprovementKind::Static);
    }

    #[test]
    fn origin_follows_rating_presence() {
        assert_eq!(ModifierSource::new("Codeslinger").origin(), OriginKind::Quality);
        assert_eq!(
            ModifierSource::new("Exploit").with_rating(4).origin(),
            OriginKind::Program
        );
    }

    #[test]
    fn display_name_appends_active_option_only() {
        let plain = ModifierSource::new("Codeslinger");
        assert_eq!(plain.display_name(), "Codeslinger");

        let chosen = plain.with_selected_option("Brute Force");
        assert_eq!(chosen.display_name(), "Codeslinger (Brute Force)");
    }

    #[test]
    fn default_bucket_is_empty_when_absent() {
        let spec = ImprovementSpec::new(ImprovementKind::Choice)
            .with_bucket("Option A", vec![Improvement::Skill {
                deltas: vec![("computer".to_string(), 2)],
            }]);
        assert!(spec.default_bucket().is_empty());
        assert_eq!(spec.option_names(), vec!["Option A"]);
    }
}
