//! Matrix actions - catalog-defined derived actions.

use serde::{Deserialize, Serialize};

use crate::ids::ActionId;

/// A read-only catalog entry describing one derived action.
///
/// `formula` carries the skill key first, the attribute key second; either
/// may be absent in sparse catalog data. `limit` names a deck stat in the
/// catalog's own spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixAction {
    pub id: ActionId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Action economy label (e.g. "Complex", "Simple")
    #[serde(default)]
    pub action: Option<String>,
    /// Marks required or placed
    #[serde(default)]
    pub marks: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    /// Skill key, then attribute key
    #[serde(default)]
    pub formula: Vec<String>,
    #[serde(default)]
    pub opposed_roll: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl MatrixAction {
    pub fn new(id: impl Into<ActionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            action: None,
            marks: None,
            limit: None,
            formula: Vec::new(),
            opposed_roll: None,
            is_active: true,
        }
    }

    pub fn with_formula(mut self, skill: impl Into<String>, attribute: impl Into<String>) -> Self {
        self.formula = vec![skill.into(), attribute.into()];
        self
    }

    pub fn with_limit(mut self, limit: impl Into<String>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    /// Raw skill component, before replacements. Empty when absent.
    pub fn skill_key(&self) -> &str {
        self.formula.first().map(|s| s.as_str()).unwrap_or("")
    }

    /// Raw attribute component, before replacements. Empty when absent.
    pub fn attribute_key(&self) -> &str {
        self.formula.get(1).map(|s| s.as_str()).unwrap_or("")
    }
}
