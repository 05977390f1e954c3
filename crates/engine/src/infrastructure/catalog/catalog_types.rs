//! Type definitions for the catalog JSON format.
//!
//! These types mirror the catalog files (`qualities.json`, `programs.json`,
//! `matrix_actions.json`, `presets.json`) as they exist on disk. They are
//! used for deserialization and then converted to our domain types; the
//! conversion is where lenient handling of sparse or malformed entries
//! lives.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// A quality or program record as stored in the catalog.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawModifierSource {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub improvements: Option<RawImprovementSpec>,
}

/// An improvement specification as stored in the catalog.
///
/// Buckets are kept as raw JSON values: a malformed bucket (non-array) must
/// drop only itself, not the whole file.
#[derive(Debug, Deserialize)]
pub struct RawImprovementSpec {
    /// `"static"`, `"choice"`, or `"replacement"`; anything else falls back
    /// to static
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub selections: HashMap<String, Value>,
}

/// A matrix action record as stored in the catalog.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMatrixAction {
    /// Numeric or string id; both normalize onto the string form
    pub id: Value,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub marks: Option<Value>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub formula: Vec<String>,
    #[serde(default)]
    pub opposed_roll: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}
