//! Catalog importer.
//!
//! Loads quality, program, matrix-action, and preset catalogs from JSON
//! files and converts them to our domain types. File-level problems (missing
//! file, broken JSON) are real errors; entry-level problems (unknown
//! `affects`, non-numeric values, unknown deck-stat spellings) drop the
//! single offending entry with a warning so one bad record cannot block the
//! rest of the catalog.

mod catalog_types;

use std::path::PathBuf;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;
use tokio::fs;

use deckbldr_domain::{
    ActionId, DeckPreset, DeckStat, Improvement, ImprovementKind, ImprovementSpec, MatrixAction,
    ModifierSource,
};

use catalog_types::{RawImprovementSpec, RawMatrixAction, RawModifierSource};

/// Keys on an improvement entry that never name a delta target.
const RESERVED_KEYS: [&str; 4] = ["affects", "formula", "matrixActionId", "action"];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Data file not found: {0}")]
    DataFileNotFound(PathBuf),
}

/// All loaded catalogs, with name lookups for the loadout layer.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub qualities: Vec<ModifierSource>,
    pub programs: Vec<ModifierSource>,
    pub matrix_actions: Vec<MatrixAction>,
    pub presets: Vec<DeckPreset>,
}

impl Catalog {
    pub fn quality(&self, name: &str) -> Option<&ModifierSource> {
        self.qualities.iter().find(|q| q.name == name)
    }

    pub fn program(&self, name: &str) -> Option<&ModifierSource> {
        self.programs.iter().find(|p| p.name == name)
    }

    pub fn preset(&self, name: &str) -> Option<&DeckPreset> {
        self.presets.iter().find(|p| p.name == name)
    }
}

/// Importer for the catalog data directory.
pub struct CatalogImporter {
    data_dir: PathBuf,
}

impl CatalogImporter {
    /// Create a new importer pointing at the catalog directory, e.g. `data/`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load every catalog file.
    pub async fn load_all(&self) -> Result<Catalog, CatalogError> {
        Ok(Catalog {
            qualities: self.load_qualities().await?,
            programs: self.load_programs().await?,
            matrix_actions: self.load_matrix_actions().await?,
            presets: self.load_presets().await?,
        })
    }

    pub async fn load_qualities(&self) -> Result<Vec<ModifierSource>, CatalogError> {
        let raw = self.read_file::<Vec<RawModifierSource>>("qualities.json").await?;
        Ok(raw.into_iter().map(convert_source).collect())
    }

    pub async fn load_programs(&self) -> Result<Vec<ModifierSource>, CatalogError> {
        let raw = self.read_file::<Vec<RawModifierSource>>("programs.json").await?;
        Ok(raw.into_iter().map(convert_source).collect())
    }

    pub async fn load_matrix_actions(&self) -> Result<Vec<MatrixAction>, CatalogError> {
        let raw = self
            .read_file::<Vec<RawMatrixAction>>("matrix_actions.json")
            .await?;
        Ok(raw.into_iter().filter_map(convert_matrix_action).collect())
    }

    pub async fn load_presets(&self) -> Result<Vec<DeckPreset>, CatalogError> {
        self.read_file::<Vec<DeckPreset>>("presets.json").await
    }

    async fn read_file<T: serde::de::DeserializeOwned>(
        &self,
        filename: &str,
    ) -> Result<T, CatalogError> {
        let path = self.data_dir.join(filename);
        if !path.exists() {
            return Err(CatalogError::DataFileNotFound(path));
        }
        let content = fs::read_to_string(&path).await?;
        Ok(serde_json::from_str(&content)?)
    }
}

// === Conversion to domain types ===

fn convert_source(raw: RawModifierSource) -> ModifierSource {
    let improvements = raw
        .improvements
        .map(|spec| convert_spec(spec, &raw.name));
    ModifierSource {
        name: raw.name,
        description: raw.description,
        rating: raw.rating,
        selected_option: None,
        improvements,
    }
}

fn convert_spec(raw: RawImprovementSpec, source: &str) -> ImprovementSpec {
    let kind = convert_kind(raw.kind.as_deref(), source);
    let mut spec = ImprovementSpec::new(kind);
    for (bucket_name, value) in raw.selections {
        let entries = match value.as_array() {
            Some(entries) => entries
                .iter()
                .flat_map(|entry| convert_entry(kind, entry, source))
                .collect(),
            None => {
                tracing::warn!(source, bucket = %bucket_name, "selections bucket is not an array, skipping");
                continue;
            }
        };
        spec.selections.insert(bucket_name, entries);
    }
    spec
}

fn convert_kind(kind: Option<&str>, source: &str) -> ImprovementKind {
    match kind {
        None | Some("static") => ImprovementKind::Static,
        Some("choice") => ImprovementKind::Choice,
        Some("replacement") => ImprovementKind::Replacement,
        Some(other) => {
            tracing::warn!(source, kind = other, "unknown improvement kind, treating as static");
            ImprovementKind::Static
        }
    }
}

/// Convert one raw improvement entry.
///
/// Returns zero or more typed improvements: a stat entry collapses its
/// target/value pairs into one improvement, while a matrix-action entry
/// yields one improvement per bonus value it carries.
fn convert_entry(kind: ImprovementKind, entry: &Value, source: &str) -> Vec<Improvement> {
    let Some(obj) = entry.as_object() else {
        tracing::warn!(source, "improvement entry is not an object, skipping");
        return Vec::new();
    };

    if kind == ImprovementKind::Replacement {
        return convert_replacement_entry(obj, source);
    }

    let Some(affects) = obj.get("affects").and_then(Value::as_str) else {
        tracing::warn!(source, "improvement entry has no affects tag, skipping");
        return Vec::new();
    };

    match affects {
        "attribute" => numeric_deltas(obj, source)
            .map(|deltas| vec![Improvement::Attribute { deltas }])
            .unwrap_or_default(),
        "skill" => numeric_deltas(obj, source)
            .map(|deltas| vec![Improvement::Skill { deltas }])
            .unwrap_or_default(),
        "deckStat" => deck_stat_deltas(obj, source)
            .map(|deltas| vec![Improvement::DeckStat { deltas }])
            .unwrap_or_default(),
        "notes" => obj
            .iter()
            .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
            .filter_map(|(_, value)| value.as_str())
            .map(|text| Improvement::Notes {
                text: text.to_string(),
            })
            .collect(),
        "matrixAction" => {
            let action = obj.get("matrixActionId").and_then(value_to_id);
            obj.iter()
                .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
                .filter_map(|(key, value)| match numeric(value) {
                    Some(bonus) => Some(bonus),
                    None => {
                        tracing::warn!(source, key = %key, "non-numeric matrix action bonus, skipping");
                        None
                    }
                })
                .map(|value| Improvement::MatrixAction {
                    action: action.clone(),
                    value,
                })
                .collect()
        }
        other => {
            tracing::warn!(source, affects = other, "unknown affects value, skipping entry");
            Vec::new()
        }
    }
}

/// Replacement-kind entries carry a `formula: [from, to]` pair scoped to
/// matrix-action resolution.
fn convert_replacement_entry(
    obj: &serde_json::Map<String, Value>,
    source: &str,
) -> Vec<Improvement> {
    if obj.get("affects").and_then(Value::as_str) != Some("matrixAction") {
        tracing::warn!(source, "replacement entry does not affect matrixAction, skipping");
        return Vec::new();
    }
    let pair = obj.get("formula").and_then(Value::as_array).and_then(|f| {
        match (f.first().and_then(Value::as_str), f.get(1).and_then(Value::as_str)) {
            (Some(from), Some(to)) => Some((from, to)),
            _ => None,
        }
    });
    match pair {
        Some((from, to)) => vec![Improvement::Replacement {
            from: from.to_string(),
            to: to.to_string(),
        }],
        None => {
            tracing::warn!(source, "replacement entry is missing a [from, to] formula pair, skipping");
            Vec::new()
        }
    }
}

/// Collect target/value deltas from every non-reserved key; `None` when no
/// usable delta remains.
fn numeric_deltas(
    obj: &serde_json::Map<String, Value>,
    source: &str,
) -> Option<Vec<(String, i32)>> {
    let deltas: Vec<(String, i32)> = obj
        .iter()
        .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
        .filter_map(|(key, value)| match numeric(value) {
            Some(delta) => Some((key.clone(), delta)),
            None => {
                tracing::warn!(source, key = %key, "non-numeric improvement value, skipping");
                None
            }
        })
        .collect();
    (!deltas.is_empty()).then_some(deltas)
}

/// Like [`numeric_deltas`], but target keys must normalize onto the
/// canonical deck stats.
fn deck_stat_deltas(
    obj: &serde_json::Map<String, Value>,
    source: &str,
) -> Option<Vec<(DeckStat, i32)>> {
    let deltas: Vec<(DeckStat, i32)> = obj
        .iter()
        .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
        .filter_map(|(key, value)| {
            let stat = match DeckStat::from_str(key) {
                Ok(stat) => stat,
                Err(_) => {
                    tracing::warn!(source, key = %key, "unknown deck stat target, skipping");
                    return None;
                }
            };
            match numeric(value) {
                Some(delta) => Some((stat, delta)),
                None => {
                    tracing::warn!(source, key = %key, "non-numeric improvement value, skipping");
                    None
                }
            }
        })
        .collect();
    (!deltas.is_empty()).then_some(deltas)
}

fn numeric(value: &Value) -> Option<i32> {
    value.as_i64().and_then(|v| i32::try_from(v).ok())
}

/// Catalog ids may be numbers or strings; both normalize to the string form.
fn value_to_id(value: &Value) -> Option<ActionId> {
    match value {
        Value::String(s) => Some(ActionId::new(s.clone())),
        Value::Number(n) => Some(ActionId::new(n.to_string())),
        _ => None,
    }
}

fn convert_matrix_action(raw: RawMatrixAction) -> Option<MatrixAction> {
    let Some(id) = value_to_id(&raw.id) else {
        tracing::warn!(name = %raw.name, "matrix action has an unusable id, skipping");
        return None;
    };
    let marks = raw.marks.and_then(|m| match m {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    });
    Some(MatrixAction {
        id,
        name: raw.name,
        description: raw.description,
        action: raw.action,
        marks,
        limit: raw.limit,
        formula: raw.formula,
        opposed_roll: raw.opposed_roll,
        is_active: raw.is_active,
    })
}
