use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a matrix action in the catalog.
///
/// Backed by a string because catalog files are free to use either numeric
/// or string ids; both normalize onto the string form at import time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionId(String);

impl ActionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ActionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ActionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<u64> for ActionId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}
