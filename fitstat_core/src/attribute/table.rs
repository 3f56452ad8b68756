//! AttributeTable - In-memory attribute values and JSON snapshots

use super::{AttributeId, AttributeSource};
use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Resolved attribute values keyed by numeric ID
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeTable {
    values: BTreeMap<u32, f64>,
}

impl AttributeTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, returning the previous value
    pub fn insert(&mut self, id: AttributeId, value: f64) -> Option<f64> {
        self.values.insert(id.0, value)
    }

    /// Remove an attribute, returning its value
    pub fn remove(&mut self, id: AttributeId) -> Option<f64> {
        self.values.remove(&id.0)
    }

    pub fn get(&self, id: AttributeId) -> Option<f64> {
        self.values.get(&id.0).copied()
    }

    pub fn contains(&self, id: AttributeId) -> bool {
        self.values.contains_key(&id.0)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate attributes in ascending ID order
    pub fn iter(&self) -> impl Iterator<Item = (AttributeId, f64)> + '_ {
        self.values.iter().map(|(id, value)| (AttributeId(*id), *value))
    }
}

impl AttributeSource for AttributeTable {
    fn lookup(&self, id: AttributeId) -> Option<f64> {
        self.get(id)
    }
}

impl FromIterator<(AttributeId, f64)> for AttributeTable {
    fn from_iter<I: IntoIterator<Item = (AttributeId, f64)>>(iter: I) -> Self {
        AttributeTable {
            values: iter.into_iter().map(|(id, value)| (id.0, value)).collect(),
        }
    }
}

/// Attribute table exported by a fitting engine after resolving a fit.
///
/// ```json
/// { "name": "Raven", "attributes": { "4": 1.0e9, "70": 3.0 } }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributeSnapshot {
    /// Ship or fit label, for display only
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub attributes: AttributeTable,
}

impl AttributeSnapshot {
    /// Load a snapshot from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a snapshot from a JSON string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let snapshot: AttributeSnapshot = serde_json::from_str(content)?;
        if let Some((id, value)) = snapshot.attributes.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::ValidationError(format!(
                "attribute {} has non-finite value {}",
                id, value
            )));
        }
        tracing::debug!(
            name = snapshot.name.as_deref().unwrap_or("<unnamed>"),
            attributes = snapshot.attributes.len(),
            "loaded attribute snapshot"
        );
        Ok(snapshot)
    }

    /// Display label, falling back to a placeholder
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed fit")
    }
}
