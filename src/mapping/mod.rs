pub mod entry;
pub mod search;
pub mod summary;

pub use entry::*;
pub use search::*;
pub use summary::*;

use ahash::AHashMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::units::is_volumetric;

/// Maps flow display names to external inventory targets.
///
/// Deserialization accepts both entry shapes (legacy pair and structured
/// record) and upgrades them immediately, so in memory every entry is a
/// [`MappingEntry`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MappingTable {
    entries: AHashMap<String, MappingEntry>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a mapping table from its JSON representation.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn insert(&mut self, flow: impl Into<String>, entry: MappingEntry) {
        self.entries.insert(flow.into(), entry);
    }

    pub fn get(&self, flow: &str) -> Option<&MappingEntry> {
        self.entries.get(flow)
    }

    pub fn remove(&mut self, flow: &str) -> Option<MappingEntry> {
        self.entries.remove(flow)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MappingEntry)> {
        self.entries.iter().map(|(flow, entry)| (flow.as_str(), entry))
    }

    /// Flows mapped to a volumetric target unit without a usable density.
    ///
    /// These are the flows that will degrade to density warnings at build
    /// time. Sorted by flow name for stable output.
    pub fn flows_missing_density(&self) -> Vec<&str> {
        let mut missing: Vec<&str> = self
            .entries
            .iter()
            .filter(|(_, entry)| {
                entry.unit.as_deref().is_some_and(is_volumetric)
                    && !entry.density.is_some_and(|d| d > 0.0)
            })
            .map(|(flow, _)| flow.as_str())
            .collect();
        missing.sort_unstable();
        missing
    }
}

impl<'de> Deserialize<'de> for MappingTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = AHashMap::<String, RawMappingEntry>::deserialize(deserializer)?;
        Ok(Self {
            entries: raw
                .into_iter()
                .map(|(flow, entry)| (flow, entry.upgrade()))
                .collect(),
        })
    }
}

impl FromIterator<(String, MappingEntry)> for MappingTable {
    fn from_iter<I: IntoIterator<Item = (String, MappingEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
