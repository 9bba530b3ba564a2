use serde::{Deserialize, Deserializer, Serialize};

use crate::store::NodeKey;

/// A mapping entry as found in user-supplied tables.
///
/// Two shapes are accepted: the legacy `["database", "code"]` pair and the
/// structured record carrying the recorded target unit and an optional
/// density. [`RawMappingEntry::upgrade`] migrates both to [`MappingEntry`]
/// at the boundary so nothing downstream branches on shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawMappingEntry {
    Structured {
        database: String,
        code: String,
        #[serde(default)]
        unit: Option<String>,
        #[serde(default, deserialize_with = "lenient_density")]
        density: Option<f64>,
    },
    Legacy(String, String),
}

impl RawMappingEntry {
    /// Migrates either accepted shape into the structured form.
    pub fn upgrade(self) -> MappingEntry {
        match self {
            Self::Structured {
                database,
                code,
                unit,
                density,
            } => MappingEntry {
                database,
                code,
                unit,
                density,
            },
            Self::Legacy(database, code) => MappingEntry {
                database,
                code,
                unit: None,
                density: None,
            },
        }
    }
}

/// Where a flow points in the external inventory landscape.
///
/// `unit` is the target unit recorded at mapping time; the resolved node's
/// own unit takes precedence over it. `density` (kg/m³) backs the kg→m³
/// conversion and must be positive to be usable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub database: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_density",
        skip_serializing_if = "Option::is_none"
    )]
    pub density: Option<f64>,
}

impl MappingEntry {
    pub fn new(database: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            code: code.into(),
            unit: None,
            density: None,
        }
    }

    /// Records the target unit observed when the mapping was made.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = Some(density);
        self
    }

    /// An entry is unusable when database or code is empty.
    pub fn is_valid(&self) -> bool {
        !self.database.is_empty() && !self.code.is_empty()
    }

    /// The `(database, code)` resolution key.
    pub fn key(&self) -> NodeKey {
        NodeKey::new(self.database.clone(), self.code.clone())
    }
}

/// Density cells survive round trips through spreadsheets as strings;
/// unparsable values degrade to absent rather than failing the whole table.
fn lenient_density<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }
    let raw = Option::<Raw>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Raw::Number(value)) => Some(value),
        Some(Raw::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}
