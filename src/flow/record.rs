use serde::{Deserialize, Serialize};

/// A raw flow pulled from the simulation source: one material stream or one
/// utility duty.
///
/// Values arrive in the SI base units reported by the simulator; `util_type`
/// is only set for energy flows (e.g. `ELECTRICITY`, `WATER`, `STEAM`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowRecord {
    pub name: String,
    pub value: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub util_type: Option<String>,
}

impl FlowRecord {
    pub fn new(name: impl Into<String>, value: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            unit: unit.into(),
            util_type: None,
        }
    }

    /// Attaches the utility classification reported by the simulator.
    pub fn with_util_type(mut self, util_type: impl Into<String>) -> Self {
        self.util_type = Some(util_type.into());
        self
    }
}
