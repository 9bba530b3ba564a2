//! Normalizes classified flows against the reference flow.
//!
//! Every amount in the resulting table is expressed per one unit of the
//! reference flow. Energy flows additionally move from the simulator's
//! joule-based reporting to LCA-friendly units (kWh for electricity, MJ for
//! thermal utilities).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NormalizationError;
use crate::flow::{ClassifiedFlow, Direction, FlowCategory, FlowRole, MATERIAL_INPUT_ID_PREFIX};

/// Scaling divisor turning a joule-based ratio into kWh.
const JOULES_PER_KILOWATT_HOUR: f64 = 3.6e6;
/// Scaling divisor turning a joule-based ratio into MJ.
const JOULES_PER_MEGAJOULE: f64 = 1e6;

/// Presentation group of a normalized row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowGroup {
    #[serde(rename = "Input: Utilities")]
    Utilities,
    #[serde(rename = "Input: materials")]
    MaterialInputs,
    #[serde(rename = "Outputs")]
    Outputs,
}

impl fmt::Display for FlowGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utilities => write!(f, "Input: Utilities"),
            Self::MaterialInputs => write!(f, "Input: materials"),
            Self::Outputs => write!(f, "Outputs"),
        }
    }
}

/// One row of the normalized life-cycle inventory.
///
/// Serializes with the external column names (`Flow`, `Type`, `Amount`,
/// `Unit`, `Group`, `Direction`, `FlowID`, `Utility Type`). `Amount` is
/// written as a fixed 6-decimal string for display stability but is kept as
/// a full-precision float in memory; deserialization accepts either shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRow {
    #[serde(rename = "Flow")]
    pub flow: String,
    #[serde(rename = "Type")]
    pub role: FlowRole,
    #[serde(rename = "Amount", with = "amount_text")]
    pub amount: f64,
    #[serde(rename = "Unit")]
    pub unit: String,
    #[serde(rename = "Group")]
    pub group: FlowGroup,
    #[serde(
        rename = "Direction",
        default,
        deserialize_with = "crate::flow::classify::deserialize_direction",
        skip_serializing_if = "Option::is_none"
    )]
    pub direction: Option<Direction>,
    #[serde(rename = "FlowID")]
    pub flow_id: String,
    #[serde(
        rename = "Utility Type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub utility: Option<String>,
}

pub(crate) mod amount_text {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:.6}", amount))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }
        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(value),
            Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Normalizes all classified flows against the designated reference flow.
///
/// Fails if the reference value is zero; otherwise produces one row per
/// input flow, in input order. The reference flow's own row carries amount
/// exactly `1` rather than being divided by itself.
pub fn normalize(
    flows: &[ClassifiedFlow],
    reference: &ClassifiedFlow,
) -> Result<Vec<NormalizedRow>, NormalizationError> {
    if reference.value == 0.0 {
        return Err(NormalizationError::InvalidReference {
            flow: reference.name.clone(),
        });
    }

    Ok(flows
        .iter()
        .map(|flow| normalize_one(flow, reference))
        .collect())
}

fn normalize_one(flow: &ClassifiedFlow, reference: &ClassifiedFlow) -> NormalizedRow {
    let ratio = flow.value / reference.value;
    let utility = flow
        .util_type
        .as_deref()
        .map(|u| u.trim().to_uppercase())
        .filter(|u| !u.is_empty());

    let (scaled, unit, group) = match flow.category {
        FlowCategory::Energy => match utility.as_deref() {
            Some("ELECTRICITY") => (ratio / JOULES_PER_KILOWATT_HOUR, "kWh", FlowGroup::Utilities),
            Some("WATER") => (ratio, "kg", FlowGroup::Utilities),
            _ => (ratio / JOULES_PER_MEGAJOULE, "MJ", FlowGroup::Utilities),
        },
        FlowCategory::Material => {
            // Material outputs and unprefixed ids both land in Outputs.
            let group = if flow.id.starts_with(MATERIAL_INPUT_ID_PREFIX) {
                FlowGroup::MaterialInputs
            } else {
                FlowGroup::Outputs
            };
            (ratio, "kg", group)
        }
    };

    let amount = if flow.id == reference.id { 1.0 } else { scaled };

    NormalizedRow {
        flow: flow.name.clone(),
        role: flow.role.clone(),
        amount,
        unit: unit.to_string(),
        group,
        direction: flow.direction.clone(),
        flow_id: flow.id.clone(),
        utility: match flow.category {
            FlowCategory::Energy => utility,
            FlowCategory::Material => None,
        },
    }
}
