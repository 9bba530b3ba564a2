use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::record::FlowRecord;
use crate::error::ReferenceSelectionError;

/// Id prefix for energy flows.
pub const ENERGY_ID_PREFIX: &str = "energy_";
/// Id prefix for material input flows.
pub const MATERIAL_INPUT_ID_PREFIX: &str = "minput_";
/// Id prefix for material output flows.
pub const MATERIAL_OUTPUT_ID_PREFIX: &str = "moutput_";

/// Broad category of a flow, selecting the normalization branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowCategory {
    Energy,
    Material,
}

/// Where a flow sits on the flowsheet boundary.
///
/// The position fixes the flow id prefix, the direction, and the set of
/// roles a user may assign to the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowPosition {
    Energy,
    MaterialInput,
    MaterialOutput,
}

impl FlowPosition {
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::Energy => ENERGY_ID_PREFIX,
            Self::MaterialInput => MATERIAL_INPUT_ID_PREFIX,
            Self::MaterialOutput => MATERIAL_OUTPUT_ID_PREFIX,
        }
    }

    pub fn category(&self) -> FlowCategory {
        match self {
            Self::Energy => FlowCategory::Energy,
            Self::MaterialInput | Self::MaterialOutput => FlowCategory::Material,
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Self::Energy | Self::MaterialInput => Direction::Input,
            Self::MaterialOutput => Direction::Output,
        }
    }

    /// Builds the stable flow id for a named flow at this position, e.g.
    /// `minput_WATER` for a material input called `WATER`.
    pub fn flow_id(&self, name: &str) -> String {
        format!("{}{}", self.id_prefix(), name)
    }

    /// Role choices valid for a flow at this position.
    pub fn allowed_roles(&self) -> &'static [FlowRole] {
        match self {
            Self::Energy => &[
                FlowRole::Technosphere,
                FlowRole::Biosphere,
                FlowRole::AvoidedProduct,
            ],
            Self::MaterialInput => &[
                FlowRole::Technosphere,
                FlowRole::Biosphere,
                FlowRole::ReferenceFlow,
            ],
            Self::MaterialOutput => &[
                FlowRole::Biosphere,
                FlowRole::AvoidedProduct,
                FlowRole::ReferenceFlow,
                FlowRole::Waste,
            ],
        }
    }

    pub fn allows(&self, role: &FlowRole) -> bool {
        self.allowed_roles().contains(role)
    }
}

/// Direction of a flow relative to the process boundary.
///
/// Parsed case-insensitively; anything that is neither `input` nor `output`
/// is preserved as [`Direction::Other`] so the synthesis fallback paths can
/// report it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Input,
    Output,
    Other(String),
}

impl Direction {
    /// Parses a raw direction cell. Empty or whitespace-only cells mean the
    /// direction is unspecified.
    pub fn parse(raw: &str) -> Option<Self> {
        let folded = raw.trim().to_lowercase();
        match folded.as_str() {
            "" => None,
            "input" => Some(Self::Input),
            "output" => Some(Self::Output),
            _ => Some(Self::Other(folded)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Field helper for `Option<Direction>` columns: accepts missing, empty and
/// free-form direction cells.
pub(crate) fn deserialize_direction<'de, D>(deserializer: D) -> Result<Option<Direction>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Direction::parse))
}

/// Semantic role of a classified flow in the inventory graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowRole {
    #[serde(rename = "Reference Flow")]
    ReferenceFlow,
    Technosphere,
    Biosphere,
    #[serde(rename = "Avoided Product")]
    AvoidedProduct,
    Waste,
    /// Any role label this crate does not route; rows carrying it degrade to
    /// a "not handled" warning at synthesis time.
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for FlowRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReferenceFlow => write!(f, "Reference Flow"),
            Self::Technosphere => write!(f, "Technosphere"),
            Self::Biosphere => write!(f, "Biosphere"),
            Self::AvoidedProduct => write!(f, "Avoided Product"),
            Self::Waste => write!(f, "Waste"),
            Self::Other(label) => write!(f, "{}", label),
        }
    }
}

/// A raw flow record enriched with the user's classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedFlow {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub util_type: Option<String>,
    pub role: FlowRole,
    #[serde(
        default,
        deserialize_with = "deserialize_direction",
        skip_serializing_if = "Option::is_none"
    )]
    pub direction: Option<Direction>,
    pub category: FlowCategory,
}

impl ClassifiedFlow {
    /// Classifies a record at the given flowsheet position.
    ///
    /// The id, category and direction are derived from the position. The
    /// role is the caller's choice; check it against
    /// [`FlowPosition::allowed_roles`] before building if it came from
    /// untrusted input.
    pub fn new(record: &FlowRecord, position: FlowPosition, role: FlowRole) -> Self {
        Self {
            id: position.flow_id(&record.name),
            name: record.name.clone(),
            value: record.value,
            unit: record.unit.clone(),
            util_type: record.util_type.clone(),
            role,
            direction: Some(position.direction()),
            category: position.category(),
        }
    }
}

/// Picks the single flow designated as the reference flow.
///
/// The reference flow is both the normalization denominator and the
/// process's nominal product; exactly one must be designated for a build to
/// proceed.
pub fn select_reference(
    flows: &[ClassifiedFlow],
) -> Result<&ClassifiedFlow, ReferenceSelectionError> {
    let mut designated = flows.iter().filter(|f| f.role == FlowRole::ReferenceFlow);
    let reference = designated
        .next()
        .ok_or(ReferenceSelectionError::NoReference)?;
    let extra = designated.count();
    if extra > 0 {
        return Err(ReferenceSelectionError::MultipleReferences { count: extra + 1 });
    }
    Ok(reference)
}

/// Counts classified flows per assigned role, in first-appearance order.
pub fn role_counts(flows: &[ClassifiedFlow]) -> Vec<(FlowRole, usize)> {
    let counts = flows.iter().map(|f| &f.role).counts();
    flows
        .iter()
        .map(|f| &f.role)
        .unique()
        .map(|role| (role.clone(), counts[role]))
        .collect()
}
