//! Build diagnostics: warnings, created-edge records and the final report.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::store::NodeKey;

/// Non-fatal problems surfaced by a build.
///
/// Warnings never abort a build; they accumulate into the report so the
/// caller can distinguish "built with warnings" from "failed to build".
/// Each variant renders to the stable diagnostic line callers display.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildWarning {
    /// The flow has no entry in the mapping table.
    Unmapped { flow: String },
    /// A row whose role is not routed still lacked a mapping entry.
    NoMapping { flow: String },
    /// The mapping entry is missing its database or code.
    InvalidMapping { flow: String },
    /// The mapped `(database, code)` pair resolved to nothing.
    TargetMissing {
        flow: String,
        database: String,
        code: String,
    },
    /// kg→m³ conversion was required but no usable density was provided.
    DensityMissing { flow: String },
    /// Row and target units differ and no conversion was applied.
    UnitMismatch {
        row_unit: String,
        target_unit: String,
    },
    /// A waste row carried a direction other than output.
    WasteDirection { flow: String, direction: String },
    /// The row's role has no routing rule.
    UnhandledRow { flow: String, role: String },
    /// No production exchange existed after all rows; a fallback was added.
    OrphanProduction,
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unmapped { flow } => write!(f, "Flow '{}' not mapped; skipping.", flow),
            Self::NoMapping { flow } => write!(f, "Flow '{}' has no mapping; skipping.", flow),
            Self::InvalidMapping { flow } => {
                write!(f, "Invalid mapping for flow '{}'; skipping.", flow)
            }
            Self::TargetMissing {
                flow,
                database,
                code,
            } => write!(
                f,
                "Mapped node ('{}', '{}') for flow '{}' not found; skipping.",
                database, code, flow
            ),
            Self::DensityMissing { flow } => write!(
                f,
                "Missing or invalid density for flow '{}' mapped to volumetric unit; cannot convert kg→m³.",
                flow
            ),
            Self::UnitMismatch {
                row_unit,
                target_unit,
            } => write!(
                f,
                "Unit mismatch: LCI row unit '{}' vs target product unit '{}'.",
                row_unit, target_unit
            ),
            Self::WasteDirection { flow, direction } => write!(
                f,
                "Waste flow '{}' with Direction='{}' treated as output (treatment consumption).",
                flow, direction
            ),
            Self::UnhandledRow { flow, role } => write!(
                f,
                "Row for flow '{}' with Type '{}' not handled; skipped.",
                flow, role
            ),
            Self::OrphanProduction => write!(
                f,
                "No production exchange found on the foreground process; added a fallback production of 1.0."
            ),
        }
    }
}

impl Serialize for BuildWarning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Labels identifying the synthesis path that produced an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EdgeLabel {
    #[serde(rename = "production")]
    Production,
    #[serde(rename = "biosphere")]
    Biosphere,
    #[serde(rename = "substitution")]
    Substitution,
    #[serde(rename = "technosphere-consumption")]
    TechnosphereConsumption,
    #[serde(rename = "technosphere-production-external")]
    TechnosphereProductionExternal,
    #[serde(rename = "technosphere-consumption-fallback")]
    TechnosphereConsumptionFallback,
    #[serde(rename = "technosphere-waste-treatment")]
    TechnosphereWasteTreatment,
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Biosphere => write!(f, "biosphere"),
            Self::Substitution => write!(f, "substitution"),
            Self::TechnosphereConsumption => write!(f, "technosphere-consumption"),
            Self::TechnosphereProductionExternal => write!(f, "technosphere-production-external"),
            Self::TechnosphereConsumptionFallback => write!(f, "technosphere-consumption-fallback"),
            Self::TechnosphereWasteTreatment => write!(f, "technosphere-waste-treatment"),
        }
    }
}

/// Record of one edge created for a row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedEdge {
    pub label: EdgeLabel,
    pub flow: String,
    pub amount: f64,
}

/// Per-row synthesis outcome: the edges created and the warnings raised.
#[derive(Debug, Clone, Default)]
pub struct RowOutcome {
    pub created: Vec<CreatedEdge>,
    pub warnings: Vec<BuildWarning>,
}

/// Aggregated outcome of one inventory build.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildReport {
    pub created_edges: usize,
    pub warnings: Vec<BuildWarning>,
}

impl BuildReport {
    /// Folds one row outcome into the report.
    pub fn record(&mut self, outcome: RowOutcome) {
        self.created_edges += outcome.created.len();
        self.warnings.extend(outcome.warnings);
    }
}

/// A finished build: where the process landed, plus its report.
#[derive(Debug, Clone, Serialize)]
pub struct BuildOutput {
    pub database: String,
    pub process: NodeKey,
    pub report: BuildReport,
}
