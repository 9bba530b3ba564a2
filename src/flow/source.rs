use serde::{Deserialize, Serialize};

use super::classify::FlowPosition;
use super::record::FlowRecord;
use crate::error::ExtractionError;

/// Pulls raw flow records out of a running process simulation.
///
/// The desktop simulator connector lives outside this crate; implementing
/// this trait is the seam through which its streams enter classification and
/// normalization.
///
/// # Example
///
/// ```rust,no_run
/// use foreflow::error::ExtractionError;
/// use foreflow::flow::{ExtractedFlows, FlowRecord, FlowSource};
///
/// struct FixtureSource;
///
/// impl FlowSource for FixtureSource {
///     fn extract(&mut self) -> Result<ExtractedFlows, ExtractionError> {
///         Ok(ExtractedFlows {
///             energy: vec![
///                 FlowRecord::new("POWER", 250_000.0, "Watt").with_util_type("ELECTRICITY"),
///             ],
///             material_inputs: vec![FlowRecord::new("WATER-IN", 120.0, "kg/hr")],
///             material_outputs: vec![FlowRecord::new("PRODUCT", 100.0, "kg/hr")],
///         })
///     }
/// }
/// ```
pub trait FlowSource {
    /// Extracts the current energy and material streams.
    ///
    /// An error means zero usable flows were produced.
    fn extract(&mut self) -> Result<ExtractedFlows, ExtractionError>;
}

/// The three flow lists a simulation exposes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFlows {
    pub energy: Vec<FlowRecord>,
    pub material_inputs: Vec<FlowRecord>,
    pub material_outputs: Vec<FlowRecord>,
}

impl ExtractedFlows {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.energy.len() + self.material_inputs.len() + self.material_outputs.len()
    }

    /// Iterates every record together with the boundary position it came
    /// from, in table order: energy, then material inputs, then outputs.
    pub fn positioned(&self) -> impl Iterator<Item = (FlowPosition, &FlowRecord)> {
        let energy = self.energy.iter().map(|r| (FlowPosition::Energy, r));
        let inputs = self
            .material_inputs
            .iter()
            .map(|r| (FlowPosition::MaterialInput, r));
        let outputs = self
            .material_outputs
            .iter()
            .map(|r| (FlowPosition::MaterialOutput, r));
        energy.chain(inputs).chain(outputs)
    }
}
