//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the foreflow crate.
//! Import this module to get access to the whole build pipeline without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use foreflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Classify the extracted flows and pick the reference flow
//! let record = FlowRecord::new("STEAM-OUT", 100.0, "kg");
//! let flows = vec![ClassifiedFlow::new(
//!     &record,
//!     FlowPosition::MaterialOutput,
//!     FlowRole::ReferenceFlow,
//! )];
//! let reference = select_reference(&flows)?.clone();
//!
//! // Normalize to one functional unit and build the inventory
//! let rows = normalize(&flows, &reference)?;
//! let mapping = MappingTable::from_json_str(&std::fs::read_to_string("mapping.json")?)?;
//! let mut store = MemoryStore::new();
//! let meta = ProcessMeta::new("steam production", "kilogram", "steam");
//! let output = build_inventory(&mut store, &rows, &mapping, "foreground", &meta)?;
//!
//! println!("Created {} edges", output.report.created_edges);
//! # Ok(())
//! # }
//! ```

// Flow extraction and classification
pub use crate::flow::{
    ClassifiedFlow, Direction, ExtractedFlows, FlowCategory, FlowPosition, FlowRecord, FlowRole,
    FlowSource, select_reference,
};

// Normalization
pub use crate::normalize::{FlowGroup, NormalizedRow, normalize};

// Mapping resolution
pub use crate::mapping::{MappingEntry, MappingTable};

// Inventory build
pub use crate::inventory::{ProcessMeta, build_inventory, ensure_database};
pub use crate::report::{BuildOutput, BuildReport, BuildWarning, EdgeLabel};
pub use crate::synthesis::EdgeSynthesizer;

// Inventory stores
pub use crate::store::{
    ActivityNode, EdgeKind, ExchangeEdge, InventoryStore, MemoryStore, NewProcess, NodeKey,
    ProcessKind,
};

// Impact assessment
pub use crate::impact::{Demand, ImpactEngine, ImpactRun, MethodId, run_impacts};

// Error types
pub use crate::error::{
    BuildError, ImpactError, NormalizationError, ReferenceSelectionError, StoreError,
};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
