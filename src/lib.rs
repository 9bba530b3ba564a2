//! # Foreflow - Foreground LCA Inventory Builder
//!
//! **Foreflow** turns raw flowsheet results from a process simulation into a
//! foreground life-cycle inventory: a process node whose exchange edges are
//! synthesized from normalized flow rows, ready to anchor an impact
//! calculation. Builds are best-effort by design: a bad row degrades to a
//! warning in the build report instead of aborting the whole inventory.
//!
//! ## Core Workflow
//!
//! The engine is simulator-agnostic. It operates on plain flow records and
//! explicit inputs; there is no ambient session state. The primary workflow is:
//!
//! 1.  **Extract**: Pull raw `FlowRecord`s from your simulation by implementing
//!     the `FlowSource` trait (energy duties, material inputs, material outputs).
//! 2.  **Classify**: Assign each flow a role (`Reference Flow`, `Technosphere`,
//!     `Biosphere`, ...) at its flowsheet position, then designate the single
//!     reference flow that defines the functional unit.
//! 3.  **Normalize**: Scale every flow to one unit of the reference flow,
//!     applying the per-category unit conversions (kWh for electricity, MJ for
//!     other utilities, kg for materials).
//! 4.  **Build**: Resolve each normalized row against a mapping table and
//!     synthesize typed exchange edges on a fresh process node inside an
//!     `InventoryStore`.
//! 5.  **Assess**: Issue a unit demand of the built process against an
//!     `ImpactEngine`, one score per selected method.
//!
//! ## Quick Start
//!
//! The following example demonstrates the end-to-end process.
//!
//! ```rust,no_run
//! use foreflow::prelude::*;
//! use foreflow::error::ExtractionError;
//!
//! // 1. Expose your simulation results through the `FlowSource` trait.
//! struct FixedReport;
//!
//! impl FlowSource for FixedReport {
//!     fn extract(&mut self) -> std::result::Result<ExtractedFlows, ExtractionError> {
//!         Ok(ExtractedFlows {
//!             energy: vec![FlowRecord::new("E-101", 3.6e8, "J").with_util_type("ELECTRICITY")],
//!             material_inputs: vec![FlowRecord::new("WATER-IN", 50.0, "kg")],
//!             material_outputs: vec![FlowRecord::new("STEAM-OUT", 100.0, "kg")],
//!         })
//!     }
//! }
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let mut source = FixedReport;
//!     let flows = source.extract()?;
//!
//!     // 2. Classify each flow and designate the reference flow.
//!     let classified: Vec<ClassifiedFlow> = flows
//!         .positioned()
//!         .map(|(position, record)| {
//!             let role = if record.name == "STEAM-OUT" {
//!                 FlowRole::ReferenceFlow
//!             } else {
//!                 FlowRole::Technosphere
//!             };
//!             ClassifiedFlow::new(record, position, role)
//!         })
//!         .collect();
//!     let reference = select_reference(&classified)?.clone();
//!
//!     // 3. Normalize everything to one kilogram of steam.
//!     let rows = normalize(&classified, &reference)?;
//!
//!     // 4. Map the remaining flows onto background activities and build.
//!     // Keys are flow names, exactly as they appear in the flowsheet.
//!     let mapping = MappingTable::from_json_str(
//!         r#"{
//!             "E-101": {"database": "background", "code": "grid-electricity"},
//!             "WATER-IN": {"database": "background", "code": "tap-water"}
//!         }"#,
//!     )?;
//!
//!     // A real deployment would use a store backed by an LCA database here.
//!     let mut store = MemoryStore::new();
//!     store.add_activity(
//!         ActivityNode::new(NodeKey::new("background", "grid-electricity"), "market for electricity")
//!             .with_unit("kilowatt hour"),
//!     );
//!     store.add_activity(
//!         ActivityNode::new(NodeKey::new("background", "tap-water"), "market for water")
//!             .with_unit("kilogram"),
//!     );
//!
//!     let meta = ProcessMeta::new("steam production", "kilogram", "steam");
//!     let output = build_inventory(&mut store, &rows, &mapping, "foreground", &meta)?;
//!
//!     println!(
//!         "Process {} built with {} edges",
//!         output.process, output.report.created_edges
//!     );
//!     for warning in &output.report.warnings {
//!         println!("warning: {}", warning);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod flow;
pub mod impact;
pub mod inventory;
pub mod mapping;
pub mod normalize;
pub mod prelude;
pub mod report;
pub mod store;
pub mod synthesis;
pub mod units;
