//! Inventory build orchestration.
//!
//! [`build_inventory`] is the entry point of the build phase: it registers
//! the target database, creates the foreground process node and synthesizes
//! one or more exchange edges per normalized LCI row.

use serde::{Deserialize, Serialize};

use crate::error::BuildError;
use crate::mapping::MappingTable;
use crate::normalize::NormalizedRow;
use crate::report::{BuildOutput, BuildReport, BuildWarning};
use crate::store::{ExchangeEdge, InventoryStore, NewProcess, ProcessKind};
use crate::synthesis::EdgeSynthesizer;

/// Location assigned to processes that do not carry one.
pub const DEFAULT_LOCATION: &str = "GLO";

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

fn default_chimaera() -> bool {
    true
}

/// Metadata for the foreground process a build creates.
///
/// By default the process is a chimaera node: it carries its own unit and
/// reference product. With `chimaera` disabled a plain process node is
/// created instead and neither attribute is set on the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessMeta {
    pub name: String,
    pub unit: String,
    pub reference_product: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default = "default_chimaera")]
    pub chimaera: bool,
}

impl ProcessMeta {
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        reference_product: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            reference_product: reference_product.into(),
            location: default_location(),
            code: None,
            chimaera: true,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_chimaera(mut self, chimaera: bool) -> Self {
        self.chimaera = chimaera;
        self
    }

    /// Checks that the mandatory fields are non-empty.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.name.is_empty() {
            return Err(BuildError::ProcessCreation { field: "name" });
        }
        if self.unit.is_empty() {
            return Err(BuildError::ProcessCreation { field: "unit" });
        }
        if self.reference_product.is_empty() {
            return Err(BuildError::ProcessCreation {
                field: "reference_product",
            });
        }
        Ok(())
    }

    fn to_new_process(&self) -> NewProcess {
        let kind = if self.chimaera {
            ProcessKind::WithReferenceProduct
        } else {
            ProcessKind::Plain
        };
        let location = if self.location.is_empty() {
            default_location()
        } else {
            self.location.clone()
        };
        NewProcess {
            name: self.name.clone(),
            location,
            kind,
            unit: self.chimaera.then(|| self.unit.clone()),
            reference_product: self.chimaera.then(|| self.reference_product.clone()),
            code: self.code.clone(),
        }
    }
}

/// Registers the target database if missing. Existing databases, imported
/// background data included, are never touched.
pub fn ensure_database<S: InventoryStore>(store: &mut S, name: &str) {
    if !store.database_exists(name) {
        store.create_database(name);
    }
}

/// Builds the foreground inventory for one normalized LCI table.
///
/// Row-level problems degrade to warnings in the returned report; only
/// invalid process metadata and store failures abort the build. A process
/// that ends up without any production exchange receives a fallback
/// production of 1.0 so it can anchor a demand.
pub fn build_inventory<S: InventoryStore>(
    store: &mut S,
    rows: &[NormalizedRow],
    mapping: &MappingTable,
    target_db: &str,
    meta: &ProcessMeta,
) -> Result<BuildOutput, BuildError> {
    meta.validate()?;
    ensure_database(store, target_db);

    let process = store.create_process(target_db, meta.to_new_process())?;

    let mut synthesizer = EdgeSynthesizer::new();
    let mut report = BuildReport::default();
    for row in rows {
        let outcome = synthesizer.synthesize(store, &process, row, mapping)?;
        report.record(outcome);
    }

    if store.production(&process)?.is_empty() {
        store.add_edge(ExchangeEdge::self_production(&process, 1.0))?;
        report.created_edges += 1;
        report.warnings.push(BuildWarning::OrphanProduction);
    }

    Ok(BuildOutput {
        database: target_db.to_string(),
        process,
        report,
    })
}
