//! Edge synthesis: routes normalized LCI rows onto the foreground process.
//!
//! Routing is best-effort. A row that cannot be resolved (missing mapping,
//! invalid entry, unknown target) is skipped with a warning in its outcome;
//! only store failures abort the build.

use ahash::AHashMap;

use crate::error::BuildError;
use crate::flow::{Direction, FlowRole};
use crate::mapping::MappingTable;
use crate::normalize::NormalizedRow;
use crate::report::{BuildWarning, CreatedEdge, EdgeLabel, RowOutcome};
use crate::store::{ActivityNode, EdgeKind, ExchangeEdge, InventoryStore, NodeKey};

mod reconcile;

use reconcile::reconcile_amount;

/// Turns rows into exchange edges, one row at a time.
///
/// Target lookups are cached per synthesizer, so repeated references to the
/// same `(database, code)` pair hit the store once.
#[derive(Debug, Default)]
pub struct EdgeSynthesizer {
    cache: AHashMap<NodeKey, ActivityNode>,
}

impl EdgeSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct targets resolved so far.
    pub fn cached_targets(&self) -> usize {
        self.cache.len()
    }

    /// Synthesizes the edges for one row.
    ///
    /// Reference flows become a production edge of the process on itself and
    /// never consult the mapping. Every other role needs a valid mapping
    /// entry that resolves to an existing node; the row amount is then
    /// reconciled against the target's unit before routing by role.
    pub fn synthesize<S: InventoryStore>(
        &mut self,
        store: &mut S,
        process: &NodeKey,
        row: &NormalizedRow,
        mapping: &MappingTable,
    ) -> Result<RowOutcome, BuildError> {
        let mut outcome = RowOutcome::default();

        if row.role == FlowRole::ReferenceFlow {
            store.add_edge(ExchangeEdge::self_production(process, row.amount))?;
            outcome.created.push(CreatedEdge {
                label: EdgeLabel::Production,
                flow: row.flow.clone(),
                amount: row.amount,
            });
            return Ok(outcome);
        }

        let Some(entry) = mapping.get(&row.flow) else {
            let warning = match row.role {
                FlowRole::Technosphere
                | FlowRole::Biosphere
                | FlowRole::AvoidedProduct
                | FlowRole::Waste => BuildWarning::Unmapped {
                    flow: row.flow.clone(),
                },
                _ => BuildWarning::NoMapping {
                    flow: row.flow.clone(),
                },
            };
            outcome.warnings.push(warning);
            return Ok(outcome);
        };

        if !entry.is_valid() {
            outcome.warnings.push(BuildWarning::InvalidMapping {
                flow: row.flow.clone(),
            });
            return Ok(outcome);
        }

        let key = entry.key();
        let Some(target) = self.resolve(store, &key) else {
            outcome.warnings.push(BuildWarning::TargetMissing {
                flow: row.flow.clone(),
                database: key.database,
                code: key.code,
            });
            return Ok(outcome);
        };

        // Node metadata wins over the unit stored in the mapping entry.
        let target_unit = target
            .unit
            .clone()
            .filter(|unit| !unit.is_empty())
            .or_else(|| entry.unit.clone())
            .unwrap_or_default();

        let amount = reconcile_amount(
            row.amount,
            &row.unit,
            &target_unit,
            entry.density,
            &row.flow,
            &mut outcome.warnings,
        );

        match &row.role {
            FlowRole::Biosphere => {
                // Uptake (input) is negative, emission positive.
                let signed = if row.direction == Some(Direction::Input) {
                    -amount
                } else {
                    amount
                };
                store.add_edge(ExchangeEdge::new(
                    EdgeKind::Biosphere,
                    signed,
                    target.key.clone(),
                    process.clone(),
                ))?;
                outcome.created.push(CreatedEdge {
                    label: EdgeLabel::Biosphere,
                    flow: row.flow.clone(),
                    amount: signed,
                });
            }
            FlowRole::AvoidedProduct => {
                store.add_edge(ExchangeEdge::new(
                    EdgeKind::Substitution,
                    amount,
                    target.key.clone(),
                    process.clone(),
                ))?;
                outcome.created.push(CreatedEdge {
                    label: EdgeLabel::Substitution,
                    flow: row.flow.clone(),
                    amount,
                });
            }
            FlowRole::Waste => {
                if let Some(direction) = &row.direction {
                    if *direction != Direction::Output {
                        outcome.warnings.push(BuildWarning::WasteDirection {
                            flow: row.flow.clone(),
                            direction: direction.to_string(),
                        });
                    }
                }
                // Treatment providers produce their reference product with a
                // negative amount; consuming such a provider takes a positive
                // sign, a regular provider a negative one.
                let provider_production = store
                    .production(&target.key)
                    .ok()
                    .and_then(|edges| edges.first().map(|edge| edge.amount))
                    .unwrap_or(0.0);
                let signed = if provider_production < 0.0 {
                    amount.abs()
                } else {
                    -amount.abs()
                };
                store.add_edge(ExchangeEdge::new(
                    EdgeKind::Technosphere,
                    signed,
                    target.key.clone(),
                    process.clone(),
                ))?;
                outcome.created.push(CreatedEdge {
                    label: EdgeLabel::TechnosphereWasteTreatment,
                    flow: row.flow.clone(),
                    amount: signed,
                });
            }
            FlowRole::Technosphere => {
                let (kind, label) = match &row.direction {
                    Some(Direction::Input) => {
                        (EdgeKind::Technosphere, EdgeLabel::TechnosphereConsumption)
                    }
                    Some(Direction::Output) => (
                        EdgeKind::Production,
                        EdgeLabel::TechnosphereProductionExternal,
                    ),
                    _ => (
                        EdgeKind::Technosphere,
                        EdgeLabel::TechnosphereConsumptionFallback,
                    ),
                };
                store.add_edge(ExchangeEdge::new(
                    kind,
                    amount,
                    target.key.clone(),
                    process.clone(),
                ))?;
                outcome.created.push(CreatedEdge {
                    label,
                    flow: row.flow.clone(),
                    amount,
                });
            }
            other => outcome.warnings.push(BuildWarning::UnhandledRow {
                flow: row.flow.clone(),
                role: other.to_string(),
            }),
        }

        Ok(outcome)
    }

    fn resolve<S: InventoryStore>(&mut self, store: &S, key: &NodeKey) -> Option<ActivityNode> {
        if let Some(node) = self.cache.get(key) {
            return Some(node.clone());
        }
        let node = store.get_node(key).ok()?;
        self.cache.insert(key.clone(), node.clone());
        Some(node)
    }
}
