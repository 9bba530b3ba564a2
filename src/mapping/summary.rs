use serde::Serialize;

use super::MappingTable;
use crate::normalize::NormalizedRow;
use crate::store::InventoryStore;

/// One pre-build review line joining an LCI row with its mapped target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingSummaryRow {
    pub flow: String,
    /// Resolved target name, `-` when unmapped or unresolvable.
    pub target: String,
    /// Resolved target location, `-` when unmapped or unresolvable.
    pub location: String,
    #[serde(with = "crate::normalize::amount_text")]
    pub amount: f64,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
}

/// Builds the mapping review table for a normalized inventory.
///
/// One line per row, in row order. Store lookups that fail degrade to
/// placeholder cells, never to errors.
pub fn mapping_summary<S: InventoryStore>(
    store: &S,
    rows: &[NormalizedRow],
    mapping: &MappingTable,
) -> Vec<MappingSummaryRow> {
    rows.iter()
        .map(|row| {
            let entry = mapping.get(&row.flow);
            let (target, location) = entry
                .filter(|e| e.is_valid())
                .and_then(|e| store.get_node(&e.key()).ok())
                .map(|node| (node.name, node.location.unwrap_or_else(|| "-".to_string())))
                .unwrap_or_else(|| ("-".to_string(), "-".to_string()));
            MappingSummaryRow {
                flow: row.flow.clone(),
                target,
                location,
                amount: row.amount,
                unit: row.unit.clone(),
                density: entry.and_then(|e| e.density),
            }
        })
        .collect()
}
