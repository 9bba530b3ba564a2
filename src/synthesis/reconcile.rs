//! Unit reconciliation between an LCI row and its mapped target.

use crate::report::BuildWarning;
use crate::units::{KILOGRAM, is_volumetric, normalize_unit};

/// Reconciles a row amount against the target product unit.
///
/// Mass rows mapped onto a volumetric target are divided by the entry's
/// density (kg/m³). When that conversion is impossible a density warning
/// is raised and, since the units still differ, a mismatch warning
/// follows. Mismatches are only reported when both units are known;
/// an empty unit on either side suppresses the check.
pub(crate) fn reconcile_amount(
    amount: f64,
    row_unit: &str,
    target_unit: &str,
    density: Option<f64>,
    flow: &str,
    warnings: &mut Vec<BuildWarning>,
) -> f64 {
    let row_canonical = normalize_unit(row_unit);
    let target_canonical = normalize_unit(target_unit);

    let mut amount = amount;
    let mut converted = false;

    if row_canonical == KILOGRAM && is_volumetric(target_unit) {
        match density {
            Some(density) if density > 0.0 => {
                amount /= density;
                converted = true;
            }
            _ => warnings.push(BuildWarning::DensityMissing {
                flow: flow.to_string(),
            }),
        }
    }

    if !converted
        && !row_canonical.is_empty()
        && !target_canonical.is_empty()
        && row_canonical != target_canonical
    {
        warnings.push(BuildWarning::UnitMismatch {
            row_unit: row_unit.to_string(),
            target_unit: target_unit.to_string(),
        });
    }

    amount
}
