//! Canonical unit labels for mismatch detection and conversion.

/// Canonical label for mass-based units.
pub const KILOGRAM: &str = "kilogram";

/// Canonical label for volumetric units.
pub const CUBIC_METER: &str = "cubic meter";

/// Canonicalizes a unit label for comparison.
///
/// Case-insensitive and whitespace-trimmed. Known aliases collapse to a
/// single spelling so that `kg` and `kilogram` (or `m3` and `cubic meter`)
/// never produce a false mismatch. Unknown labels pass through lower-cased
/// and trimmed; the empty string maps to itself.
pub fn normalize_unit(label: &str) -> String {
    let folded = label.trim().to_lowercase();
    match folded.as_str() {
        "kg" | "kilograms" => KILOGRAM.to_string(),
        "mj" | "megajoules" => "megajoule".to_string(),
        "kwh" | "kw·h" | "kw h" => "kilowatt hour".to_string(),
        "m3" | "m^3" | "cubic metre" => CUBIC_METER.to_string(),
        _ => folded,
    }
}

/// Returns true if the label denotes a volumetric unit after canonicalization.
pub fn is_volumetric(label: &str) -> bool {
    normalize_unit(label) == CUBIC_METER
}
