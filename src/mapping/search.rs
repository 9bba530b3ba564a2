use itertools::Itertools;

use crate::store::ActivityNode;

/// Case-insensitive substring search over activity metadata.
///
/// The query is matched against a composite of name, categories, location
/// and unit. Results are deduplicated by `(database, code)` and ordered by
/// lower-cased name, then location, then categories; an empty query yields
/// no results.
pub fn search_activities<'a>(candidates: &'a [ActivityNode], query: &str) -> Vec<&'a ActivityNode> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    candidates
        .iter()
        .filter(|node| search_key(node).contains(&needle))
        .unique_by(|node| node.key.clone())
        .sorted_by_key(|node| {
            (
                node.name.to_lowercase(),
                node.location.clone().unwrap_or_default(),
                node.categories.clone(),
            )
        })
        .collect()
}

fn search_key(node: &ActivityNode) -> String {
    format!(
        "{} {} {} {}",
        node.name,
        node.categories.join(" "),
        node.location.as_deref().unwrap_or(""),
        node.unit.as_deref().unwrap_or("")
    )
    .to_lowercase()
}

/// Formats the standard pick-list label for an activity:
/// `name [location] (categories) — unit`, with the location and unit parts
/// omitted when absent.
pub fn activity_label(node: &ActivityNode) -> String {
    let mut label = node.name.clone();
    if let Some(location) = node.location.as_deref().filter(|l| !l.is_empty()) {
        label.push_str(&format!(" [{}]", location));
    }
    label.push_str(&format!(" ({})", node.categories.join(" | ")));
    if let Some(unit) = node.unit.as_deref().filter(|u| !u.is_empty()) {
        label.push_str(&format!(" — {}", unit));
    }
    label
}
