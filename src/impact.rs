//! Impact assessment over a built process.
//!
//! Scores are computed for a unit demand of the foreground process, one
//! method at a time. The calculation itself lives behind [`ImpactEngine`];
//! this module owns the demand vector, the method identifiers and the
//! per-method isolation of failures.

use std::fmt;

use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::ImpactError;
use crate::store::NodeKey;

/// Hierarchical identifier of one impact-assessment method.
///
/// The first segment names the method family; the remaining segments
/// identify the category within it, typically midpoint and indicator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MethodId(pub Vec<String>);

impl MethodId {
    pub fn new(segments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// The family segment; empty for an empty identifier.
    pub fn family(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or_default()
    }

    /// Everything after the family segment.
    pub fn tail(&self) -> &[String] {
        self.0.get(1..).unwrap_or_default()
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" / "))
    }
}

/// A demand vector mapping node keys to required amounts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Demand {
    amounts: AHashMap<NodeKey, f64>,
}

impl Demand {
    pub fn new() -> Self {
        Self::default()
    }

    /// A demand of exactly 1.0 of one node, the functional-unit demand
    /// issued for a built process.
    pub fn unit(node: &NodeKey) -> Self {
        let mut demand = Self::new();
        demand.insert(node.clone(), 1.0);
        demand
    }

    pub fn insert(&mut self, node: NodeKey, amount: f64) {
        self.amounts.insert(node, amount);
    }

    pub fn get(&self, node: &NodeKey) -> Option<f64> {
        self.amounts.get(node).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeKey, f64)> {
        self.amounts.iter().map(|(node, amount)| (node, *amount))
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

/// The impact-calculation boundary.
///
/// An engine runs the inventory and impact calculation for one demand
/// against one method and returns the scalar score. The production build
/// targets an engine backed by a real LCIA implementation; tests use
/// purpose-built stubs.
///
/// # Example
///
/// ```
/// use foreflow::error::ImpactError;
/// use foreflow::impact::{Demand, ImpactEngine, MethodId};
///
/// struct FixedScore(f64);
///
/// impl ImpactEngine for FixedScore {
///     fn compute(&self, _demand: &Demand, _method: &MethodId) -> Result<f64, ImpactError> {
///         Ok(self.0)
///     }
/// }
/// ```
pub trait ImpactEngine {
    /// Computes the score of `demand` under `method`.
    fn compute(&self, demand: &Demand, method: &MethodId) -> Result<f64, ImpactError>;
}

/// Outcome of scoring one method.
#[derive(Debug, Clone)]
pub struct ImpactRun {
    pub method: MethodId,
    pub score: Result<f64, ImpactError>,
}

/// Scores a unit demand of `process` against each method independently.
///
/// One failing method never hides the scores of the others; its error is
/// carried in the corresponding run. No methods yields no runs.
pub fn run_impacts<E: ImpactEngine>(
    engine: &E,
    process: &NodeKey,
    methods: &[MethodId],
) -> Vec<ImpactRun> {
    let demand = Demand::unit(process);
    methods
        .iter()
        .map(|method| ImpactRun {
            method: method.clone(),
            score: engine.compute(&demand, method),
        })
        .collect()
}

/// Groups methods by family for selection surfaces.
///
/// Families come out sorted by name and each family's methods sorted by
/// their remaining segments. Empty identifiers are skipped; duplicates are
/// kept as given.
pub fn methods_by_family(methods: &[MethodId]) -> Vec<(String, Vec<MethodId>)> {
    let sorted = methods
        .iter()
        .filter(|method| !method.0.is_empty())
        .sorted_by(|a, b| {
            a.family()
                .cmp(b.family())
                .then_with(|| a.tail().cmp(b.tail()))
        });
    let grouped = sorted.chunk_by(|method| method.family().to_string());

    let mut families = Vec::new();
    for (family, group) in &grouped {
        families.push((family, group.cloned().collect()));
    }
    families
}
