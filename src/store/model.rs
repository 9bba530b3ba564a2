use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one node in an inventory database as `(database, code)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeKey {
    pub database: String,
    pub code: String,
}

impl NodeKey {
    pub fn new(database: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            code: code.into(),
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.database, self.code)
    }
}

/// Kind of a directed exchange edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Production,
    Technosphere,
    Substitution,
    Biosphere,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Technosphere => write!(f, "technosphere"),
            Self::Substitution => write!(f, "substitution"),
            Self::Biosphere => write!(f, "biosphere"),
        }
    }
}

/// Typing of a created process node.
///
/// A chimaera node carries its own reference product and unit; a plain
/// process node does not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessKind {
    #[serde(rename = "processwithreferenceproduct")]
    WithReferenceProduct,
    #[default]
    #[serde(rename = "process")]
    Plain,
}

impl fmt::Display for ProcessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WithReferenceProduct => write!(f, "processwithreferenceproduct"),
            Self::Plain => write!(f, "process"),
        }
    }
}

/// A product or activity node as exposed by an inventory database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityNode {
    pub key: NodeKey,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_product: Option<String>,
    #[serde(default)]
    pub kind: ProcessKind,
}

impl ActivityNode {
    pub fn new(key: NodeKey, name: impl Into<String>) -> Self {
        Self {
            key,
            name: name.into(),
            unit: None,
            location: None,
            categories: Vec::new(),
            reference_product: None,
            kind: ProcessKind::Plain,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }
}

/// One directed exchange recorded on a process node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeEdge {
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    pub amount: f64,
    pub input: NodeKey,
    pub output: NodeKey,
}

impl ExchangeEdge {
    pub fn new(kind: EdgeKind, amount: f64, input: NodeKey, output: NodeKey) -> Self {
        Self {
            kind,
            amount,
            input,
            output,
        }
    }

    /// A node's production of its own reference product.
    pub fn self_production(node: &NodeKey, amount: f64) -> Self {
        Self::new(EdgeKind::Production, amount, node.clone(), node.clone())
    }
}

/// Payload for creating a process node.
///
/// `unit` and `reference_product` are only set for chimaera nodes; a missing
/// `code` asks the store to generate one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProcess {
    pub name: String,
    pub location: String,
    pub kind: ProcessKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}
