use ahash::AHashMap;

use super::model::{ActivityNode, EdgeKind, ExchangeEdge, NewProcess, NodeKey};
use super::InventoryStore;
use crate::error::StoreError;

/// In-memory reference implementation of [`InventoryStore`].
///
/// Codes for created processes come from a counter, so repeated builds
/// against a fresh store are deterministic. Seeding a node under an existing
/// code replaces that node and drops its edges.
#[derive(Debug, Default)]
pub struct MemoryStore {
    databases: AHashMap<String, Database>,
    created: u64,
}

#[derive(Debug, Default)]
struct Database {
    nodes: AHashMap<String, StoredNode>,
    order: Vec<String>,
}

#[derive(Debug)]
struct StoredNode {
    node: ActivityNode,
    edges: Vec<ExchangeEdge>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an activity node, creating its database if missing.
    pub fn add_activity(&mut self, node: ActivityNode) {
        let db = self.databases.entry(node.key.database.clone()).or_default();
        let code = node.key.code.clone();
        if !db.nodes.contains_key(&code) {
            db.order.push(code.clone());
        }
        db.nodes.insert(
            code,
            StoredNode {
                node,
                edges: Vec::new(),
            },
        );
    }

    /// Seeds a self-production exchange on an existing node.
    pub fn add_production(&mut self, key: &NodeKey, amount: f64) -> Result<(), StoreError> {
        self.add_edge(ExchangeEdge::self_production(key, amount))
    }

    /// All activities of a database, in insertion order.
    pub fn activities(&self, database: &str) -> Result<Vec<ActivityNode>, StoreError> {
        let db = self
            .databases
            .get(database)
            .ok_or_else(|| StoreError::DatabaseNotFound(database.to_string()))?;
        Ok(db.order.iter().map(|code| db.nodes[code].node.clone()).collect())
    }

    /// All edges recorded on a node, in append order.
    pub fn edges(&self, key: &NodeKey) -> Result<Vec<ExchangeEdge>, StoreError> {
        Ok(self.stored(key)?.edges.clone())
    }

    fn stored(&self, key: &NodeKey) -> Result<&StoredNode, StoreError> {
        let db = self
            .databases
            .get(&key.database)
            .ok_or_else(|| StoreError::DatabaseNotFound(key.database.clone()))?;
        db.nodes.get(&key.code).ok_or_else(|| StoreError::NodeNotFound {
            database: key.database.clone(),
            code: key.code.clone(),
        })
    }

    fn stored_mut(&mut self, key: &NodeKey) -> Result<&mut StoredNode, StoreError> {
        let db = self
            .databases
            .get_mut(&key.database)
            .ok_or_else(|| StoreError::DatabaseNotFound(key.database.clone()))?;
        db.nodes.get_mut(&key.code).ok_or_else(|| StoreError::NodeNotFound {
            database: key.database.clone(),
            code: key.code.clone(),
        })
    }

    fn next_code(&mut self) -> String {
        self.created += 1;
        format!("proc{:06}", self.created)
    }
}

impl InventoryStore for MemoryStore {
    fn database_exists(&self, name: &str) -> bool {
        self.databases.contains_key(name)
    }

    fn create_database(&mut self, name: &str) {
        self.databases.entry(name.to_string()).or_default();
    }

    fn get_node(&self, key: &NodeKey) -> Result<ActivityNode, StoreError> {
        Ok(self.stored(key)?.node.clone())
    }

    fn create_process(
        &mut self,
        database: &str,
        process: NewProcess,
    ) -> Result<NodeKey, StoreError> {
        if !self.database_exists(database) {
            return Err(StoreError::DatabaseNotFound(database.to_string()));
        }
        let code = match process.code {
            Some(ref code) => code.clone(),
            None => self.next_code(),
        };
        let key = NodeKey::new(database, code);
        let node = ActivityNode {
            key: key.clone(),
            name: process.name,
            unit: process.unit,
            location: Some(process.location),
            categories: Vec::new(),
            reference_product: process.reference_product,
            kind: process.kind,
        };
        self.add_activity(node);
        Ok(key)
    }

    fn add_edge(&mut self, edge: ExchangeEdge) -> Result<(), StoreError> {
        let owner = edge.output.clone();
        self.stored_mut(&owner)?.edges.push(edge);
        Ok(())
    }

    fn production(&self, key: &NodeKey) -> Result<Vec<ExchangeEdge>, StoreError> {
        Ok(self
            .stored(key)?
            .edges
            .iter()
            .filter(|e| e.kind == EdgeKind::Production)
            .cloned()
            .collect())
    }
}
