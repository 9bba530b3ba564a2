pub mod memory;
pub mod model;

pub use memory::*;
pub use model::*;

use crate::error::StoreError;

/// The inventory-database boundary.
///
/// A store resolves `(database, code)` keys into activity nodes, registers
/// databases and process nodes, and records exchange edges. The production
/// build targets an implementation backed by a real LCA database; the
/// bundled [`MemoryStore`] serves self-contained runs and tests.
///
/// Edges are append-only: once recorded within a build they are never
/// mutated or deleted.
pub trait InventoryStore {
    /// Returns true if a database with this name exists.
    fn database_exists(&self, name: &str) -> bool;

    /// Registers the database if missing. Existing databases are untouched.
    fn create_database(&mut self, name: &str);

    /// Resolves a node by `(database, code)`.
    fn get_node(&self, key: &NodeKey) -> Result<ActivityNode, StoreError>;

    /// Creates a process node in `database` and returns its key.
    fn create_process(
        &mut self,
        database: &str,
        process: NewProcess,
    ) -> Result<NodeKey, StoreError>;

    /// Records one exchange edge on the node it belongs to (its output
    /// side).
    fn add_edge(&mut self, edge: ExchangeEdge) -> Result<(), StoreError>;

    /// Lists the production exchanges recorded on a node.
    fn production(&self, key: &NodeKey) -> Result<Vec<ExchangeEdge>, StoreError>;
}
