use thiserror::Error;

/// Errors that can occur while pulling raw flow records from a simulation source.
#[derive(Error, Debug, Clone)]
pub enum ExtractionError {
    #[error("Flow extraction failed: {0}")]
    Failed(String),
}

/// Errors that can occur while selecting the reference flow for a build.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceSelectionError {
    #[error("No flow is designated as the reference flow")]
    NoReference,

    #[error("{count} flows are designated as the reference flow, expected exactly one")]
    MultipleReferences { count: usize },
}

/// Errors that can occur during the flow normalization phase.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizationError {
    #[error("Reference flow '{flow}' has value 0; amounts per functional unit are undefined")]
    InvalidReference { flow: String },
}

/// Errors that can occur while accessing an inventory store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Database '{0}' does not exist")]
    DatabaseNotFound(String),

    #[error("Node '{code}' not found in database '{database}'")]
    NodeNotFound { database: String, code: String },
}

/// Errors that can occur during the inventory build phase.
///
/// Row-level problems never surface here: they degrade to warnings in the
/// build report. Only build-level precondition violations abort.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Process metadata is missing the mandatory field '{field}'")]
    ProcessCreation { field: &'static str },

    #[error("Inventory store operation failed: {0}")]
    Store(#[from] StoreError),
}

/// Errors that can occur while computing impact scores.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImpactError {
    #[error("Demand node '{code}' not found in database '{database}'")]
    DemandNodeNotFound { database: String, code: String },

    #[error("Method '{method}' failed to compute: {message}")]
    MethodFailed { method: String, message: String },
}
