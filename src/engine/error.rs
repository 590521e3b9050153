//! Engine error types

use thiserror::Error;

/// Error types for engine configuration and lens resolution.
///
/// Per-record data quality issues never produce an error: the scoring pass
/// substitutes documented defaults instead. Errors here are structural
/// misconfiguration only.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Lens id not present in the registry
    #[error("unknown lens id: {0}")]
    UnknownLens(String),

    /// Override key that is not of the form "source:id"
    #[error("malformed override key '{key}': expected \"source:id\"")]
    MalformedOverride { key: String },

    /// Blocklist entry naming a source the engine does not know
    #[error("unknown source in blocklist: {0}")]
    UnknownSource(String),

    /// The tag pattern table compiled to nothing
    #[error("tag pattern table is empty")]
    EmptyPatternTable,
}

/// Convenience result alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
