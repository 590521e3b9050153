//! `genscope` - discovery and scoring engine for open-source generative-media
//! projects
//!
//! This library turns raw repository and model telemetry (stars, commits,
//! contributors, issue counts, release cadence) into three orthogonal 0–100
//! scores plus categorical labels, and applies named discovery lenses over
//! the scored corpus. Ingestion of the telemetry and rendering of the
//! results live outside this crate; the engine itself is a pure batch
//! transform.

pub mod engine;

// Re-export core types
pub use engine::types::{Contributor, HealthLabel, MomentumLabel, ProjectRecord, Source};

// Re-export engine error types
pub use engine::error::{EngineError, EngineResult};

// Re-export configuration and the pipeline entry point
pub use engine::config::EngineConfig;
pub use engine::overrides::OverrideConfig;
pub use engine::process_corpus;

// Re-export scoring
pub use engine::score::{
    Scores, health_label, health_score, momentum_label, momentum_score, people_score,
    popularity_score, score,
};

// Re-export tag extraction
pub use engine::tags::{extract_tags, extract_use_cases, license_bucket};

// Re-export lenses
pub use engine::lens::{
    CorpusAggregates, Lens, LensId, SortKey, apply, apply_lens, lens, median_popularity,
};

// Re-export related-project lookup
pub use engine::related::{jaccard, related};

// Re-export the summary builder
pub use engine::summary::summarize;

// Re-export the contributor graph export
pub use engine::graph::{ContributorGraph, GraphLink, GraphNode, NodeKind, contributor_graph};
