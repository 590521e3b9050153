//! Score calculation
//!
//! Pure per-record scoring: popularity, health, people, and momentum, each
//! normalized to [0, 100], plus the categorical labels derived from them.
//! Nothing here reads other records; corpus-level aggregates (the median
//! used by some lenses) live in the lens pass.

mod health;
mod momentum;
mod people;
mod popularity;

pub use health::{health_label, health_score};
pub use momentum::{momentum_label, momentum_score};
pub use people::people_score;
pub use popularity::popularity_score;

use crate::engine::config::EngineConfig;
use crate::engine::types::ProjectRecord;

/// Clamps a ratio into [0, 1]. Every normalized sub-score goes through this
/// so no formula can push a stored score past its bounds, and NaN collapses
/// to zero instead of propagating.
pub(crate) fn clamp01(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

/// Log-normalizes `value` against `saturation`: 0 at zero, 1 at or beyond
/// the saturation point.
pub(crate) fn log_norm(value: u64, saturation: u64) -> f64 {
    let denom = (saturation as f64).ln_1p();
    if denom == 0.0 {
        return 0.0;
    }
    clamp01((value as f64).ln_1p() / denom)
}

/// Computed scores and labels for one record.
#[derive(Clone, Copy, Debug)]
pub struct Scores {
    pub popularity_score: f64,
    pub health_score: f64,
    pub people_score: f64,
    pub momentum_score: f64,
    pub health_label: crate::engine::types::HealthLabel,
    pub momentum_label: crate::engine::types::MomentumLabel,
    /// Popularity/health composite used for tie-breaks and graph export.
    pub score: f64,
}

/// Scores one record from its raw telemetry. Never fails: every missing
/// optional field substitutes its documented default instead.
pub fn score(record: &ProjectRecord, config: &EngineConfig) -> Scores {
    let popularity = popularity_score(record, config);
    let health = health_score(record, config);
    let health_label = health_label(health);
    let momentum = momentum_score(record, config);
    let momentum_label = momentum_label(momentum, health_label, config);
    let people = people_score(record);

    Scores {
        popularity_score: popularity,
        health_score: health,
        people_score: people,
        momentum_score: momentum,
        health_label,
        momentum_label,
        score: (popularity + health) / 2.0,
    }
}
