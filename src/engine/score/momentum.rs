//! Momentum scoring from week-over-week deltas

use crate::engine::config::EngineConfig;
use crate::engine::score::log_norm;
use crate::engine::types::{HealthLabel, MomentumLabel, ProjectRecord, Source};

/// Computes the momentum score in [0, 100] from the weekly deltas supplied
/// by the ingestion pipeline. Missing deltas (first snapshot) and negative
/// deltas both score zero; momentum only measures growth.
pub fn momentum_score(record: &ProjectRecord, config: &EngineConfig) -> f64 {
    let (primary, secondary) = match record.source {
        Source::Github => (record.stars_delta_7d, record.forks_delta_7d),
        Source::Huggingface => (record.downloads_delta_7d, record.likes_delta_7d),
    };

    let primary = primary.unwrap_or(0).max(0) as u64;
    let secondary = secondary.unwrap_or(0).max(0) as u64;

    log_norm(primary, config.primary_delta_saturation) * 70.0
        + log_norm(secondary, config.secondary_delta_saturation) * 30.0
}

/// Momentum bucket. Rising requires both growth above the configured
/// threshold and a record that is not already decaying; near-zero growth is
/// flat, everything else steady.
pub fn momentum_label(
    momentum_score: f64,
    health_label: HealthLabel,
    config: &EngineConfig,
) -> MomentumLabel {
    if momentum_score >= config.rising_threshold && health_label != HealthLabel::Decaying {
        MomentumLabel::Rising
    } else if momentum_score < config.flat_threshold {
        MomentumLabel::Flat
    } else {
        MomentumLabel::Steady
    }
}
