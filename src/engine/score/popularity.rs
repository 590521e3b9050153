//! Popularity scoring from adoption metrics

use crate::engine::config::EngineConfig;
use crate::engine::score::log_norm;
use crate::engine::types::{ProjectRecord, Source};

/// Fixed trend component. A placeholder until star-velocity tracking exists;
/// keeping it constant keeps historical scores comparable.
const TREND_COMPONENT: f64 = 10.0;

/// Computes the popularity score in [0, 100].
///
/// GitHub records are normalized on stars/forks, Hugging Face records on
/// downloads/likes with the same saturation constants and the same
/// log-normalization shape. Absent metrics score as zero.
pub fn popularity_score(record: &ProjectRecord, config: &EngineConfig) -> f64 {
    let (primary, secondary) = match record.source {
        Source::Github => (record.stars, record.forks),
        Source::Huggingface => (record.downloads, record.likes),
    };

    let primary_component = log_norm(primary.unwrap_or(0), config.star_saturation) * 70.0;
    let secondary_component = log_norm(secondary.unwrap_or(0), config.fork_saturation) * 20.0;

    primary_component + secondary_component + TREND_COMPONENT
}
