//! Configuration for the scoring and lens passes

/// Tunable constants for scoring, momentum labeling, and related-project
/// lookup. None of these are corpus-derived; they are fixed knobs so the
/// engine stays a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Star count at which the popularity log-normalization saturates.
    pub star_saturation: u64,
    /// Fork count at which the popularity log-normalization saturates.
    pub fork_saturation: u64,
    /// Half-life in days for the health recency decay.
    pub recency_half_life_days: f64,
    /// Momentum score at or above which a non-decaying record is "rising".
    pub rising_threshold: f64,
    /// Momentum score below which a record is "flat".
    pub flat_threshold: f64,
    /// Weekly primary-metric delta (stars or downloads) at which the
    /// momentum log-normalization saturates.
    pub primary_delta_saturation: u64,
    /// Weekly secondary-metric delta (forks or likes) saturation.
    pub secondary_delta_saturation: u64,
    /// Maximum number of related projects returned.
    pub related_limit: usize,
    /// Popularity score at or above which a record counts as highly adopted
    /// in the summary line.
    pub high_popularity: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            star_saturation: 10_000,
            fork_saturation: 2_000,
            recency_half_life_days: 30.0,
            rising_threshold: 25.0,
            flat_threshold: 5.0,
            primary_delta_saturation: 500,
            secondary_delta_saturation: 100,
            related_limit: 6,
            high_popularity: 80.0,
        }
    }
}
