//! Health scoring from maintenance-activity telemetry

use crate::engine::config::EngineConfig;
use crate::engine::score::{clamp01, log_norm};
use crate::engine::types::{HealthLabel, ProjectRecord, Source};

const PR_SATURATION: u64 = 20;
const CONTRIBUTOR_SATURATION: u64 = 15;

const RECENCY_WEIGHT: f64 = 0.35;
const ACTIVITY_WEIGHT: f64 = 0.30;
const RESPONSIVENESS_WEIGHT: f64 = 0.20;
const RELEASE_WEIGHT: f64 = 0.15;

/// Exponential decay with the configured half-life. `days = None` means the
/// event never happened, which decays to zero.
fn recency(days: Option<u32>, half_life: f64) -> f64 {
    match days {
        Some(days) => clamp01(0.5_f64.powf(f64::from(days) / half_life)),
        None => 0.0,
    }
}

/// Release cadence score: 1.0 inside 30 days, 0.2 beyond 180, linear in
/// between. No release on record scores like a stale one.
fn release_score(days_since_release: Option<u32>) -> f64 {
    let Some(days) = days_since_release else {
        return 0.2;
    };
    let days = f64::from(days);
    if days < 30.0 {
        1.0
    } else if days > 180.0 {
        0.2
    } else {
        1.0 + (days - 30.0) * (0.2 - 1.0) / (180.0 - 30.0)
    }
}

/// Computes the health score in [0, 100].
///
/// GitHub records combine recency, PR/contributor activity, issue
/// responsiveness, and release cadence. Hugging Face records lack that
/// telemetry, so health is approximated from update recency alone with the
/// same decay shape.
pub fn health_score(record: &ProjectRecord, config: &EngineConfig) -> f64 {
    let half_life = config.recency_half_life_days;

    if record.source == Source::Huggingface {
        return recency(Some(record.days_since_update), half_life) * 100.0;
    }

    // Most recent of push and release, missing dates excluded.
    let last_event = match (record.days_since_push, record.days_since_release) {
        (Some(push), Some(release)) => Some(push.min(release)),
        (Some(push), None) => Some(push),
        (None, Some(release)) => Some(release),
        (None, None) => None,
    };

    let recency_score = recency(last_event, half_life);

    let pr_activity = log_norm(u64::from(record.prs_merged_60d), PR_SATURATION);
    let contrib_activity = log_norm(u64::from(record.contributors_90d), CONTRIBUTOR_SATURATION);
    let activity = 0.6 * pr_activity + 0.4 * contrib_activity;

    let throughput =
        f64::from(record.issues_closed_60d) / f64::from(record.issues_opened_60d.max(1));
    let responsiveness = clamp01(throughput);

    let combined = RECENCY_WEIGHT * recency_score
        + ACTIVITY_WEIGHT * activity
        + RESPONSIVENESS_WEIGHT * responsiveness
        + RELEASE_WEIGHT * release_score(record.days_since_release);

    clamp01(combined) * 100.0
}

/// Health bucket from the score. Exhaustive partition: alive at 70 and
/// above, steady in [40, 70), decaying below 40.
pub fn health_label(health_score: f64) -> HealthLabel {
    if health_score >= 70.0 {
        HealthLabel::Alive
    } else if health_score >= 40.0 {
        HealthLabel::Steady
    } else {
        HealthLabel::Decaying
    }
}
