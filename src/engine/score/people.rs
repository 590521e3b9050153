//! People scoring: maintainer count, bench depth, bus factor

use crate::engine::score::log_norm;
use crate::engine::types::ProjectRecord;

const MAINTAINER_SATURATION: u64 = 10;
const BENCH_SATURATION: u64 = 5;

/// A co-contributor is significant when they carry more than this share of
/// the leader's contribution count.
const SIGNIFICANT_SHARE: f64 = 0.05;

/// Bus-factor bucket score from the leader's share of total contributions.
fn bus_score(top_share: f64) -> f64 {
    if top_share > 0.70 {
        10.0
    } else if top_share > 0.50 {
        20.0
    } else if top_share >= 0.15 {
        30.0
    } else {
        15.0
    }
}

/// Computes the people score in [0, 100].
///
/// Three components: recent maintainer count (40 pts), bench depth of
/// significant co-contributors behind the leader (30 pts), and a bus-factor
/// bucket from ownership concentration (30 pts). A record with no
/// contributor list scores zero on bench and bus regardless of the
/// concentration buckets.
pub fn people_score(record: &ProjectRecord) -> f64 {
    let maintainer_score =
        log_norm(u64::from(record.contributors_90d), MAINTAINER_SATURATION) * 40.0;

    if record.contributors.is_empty() {
        return maintainer_score;
    }

    let top = record
        .contributors
        .iter()
        .map(|c| c.contributions)
        .max()
        .unwrap_or(0);
    let total: u64 = record.contributors.iter().map(|c| c.contributions).sum();

    // The list is ordered by contribution count descending, so the leader
    // is the first entry; bench depth counts everyone behind them.
    let significant = record
        .contributors
        .iter()
        .skip(1)
        .filter(|c| c.contributions as f64 > SIGNIFICANT_SHARE * top as f64)
        .count();

    let bench = log_norm(significant as u64, BENCH_SATURATION) * 30.0;

    // Denominator floored to 1 so an all-zero contribution list cannot
    // divide by zero.
    let top_share = top as f64 / (total.max(1)) as f64;

    maintainer_score + bench + bus_score(top_share)
}
