//! Discovery lenses: named predicate + sort combinations
//!
//! A lens selects and orders a subset of the scored corpus for one discovery
//! intent. Predicates may consult one corpus-level aggregate, the median
//! popularity score, which is computed once per pass over the full corpus
//! rather than the filtered subset.

use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;

use crate::engine::error::{EngineError, EngineResult};
use crate::engine::types::{HealthLabel, MomentumLabel, ProjectRecord, Source};

lazy_static! {
    /// Research-activity signals scanned over tags, use cases, and topics.
    static ref RESEARCH_RE: Result<Regex, regex::Error> =
        Regex::new(r"(?i)benchmark|eval|paper|arxiv|metrics|leaderboard");
}

/// True when any token carries a research-activity signal. A regex that
/// failed to compile matches nothing.
fn is_research_token(token: &str) -> bool {
    match RESEARCH_RE.as_ref() {
        Ok(re) => re.is_match(token),
        Err(_) => false,
    }
}

/// Identifier of a built-in lens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LensId {
    All,
    HiddenGems,
    ProductionReady,
    ComposableBuilders,
    RealTime,
    ResearchAlive,
    SingleMaintainerRisk,
    Rising,
}

impl LensId {
    pub const ALL: [LensId; 8] = [
        LensId::All,
        LensId::HiddenGems,
        LensId::ProductionReady,
        LensId::ComposableBuilders,
        LensId::RealTime,
        LensId::ResearchAlive,
        LensId::SingleMaintainerRisk,
        LensId::Rising,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LensId::All => "all",
            LensId::HiddenGems => "hidden-gems",
            LensId::ProductionReady => "production-ready",
            LensId::ComposableBuilders => "composable-builders",
            LensId::RealTime => "real-time",
            LensId::ResearchAlive => "research-alive",
            LensId::SingleMaintainerRisk => "single-maintainer-risk",
            LensId::Rising => "rising",
        }
    }
}

impl FromStr for LensId {
    type Err = EngineError;

    /// An unknown lens id is a configuration error, never silently "all".
    fn from_str(s: &str) -> EngineResult<LensId> {
        LensId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| EngineError::UnknownLens(s.to_string()))
    }
}

/// Sort key applied after filtering. All keys sort descending except
/// `Newest`, which sorts by days since update ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Health,
    Popularity,
    People,
    Momentum,
    Newest,
}

/// Corpus-level aggregates available to lens predicates. Computed once per
/// lens application over the full corpus.
#[derive(Clone, Copy, Debug)]
pub struct CorpusAggregates {
    /// Median popularity score, `None` for an empty corpus. With no median,
    /// both "below median" and "above median" are vacuously false.
    pub median_popularity: Option<f64>,
}

impl CorpusAggregates {
    pub fn compute(corpus: &[ProjectRecord]) -> CorpusAggregates {
        CorpusAggregates {
            median_popularity: median_popularity(corpus),
        }
    }

    fn below_median(&self, record: &ProjectRecord) -> bool {
        self.median_popularity
            .is_some_and(|median| record.popularity_score < median)
    }

    fn above_median(&self, record: &ProjectRecord) -> bool {
        self.median_popularity
            .is_some_and(|median| record.popularity_score > median)
    }
}

/// Median popularity across the corpus: sort ascending and take the
/// lower-of-middle-two for even lengths, no interpolation.
pub fn median_popularity(corpus: &[ProjectRecord]) -> Option<f64> {
    if corpus.is_empty() {
        return None;
    }
    let mut scores: Vec<f64> = corpus.iter().map(|r| r.popularity_score).collect();
    scores.sort_by(f64::total_cmp);
    Some(scores[(scores.len() - 1) / 2])
}

/// One lens: id, membership predicate, and sort key. Public fields so
/// callers can define custom lenses beyond the built-in registry.
pub struct Lens {
    pub id: LensId,
    pub predicate: fn(&ProjectRecord, &CorpusAggregates) -> bool,
    pub sort: SortKey,
}

/// Looks up a built-in lens.
pub fn lens(id: LensId) -> Lens {
    match id {
        LensId::All => Lens {
            id,
            predicate: |_, _| true,
            sort: SortKey::Health,
        },
        LensId::HiddenGems => Lens {
            id,
            predicate: |r, agg| {
                r.health_label == HealthLabel::Alive
                    && r.days_since_update <= 60
                    && r.contributors_90d >= 2
                    && agg.below_median(r)
            },
            sort: SortKey::Health,
        },
        LensId::ProductionReady => Lens {
            id,
            predicate: |r, _| {
                (matches!(r.health_label, HealthLabel::Alive | HealthLabel::Steady)
                    || r.days_since_update <= 180)
                    && r.days_since_update <= 180
            },
            sort: SortKey::Health,
        },
        LensId::ComposableBuilders => Lens {
            id,
            predicate: |r, _| {
                const BUILDER_TAGS: &[&str] = &[
                    "comfyui",
                    "diffusers",
                    "automatic1111",
                    "node-graph",
                    "plugin",
                    "library",
                    "nodes",
                ];
                r.tags.iter().any(|t| BUILDER_TAGS.contains(&t.as_str()))
            },
            sort: SortKey::Health,
        },
        LensId::RealTime => Lens {
            id,
            predicate: |r, _| {
                const REALTIME_TAGS: &[&str] =
                    &["realtime", "real-time", "interactive", "streaming", "on-device"];
                r.tags.iter().any(|t| REALTIME_TAGS.contains(&t.as_str()))
            },
            sort: SortKey::Health,
        },
        LensId::ResearchAlive => Lens {
            id,
            predicate: |r, _| {
                let research_signal = r
                    .tags
                    .iter()
                    .chain(r.use_cases.iter())
                    .chain(r.topics.iter())
                    .any(|t| is_research_token(t));
                research_signal
                    && (r.health_label == HealthLabel::Alive
                        || (r.source == Source::Huggingface && r.days_since_update <= 90))
            },
            sort: SortKey::Health,
        },
        LensId::SingleMaintainerRisk => Lens {
            id,
            predicate: |r, agg| r.contributors_90d <= 1 && agg.above_median(r),
            sort: SortKey::Popularity,
        },
        LensId::Rising => Lens {
            id,
            // Sorted by health for now; momentum sort needs a confirmed
            // velocity signal across the whole corpus first.
            predicate: |r, _| {
                r.momentum_label == MomentumLabel::Rising
                    && r.days_since_update <= 60
                    && r.health_label != HealthLabel::Decaying
            },
            sort: SortKey::Health,
        },
    }
}

/// Applies a lens to the corpus: compute aggregates, filter, stable sort.
///
/// Stable sort on input order makes repeated runs over an identical corpus
/// deterministic without explicit tie-break rules.
pub fn apply<'a>(corpus: &'a [ProjectRecord], lens: &Lens) -> Vec<&'a ProjectRecord> {
    let aggregates = CorpusAggregates::compute(corpus);

    let mut selected: Vec<&ProjectRecord> = corpus
        .iter()
        .filter(|r| (lens.predicate)(r, &aggregates))
        .collect();

    match lens.sort {
        SortKey::Health => selected.sort_by(|a, b| b.health_score.total_cmp(&a.health_score)),
        SortKey::Popularity => {
            selected.sort_by(|a, b| b.popularity_score.total_cmp(&a.popularity_score));
        }
        SortKey::People => selected.sort_by(|a, b| b.people_score.total_cmp(&a.people_score)),
        SortKey::Momentum => {
            selected.sort_by(|a, b| b.momentum_score.total_cmp(&a.momentum_score));
        }
        SortKey::Newest => selected.sort_by_key(|r| r.days_since_update),
    }

    selected
}

/// Resolves a lens id and applies it in one call.
pub fn apply_lens<'a>(
    corpus: &'a [ProjectRecord],
    id: &str,
) -> EngineResult<Vec<&'a ProjectRecord>> {
    let lens = lens(LensId::from_str(id)?);
    Ok(apply(corpus, &lens))
}
