//! Related-project lookup
//!
//! Two-tier strategy: shared contributors first, tag/topic Jaccard second.
//! Contributor overlap is the stronger "is related" signal, so when it
//! yields anything at all the engine never falls through to keywords.

use std::collections::HashSet;

use crate::engine::config::EngineConfig;
use crate::engine::types::{ProjectRecord, Source};

/// Jaccard similarity between two token sets: |A∩B| / |A∪B|. Zero when
/// either set is empty.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}

/// Lowercased token set for keyword similarity: tags, legacy use cases, and
/// upstream topics together.
fn token_set(record: &ProjectRecord) -> HashSet<String> {
    record
        .tags
        .iter()
        .chain(record.use_cases.iter())
        .chain(record.topics.iter())
        .map(|t| t.to_lowercase())
        .collect()
}

/// Finds up to `config.related_limit` projects related to `selected`,
/// never including `selected` itself.
pub fn related<'a>(
    selected: &ProjectRecord,
    corpus: &'a [ProjectRecord],
    config: &EngineConfig,
) -> Vec<&'a ProjectRecord> {
    if selected.source == Source::Github && !selected.contributors.is_empty() {
        let by_contributors = related_by_contributors(selected, corpus, config.related_limit);
        if !by_contributors.is_empty() {
            return by_contributors;
        }
    }

    related_by_tokens(selected, corpus, config.related_limit)
}

/// Tier 1: rank other GitHub projects by shared contributor logins,
/// tie-broken by the candidate's composite score.
fn related_by_contributors<'a>(
    selected: &ProjectRecord,
    corpus: &'a [ProjectRecord],
    limit: usize,
) -> Vec<&'a ProjectRecord> {
    let own_logins: HashSet<&str> = selected
        .contributors
        .iter()
        .map(|c| c.login.as_str())
        .collect();

    let mut candidates: Vec<(usize, &ProjectRecord)> = corpus
        .iter()
        .filter(|r| r.source == Source::Github && !r.same_record(selected))
        .filter_map(|r| {
            let overlap = r
                .contributors
                .iter()
                .filter(|c| own_logins.contains(c.login.as_str()))
                .count();
            (overlap > 0).then_some((overlap, r))
        })
        .collect();

    candidates.sort_by(|(overlap_a, a), (overlap_b, b)| {
        overlap_b
            .cmp(overlap_a)
            .then_with(|| b.score.total_cmp(&a.score))
    });

    candidates.into_iter().take(limit).map(|(_, r)| r).collect()
}

/// Tier 2: rank every other project by Jaccard similarity over the combined
/// token set. An empty selected token set yields an empty result.
fn related_by_tokens<'a>(
    selected: &ProjectRecord,
    corpus: &'a [ProjectRecord],
    limit: usize,
) -> Vec<&'a ProjectRecord> {
    let own_tokens = token_set(selected);
    if own_tokens.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<(f64, &ProjectRecord)> = corpus
        .iter()
        .filter(|r| !r.same_record(selected))
        .filter_map(|r| {
            let similarity = jaccard(&own_tokens, &token_set(r));
            (similarity > 0.0).then_some((similarity, r))
        })
        .collect();

    candidates.sort_by(|(sim_a, a), (sim_b, b)| {
        sim_b.total_cmp(sim_a).then_with(|| b.score.total_cmp(&a.score))
    });

    candidates.into_iter().take(limit).map(|(_, r)| r).collect()
}
