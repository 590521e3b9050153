//! Discovery engine: scoring, tagging, lenses, and related-project lookup
//!
//! The engine is a pure batch transform: it receives a full corpus snapshot
//! from the ingestion pipeline, attaches tags, scores, labels, and summary
//! lines to every record, and hands the corpus back. Lens application and
//! related-project lookup run over the scored corpus afterwards. No network
//! or disk access happens here.

pub mod config;
pub mod error;
pub mod graph;
pub mod lens;
pub mod overrides;
pub mod related;
pub mod score;
pub mod summary;
pub mod tags;
pub mod types;

use log::{debug, info};

use config::EngineConfig;
use error::EngineResult;
use overrides::OverrideConfig;
use types::ProjectRecord;

/// Runs the full per-record pass over a corpus snapshot.
///
/// Phase order: validate configuration, drop blocklisted records, then the
/// order-independent per-record pass (tags with overrides, use cases,
/// scores, labels, composite, summary). Input order is preserved for the
/// surviving records. Per-record data quality never fails the batch; only
/// structural misconfiguration does, before any record is touched.
pub fn process_corpus(
    records: Vec<ProjectRecord>,
    overrides: &OverrideConfig,
    config: &EngineConfig,
) -> EngineResult<Vec<ProjectRecord>> {
    tags::validate_pattern_table()?;
    overrides.validate()?;

    let total = records.len();
    let mut corpus: Vec<ProjectRecord> = Vec::with_capacity(total);

    for mut record in records {
        if overrides.is_blocked(&record) {
            info!("dropping blocklisted record {}", record.key());
            continue;
        }

        let description = record.description.clone().unwrap_or_default();
        record.tags = match overrides.tags_for(&record) {
            // An override replaces the computed set entirely.
            Some(replacement) => replacement.to_vec(),
            None => tags::extract_tags(&description, &record.topics, record.license.as_deref()),
        };
        record.use_cases = tags::extract_use_cases(&description, &record.topics);

        let scores = score::score(&record, config);
        record.popularity_score = scores.popularity_score;
        record.health_score = scores.health_score;
        record.people_score = scores.people_score;
        record.momentum_score = scores.momentum_score;
        record.health_label = scores.health_label;
        record.momentum_label = scores.momentum_label;
        record.score = scores.score;

        record.summary = summary::summarize(&record, config);

        debug!(
            "scored {}: popularity {:.1}, health {:.1} ({}), people {:.1}",
            record.key(),
            record.popularity_score,
            record.health_score,
            record.health_label.as_str(),
            record.people_score,
        );

        corpus.push(record);
    }

    info!("scored {} of {} records", corpus.len(), total);
    Ok(corpus)
}
