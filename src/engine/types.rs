//! Type definitions for the discovery engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Origin of a tracked project.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Github,
    Huggingface,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Github => "github",
            Source::Huggingface => "huggingface",
        }
    }

    /// Parses the lowercase wire form used in override keys and blocklists.
    pub fn parse(s: &str) -> Option<Source> {
        match s {
            "github" => Some(Source::Github),
            "huggingface" => Some(Source::Huggingface),
            _ => None,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One contributor as reported by the ingestion pipeline, ordered by
/// contribution count descending.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Contributor {
    pub login: String,
    #[serde(default)]
    pub contributions: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Health bucket derived from `health_score`. Alive at 70 and above,
/// steady in [40, 70), decaying below 40.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HealthLabel {
    Alive,
    Steady,
    #[default]
    Decaying,
}

impl HealthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthLabel::Alive => "alive",
            HealthLabel::Steady => "steady",
            HealthLabel::Decaying => "decaying",
        }
    }
}

/// Week-over-week growth bucket derived from `momentum_score`.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MomentumLabel {
    Rising,
    Steady,
    #[default]
    Flat,
}

impl MomentumLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MomentumLabel::Rising => "rising",
            MomentumLabel::Steady => "steady",
            MomentumLabel::Flat => "flat",
        }
    }
}

/// One tracked open-source artifact: a GitHub repository or a Hugging Face
/// model. Raw telemetry comes from the ingestion pipeline; the derived
/// fields are written only by [`process_corpus`](crate::engine::process_corpus)
/// and are recomputed wholesale on every batch.
///
/// `(source, id)` is the primary key.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ProjectRecord {
    pub source: Source,
    pub id: String,
    pub name: String,
    pub full_name: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub license: Option<String>,

    // Popularity inputs. Absent means "not reported", which scores as zero
    // but stays distinguishable from a literal zero for display.
    #[serde(default)]
    pub stars: Option<u64>,
    #[serde(default)]
    pub forks: Option<u64>,
    #[serde(default)]
    pub downloads: Option<u64>,
    #[serde(default)]
    pub likes: Option<u64>,

    // Recency inputs.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub days_since_update: u32,

    // Health inputs. GitHub only; Hugging Face records leave these absent
    // and fall back to update recency.
    #[serde(default)]
    pub days_since_push: Option<u32>,
    #[serde(default)]
    pub days_since_release: Option<u32>,
    #[serde(default)]
    pub commits_30d: u32,
    #[serde(default)]
    pub commits_90d: u32,
    #[serde(default)]
    pub contributors_90d: u32,
    #[serde(default)]
    pub prs_merged_60d: u32,
    #[serde(default)]
    pub issues_opened_60d: u32,
    #[serde(default)]
    pub issues_closed_60d: u32,

    // People inputs.
    #[serde(default)]
    pub contributors: Vec<Contributor>,

    // Week-over-week deltas, supplied by the ingestion pipeline when two
    // snapshots exist. Absent on the first snapshot.
    #[serde(default)]
    pub stars_delta_7d: Option<i64>,
    #[serde(default)]
    pub forks_delta_7d: Option<i64>,
    #[serde(default)]
    pub downloads_delta_7d: Option<i64>,
    #[serde(default)]
    pub likes_delta_7d: Option<i64>,

    // Derived fields below. Never hand-edit; the scoring pass owns them.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub use_cases: Vec<String>,
    #[serde(default)]
    pub popularity_score: f64,
    #[serde(default)]
    pub health_score: f64,
    #[serde(default)]
    pub people_score: f64,
    #[serde(default)]
    pub momentum_score: f64,
    #[serde(default)]
    pub health_label: HealthLabel,
    #[serde(default)]
    pub momentum_label: MomentumLabel,
    /// Popularity/health composite used for tie-breaks and the graph export.
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub summary: String,
}

impl ProjectRecord {
    /// Stable identity key, also the format used by tag-override maps.
    pub fn key(&self) -> String {
        format!("{}:{}", self.source, self.id)
    }

    /// True when `other` is the same record by `(source, id)`.
    pub fn same_record(&self, other: &ProjectRecord) -> bool {
        self.source == other.source && self.id == other.id
    }
}
