//! Manual overrides: tag replacements and per-source blocklists
//!
//! Both come from external config and are consumed verbatim. A tag override
//! replaces the computed tag set for its record entirely; it never merges.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::engine::error::{EngineError, EngineResult};
use crate::engine::types::{ProjectRecord, Source};

/// External override config, deserialized from the pipeline's TOML file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OverrideConfig {
    /// Replacement tag lists keyed by `"source:id"`.
    #[serde(default)]
    pub tags: HashMap<String, Vec<String>>,
    /// Record ids to drop before scoring, keyed by source name.
    #[serde(default)]
    pub blocklist: HashMap<String, Vec<String>>,
}

impl OverrideConfig {
    /// Validates every key up front so a malformed entry aborts the batch
    /// before any record is touched.
    pub fn validate(&self) -> EngineResult<()> {
        for key in self.tags.keys() {
            let (source, id) = key
                .split_once(':')
                .ok_or_else(|| EngineError::MalformedOverride { key: key.clone() })?;
            if Source::parse(source).is_none() || id.is_empty() {
                return Err(EngineError::MalformedOverride { key: key.clone() });
            }
        }
        for source in self.blocklist.keys() {
            if Source::parse(source).is_none() {
                return Err(EngineError::UnknownSource(source.clone()));
            }
        }
        Ok(())
    }

    /// Replacement tag list for a record, if one is configured.
    pub fn tags_for(&self, record: &ProjectRecord) -> Option<&[String]> {
        self.tags.get(&record.key()).map(Vec::as_slice)
    }

    /// True when the record is blocklisted and must not be scored.
    pub fn is_blocked(&self, record: &ProjectRecord) -> bool {
        self.blocklist
            .get(record.source.as_str())
            .is_some_and(|ids| ids.iter().any(|id| *id == record.id))
    }
}
