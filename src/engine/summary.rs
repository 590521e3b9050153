//! "Why interesting" summary lines
//!
//! One short human-readable string per record, built from up to five phrases
//! in fixed priority order so the same record always reads the same way.

use crate::engine::config::EngineConfig;
use crate::engine::types::{HealthLabel, MomentumLabel, ProjectRecord};

const SEPARATOR: &str = " · ";
const MAX_PHRASES: usize = 5;
const FALLBACK: &str = "generative-media project worth a look";

const MODALITY_TAGS: &[&str] = &["image", "video", "audio", "voice", "3d"];
const TASK_TAGS: &[&str] = &[
    "text-to-image",
    "text-to-video",
    "inpainting",
    "upscaling",
    "lip-sync",
    "avatar",
    "captioning",
    "editing",
];
const ECOSYSTEM_TAGS: &[&str] = &[
    "comfyui",
    "diffusers",
    "automatic1111",
    "stable-diffusion",
    "flux",
    "gradio",
];

fn first_tag<'a>(record: &'a ProjectRecord, bucket: &[&str]) -> Option<&'a str> {
    record
        .tags
        .iter()
        .map(String::as_str)
        .find(|t| bucket.contains(t))
}

fn activity_phrase(record: &ProjectRecord) -> Option<&'static str> {
    if record.momentum_label == MomentumLabel::Rising {
        return Some("gaining momentum this week");
    }
    match record.health_label {
        HealthLabel::Alive => Some("actively maintained"),
        HealthLabel::Steady => Some("steadily maintained"),
        // Nothing to brag about.
        HealthLabel::Decaying => None,
    }
}

fn maintainer_phrase(record: &ProjectRecord) -> Option<&'static str> {
    match record.contributors_90d {
        0 => None,
        1 => Some("single-maintainer project"),
        2..=4 => Some("small active team"),
        5..=9 => Some("healthy contributor bench"),
        _ => Some("large contributor base"),
    }
}

/// Builds the summary line for one scored, tagged record.
pub fn summarize(record: &ProjectRecord, config: &EngineConfig) -> String {
    let mut phrases: Vec<String> = Vec::new();

    if let Some(phrase) = activity_phrase(record) {
        phrases.push(phrase.to_string());
    }
    if let Some(phrase) = maintainer_phrase(record) {
        phrases.push(phrase.to_string());
    }
    if let Some(modality) = first_tag(record, MODALITY_TAGS) {
        phrases.push(format!("{modality} generation"));
    }
    if let Some(task) = first_tag(record, TASK_TAGS) {
        phrases.push(format!("focused on {task}"));
    }
    if let Some(ecosystem) = first_tag(record, ECOSYSTEM_TAGS) {
        phrases.push(format!("fits the {ecosystem} ecosystem"));
    }
    if record.popularity_score >= config.high_popularity {
        phrases.push("highly adopted".to_string());
    }

    if phrases.is_empty() {
        return FALLBACK.to_string();
    }

    phrases.truncate(MAX_PHRASES);
    phrases.join(SEPARATOR)
}
