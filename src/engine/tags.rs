//! Tag extraction from free text, topics, and license metadata
//!
//! Tagging is a declarative table scan, not branching logic: each entry maps
//! a lowercase keyword to a tag within a category. Categories are scanned in
//! a fixed order so the tag list is stable for display.

use crate::engine::error::{EngineError, EngineResult};

/// License buckets. Exactly one of these is always present in a record's
/// tag set.
pub const LICENSE_PERMISSIVE: &str = "permissive";
pub const LICENSE_RESTRICTED: &str = "restricted";
pub const LICENSE_UNCLEAR: &str = "unclear-license";

/// (keyword, tag) pairs per category. A keyword is matched as a substring of
/// the lowercased description/topic text; a match contributes its tag once.
///
/// Scan order: modality, task, ecosystem, control, pipeline, runtime.
pub(crate) static TAG_PATTERNS: &[(&str, &[(&str, &str)])] = &[
    (
        "modality",
        &[
            ("image", "image"),
            ("img2img", "image"),
            ("video", "video"),
            ("audio", "audio"),
            ("music", "audio"),
            ("speech", "voice"),
            ("voice", "voice"),
            ("tts", "voice"),
            ("3d", "3d"),
            ("mesh", "3d"),
            ("gaussian splat", "3d"),
        ],
    ),
    (
        "task",
        &[
            ("text-to-image", "text-to-image"),
            ("text to image", "text-to-image"),
            ("text-to-video", "text-to-video"),
            ("text to video", "text-to-video"),
            ("inpaint", "inpainting"),
            ("outpaint", "inpainting"),
            ("upscal", "upscaling"),
            ("super-resolution", "upscaling"),
            ("lip sync", "lip-sync"),
            ("lipsync", "lip-sync"),
            ("talking head", "avatar"),
            ("avatar", "avatar"),
            ("caption", "captioning"),
            ("edit", "editing"),
        ],
    ),
    (
        "ecosystem",
        &[
            ("comfyui", "comfyui"),
            ("comfy-ui", "comfyui"),
            ("diffusers", "diffusers"),
            ("automatic1111", "automatic1111"),
            ("a1111", "automatic1111"),
            ("stable diffusion", "stable-diffusion"),
            ("stable-diffusion", "stable-diffusion"),
            ("sdxl", "stable-diffusion"),
            ("flux", "flux"),
            ("gradio", "gradio"),
        ],
    ),
    (
        "control",
        &[
            ("controlnet", "controlnet"),
            ("control net", "controlnet"),
            ("lora", "lora"),
            ("ip-adapter", "ip-adapter"),
            ("pose", "pose-control"),
            ("depth map", "depth-control"),
        ],
    ),
    (
        "pipeline",
        &[
            ("node-graph", "node-graph"),
            ("node graph", "node-graph"),
            ("node-based", "node-graph"),
            ("nodes", "nodes"),
            ("plugin", "plugin"),
            ("extension", "plugin"),
            ("library", "library"),
            ("sdk", "library"),
            ("workflow", "workflow"),
            ("pipeline", "workflow"),
        ],
    ),
    (
        "runtime",
        &[
            ("real-time", "real-time"),
            ("realtime", "realtime"),
            ("interactive", "interactive"),
            ("streaming", "streaming"),
            ("on-device", "on-device"),
            ("on device", "on-device"),
        ],
    ),
];

/// (keyword, use case) pairs for the legacy `use_cases` field. Coarser than
/// tags and allowed to overlap with them.
pub(crate) static USE_CASE_PATTERNS: &[(&str, &str)] = &[
    ("image", "image-generation"),
    ("diffusion", "image-generation"),
    ("video", "video-generation"),
    ("audio", "audio-generation"),
    ("music", "audio-generation"),
    ("voice", "voice-cloning"),
    ("speech", "voice-cloning"),
    ("train", "model-training"),
    ("finetun", "model-training"),
    ("fine-tun", "model-training"),
    ("edit", "editing"),
    ("benchmark", "research"),
    ("paper", "research"),
    ("arxiv", "research"),
];

/// Substrings that classify a license string as permissive or restricted.
static PERMISSIVE_LICENSES: &[&str] = &["mit", "apache", "bsd"];
static RESTRICTED_LICENSES: &[&str] =
    &["gpl", "agpl", "noncommercial", "non-commercial", "research-only"];

/// Verifies the compiled-in pattern table is usable. An empty table would
/// make every lens that consults tags vacuous, so the pipeline refuses to
/// run with one.
pub(crate) fn validate_pattern_table() -> EngineResult<()> {
    if TAG_PATTERNS.iter().all(|(_, entries)| entries.is_empty()) {
        return Err(EngineError::EmptyPatternTable);
    }
    Ok(())
}

/// Builds the lowercased haystack the keyword tables are matched against.
fn haystack(text: &str, topics: &[String]) -> String {
    let mut hay = text.to_lowercase();
    for topic in topics {
        hay.push(' ');
        hay.push_str(&topic.to_lowercase());
    }
    hay
}

/// Maps license metadata to exactly one license bucket tag. Absent or
/// unrecognized license text is unclear, never an error.
pub fn license_bucket(license: Option<&str>) -> &'static str {
    let Some(license) = license else {
        return LICENSE_UNCLEAR;
    };
    let license = license.to_lowercase();
    if PERMISSIVE_LICENSES.iter().any(|k| license.contains(k)) {
        LICENSE_PERMISSIVE
    } else if RESTRICTED_LICENSES.iter().any(|k| license.contains(k)) {
        LICENSE_RESTRICTED
    } else {
        LICENSE_UNCLEAR
    }
}

/// Extracts the categorical tag set for one record.
///
/// Pure and idempotent: identical inputs always yield the identical list.
/// The list is deduplicated and kept in category-scan order, with the
/// license bucket appended last. Empty text and topics yield only the
/// license bucket. Extraction never fails, it only yields fewer tags.
pub fn extract_tags(text: &str, topics: &[String], license: Option<&str>) -> Vec<String> {
    let hay = haystack(text, topics);
    let mut tags: Vec<String> = Vec::new();

    for (_category, entries) in TAG_PATTERNS {
        for (keyword, tag) in *entries {
            if hay.contains(keyword) && !tags.iter().any(|t| t == tag) {
                tags.push((*tag).to_string());
            }
        }
    }

    tags.push(license_bucket(license).to_string());
    tags
}

/// Extracts the legacy use-case list with the same scanning mechanism as
/// [`extract_tags`]. No license bucket here.
pub fn extract_use_cases(text: &str, topics: &[String]) -> Vec<String> {
    let hay = haystack(text, topics);
    let mut cases: Vec<String> = Vec::new();

    for (keyword, use_case) in USE_CASE_PATTERNS {
        if hay.contains(keyword) && !cases.iter().any(|c| c == use_case) {
            cases.push((*use_case).to_string());
        }
    }

    cases
}
