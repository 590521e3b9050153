//! Tests for the two-tier related-project engine.

use genscope::{EngineConfig, ProjectRecord, related};

use super::common::{contributor, record};

fn with_contributors(id: &str, logins: &[&str]) -> ProjectRecord {
    let mut r = record("github", id);
    r.contributors = logins
        .iter()
        .map(|login| contributor(login, 10))
        .collect();
    r
}

fn with_tags(source: &str, id: &str, tags: &[&str]) -> ProjectRecord {
    let mut r = record(source, id);
    r.tags = tags.iter().map(|t| t.to_string()).collect();
    r
}

#[test]
fn test_contributor_overlap_wins_over_tags() {
    let mut selected = with_contributors("selected", &["ana", "ben", "chris"]);
    selected.tags = vec!["video".to_string()];

    let two_shared = with_contributors("two-shared", &["ana", "ben", "dee"]);
    let one_shared = with_contributors("one-shared", &["chris", "eli"]);
    // Tag twin with zero shared contributors: must not appear at all once
    // tier one yields anything.
    let tag_twin = with_tags("github", "tag-twin", &["video"]);

    let corpus = vec![
        selected.clone(),
        two_shared,
        one_shared,
        tag_twin,
    ];

    let config = EngineConfig::default();
    let result = related(&selected, &corpus, &config);
    let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["two-shared", "one-shared"]);
}

#[test]
fn test_overlap_ties_break_on_composite_score() {
    let selected = with_contributors("selected", &["ana", "ben"]);

    let mut weak = with_contributors("weak", &["ana"]);
    weak.score = 20.0;
    let mut strong = with_contributors("strong", &["ben"]);
    strong.score = 70.0;

    let corpus = vec![selected.clone(), weak, strong];
    let result = related(&selected, &corpus, &EngineConfig::default());
    let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["strong", "weak"]);
}

#[test]
fn test_falls_back_to_jaccard_without_overlap() {
    let mut selected = with_contributors("selected", &["ana"]);
    selected.tags = vec!["video".to_string(), "comfyui".to_string()];

    let close = with_tags("github", "close", &["video", "comfyui", "permissive"]);
    let far = with_tags("huggingface", "far", &["video", "lora", "flux", "restricted"]);
    let unrelated = with_tags("github", "unrelated", &["audio"]);

    let corpus = vec![selected.clone(), close, far, unrelated];
    let result = related(&selected, &corpus, &EngineConfig::default());
    let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["close", "far"]);
}

#[test]
fn test_empty_token_set_yields_empty_result() {
    // Hugging Face record with no tags, use cases, or topics: tier one
    // does not apply and tier two has nothing to match on.
    let selected = record("huggingface", "blank");
    let other = with_tags("github", "other", &["video"]);

    let corpus = vec![selected.clone(), other];
    assert!(related(&selected, &corpus, &EngineConfig::default()).is_empty());
}

#[test]
fn test_selected_record_is_never_its_own_neighbor() {
    let selected = with_tags("github", "self", &["video"]);
    let corpus = vec![selected.clone(), with_tags("github", "peer", &["video"])];

    let result = related(&selected, &corpus, &EngineConfig::default());
    assert!(result.iter().all(|r| r.id != "self"));
}

#[test]
fn test_result_is_capped_at_the_configured_limit() {
    let selected = with_tags("github", "hub", &["video"]);
    let mut corpus = vec![selected.clone()];
    for i in 0..10 {
        corpus.push(with_tags("github", &format!("peer-{i}"), &["video"]));
    }

    let config = EngineConfig::default();
    let result = related(&selected, &corpus, &config);
    assert_eq!(result.len(), config.related_limit);
}

#[test]
fn test_topics_and_use_cases_join_the_token_set() {
    let mut selected = record("huggingface", "model");
    selected.topics = vec!["Diffusion".to_string()];

    let mut candidate = record("github", "repo");
    candidate.use_cases = vec!["diffusion".to_string()];

    // Token sets are lowercased before comparison, so the topic and the
    // use case match.
    let corpus = vec![selected.clone(), candidate];
    let result = related(&selected, &corpus, &EngineConfig::default());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "repo");
}
