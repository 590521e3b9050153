//! Tests for lens resolution, the median aggregate, and lens application.

use std::str::FromStr;

use genscope::{
    EngineError, HealthLabel, Lens, LensId, MomentumLabel, ProjectRecord, SortKey, apply,
    apply_lens, lens, median_popularity,
};

use super::common::record;

fn with_popularity(id: &str, popularity: f64) -> ProjectRecord {
    let mut r = record("github", id);
    r.popularity_score = popularity;
    r
}

#[test]
fn test_lens_ids_round_trip() {
    for id in LensId::ALL {
        assert_eq!(LensId::from_str(id.as_str()).unwrap(), id);
    }
}

#[test]
fn test_unknown_lens_is_an_error_not_all() {
    let corpus = vec![record("github", "a")];
    match apply_lens(&corpus, "trending") {
        Err(EngineError::UnknownLens(id)) => assert_eq!(id, "trending"),
        other => panic!("expected UnknownLens, got {other:?}"),
    }
}

#[test]
fn test_median_is_lower_of_middle_two() {
    let even: Vec<ProjectRecord> = [10.0, 20.0, 30.0, 40.0]
        .iter()
        .enumerate()
        .map(|(i, p)| with_popularity(&format!("e{i}"), *p))
        .collect();
    assert_eq!(median_popularity(&even), Some(20.0));

    let odd: Vec<ProjectRecord> = [30.0, 10.0, 20.0]
        .iter()
        .enumerate()
        .map(|(i, p)| with_popularity(&format!("o{i}"), *p))
        .collect();
    assert_eq!(median_popularity(&odd), Some(20.0));

    assert_eq!(median_popularity(&[]), None);
}

#[test]
fn test_empty_corpus_median_comparisons_are_vacuous() {
    // Median lenses over an empty corpus must select nothing, not crash.
    let corpus: Vec<ProjectRecord> = Vec::new();
    assert!(apply_lens(&corpus, "hidden-gems").unwrap().is_empty());
    assert!(apply_lens(&corpus, "single-maintainer-risk").unwrap().is_empty());
}

#[test]
fn test_solo_maintainer_risk_vs_hidden_gems() {
    // Popular solo-maintained record above a corpus median of 40.
    let mut solo = with_popularity("solo", 80.0);
    solo.contributors_90d = 1;
    solo.health_label = HealthLabel::Alive;
    solo.health_score = 85.0;
    solo.days_since_update = 5;

    let mut gem = with_popularity("gem", 15.0);
    gem.contributors_90d = 4;
    gem.health_label = HealthLabel::Alive;
    gem.health_score = 80.0;
    gem.days_since_update = 10;

    let filler_a = with_popularity("fill-a", 40.0);
    let filler_b = with_popularity("fill-b", 40.0);

    // Sorted popularity [15, 40, 40, 80], lower-of-middle-two median 40.
    let corpus = vec![solo, gem, filler_a, filler_b];

    let risky = apply_lens(&corpus, "single-maintainer-risk").unwrap();
    assert_eq!(risky.len(), 1);
    assert_eq!(risky[0].id, "solo");

    let gems = apply_lens(&corpus, "hidden-gems").unwrap();
    assert_eq!(gems.len(), 1);
    assert_eq!(gems[0].id, "gem");
}

#[test]
fn test_production_ready_requires_recent_update() {
    let mut stale_but_alive = record("github", "stale");
    stale_but_alive.health_label = HealthLabel::Alive;
    stale_but_alive.days_since_update = 200;

    let mut fresh_steady = record("github", "fresh");
    fresh_steady.health_label = HealthLabel::Steady;
    fresh_steady.days_since_update = 30;

    let corpus = vec![stale_but_alive, fresh_steady];
    let ready = apply_lens(&corpus, "production-ready").unwrap();
    assert_eq!(ready.len(), 1);
    assert_eq!(ready[0].id, "fresh");
}

#[test]
fn test_tag_driven_lenses() {
    let mut builder = record("github", "builder");
    builder.tags = vec!["comfyui".to_string(), "permissive".to_string()];

    let mut live = record("github", "live");
    live.tags = vec!["streaming".to_string(), "unclear-license".to_string()];

    let mut plain = record("github", "plain");
    plain.tags = vec!["video".to_string(), "permissive".to_string()];

    let corpus = vec![builder, live, plain];

    let builders = apply_lens(&corpus, "composable-builders").unwrap();
    assert_eq!(builders.len(), 1);
    assert_eq!(builders[0].id, "builder");

    let realtime = apply_lens(&corpus, "real-time").unwrap();
    assert_eq!(realtime.len(), 1);
    assert_eq!(realtime[0].id, "live");
}

#[test]
fn test_research_alive_matches_topics_case_insensitively() {
    let mut gh = record("github", "bench");
    gh.topics = vec!["LeaderBoard".to_string()];
    gh.health_label = HealthLabel::Alive;

    let mut hf_recent = record("huggingface", "eval-model");
    hf_recent.use_cases = vec!["research".to_string()];
    hf_recent.topics = vec!["evaluation".to_string()];
    hf_recent.health_label = HealthLabel::Decaying;
    hf_recent.days_since_update = 45;

    let mut hf_stale = record("huggingface", "old-eval");
    hf_stale.topics = vec!["benchmark".to_string()];
    hf_stale.health_label = HealthLabel::Decaying;
    hf_stale.days_since_update = 400;

    let corpus = vec![gh, hf_recent, hf_stale];
    let research = apply_lens(&corpus, "research-alive").unwrap();
    let ids: Vec<&str> = research.iter().map(|r| r.id.as_str()).collect();
    assert!(ids.contains(&"bench"));
    assert!(ids.contains(&"eval-model"));
    assert!(!ids.contains(&"old-eval"));
}

#[test]
fn test_rising_excludes_decaying_and_stale() {
    let mut riser = record("github", "riser");
    riser.momentum_label = MomentumLabel::Rising;
    riser.health_label = HealthLabel::Steady;
    riser.days_since_update = 10;

    let mut stale_riser = record("github", "stale-riser");
    stale_riser.momentum_label = MomentumLabel::Rising;
    stale_riser.health_label = HealthLabel::Alive;
    stale_riser.days_since_update = 90;

    let corpus = vec![riser, stale_riser];
    let rising = apply_lens(&corpus, "rising").unwrap();
    assert_eq!(rising.len(), 1);
    assert_eq!(rising[0].id, "riser");
}

#[test]
fn test_all_lens_sorts_by_health_descending() {
    let mut a = record("github", "a");
    a.health_score = 20.0;
    let mut b = record("github", "b");
    b.health_score = 90.0;
    let mut c = record("github", "c");
    c.health_score = 55.0;

    let corpus = vec![a, b, c];
    let all = apply_lens(&corpus, "all").unwrap();
    let ids: Vec<&str> = all.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c", "a"]);
}

#[test]
fn test_ties_preserve_input_order() {
    // Identical health scores: a stable sort keeps corpus order, so two
    // runs over the same snapshot agree.
    let ids = ["first", "second", "third"];
    let corpus: Vec<ProjectRecord> = ids
        .iter()
        .map(|id| {
            let mut r = record("github", id);
            r.health_score = 50.0;
            r
        })
        .collect();

    let selected = apply_lens(&corpus, "all").unwrap();
    let got: Vec<&str> = selected.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(got, ids);
}

#[test]
fn test_custom_newest_lens_sorts_ascending_by_update_age() {
    // The built-in registry has no "newest" lens, but the public Lens
    // fields let callers build one; the sort runs ascending so today's
    // updates come first.
    let mut old = record("github", "old");
    old.days_since_update = 120;
    let mut today = record("github", "today");
    today.days_since_update = 0;
    let mut recent = record("github", "recent");
    recent.days_since_update = 7;

    let newest = Lens {
        id: LensId::All,
        predicate: |_, _| true,
        sort: SortKey::Newest,
    };

    let corpus = vec![old, today, recent];
    let selected = apply(&corpus, &newest);
    let ids: Vec<&str> = selected.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["today", "recent", "old"]);
}

#[test]
fn test_lens_registry_covers_all_ids() {
    for id in LensId::ALL {
        assert_eq!(lens(id).id, id);
    }
}
