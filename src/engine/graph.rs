//! Contributor graph export
//!
//! Builds the bipartite person/project graph the contributor view renders.
//! Only GitHub records carry a reliable contributor list, so Hugging Face
//! records are left out. Construction only; layout belongs to the renderer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::engine::types::{ProjectRecord, Source};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Project,
    Person,
}

/// One graph node. Project nodes and person nodes share the envelope and
/// differ in which optional fields they carry, matching the JSON the
/// contributor view consumes.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct GraphNode {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    pub url: String,
    // Project fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_cases: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<u64>,
    // Person fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_contributions: Option<u64>,
}

/// One contributor→project edge.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    pub weight: f64,
    pub contributions: u64,
}

/// The full render-friendly graph with its count header.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ContributorGraph {
    pub node_count: usize,
    pub link_count: usize,
    pub person_count: usize,
    pub project_count: usize,
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

#[derive(Default)]
struct PersonStats {
    project_count: usize,
    total_score: f64,
    total_contributions: u64,
}

/// Builds the contributor graph over the scored corpus.
///
/// Edge weight scales each contributor's contribution count by the project's
/// composite score, so strong projects pull their people toward the center
/// of the rendered view.
pub fn contributor_graph(corpus: &[ProjectRecord]) -> ContributorGraph {
    let mut nodes: Vec<GraphNode> = Vec::new();
    let mut links: Vec<GraphLink> = Vec::new();
    // person node id -> (index into nodes, running stats)
    let mut people: HashMap<String, (usize, PersonStats)> = HashMap::new();

    let gh_items = corpus
        .iter()
        .filter(|r| r.source == Source::Github && !r.contributors.is_empty());

    for project in gh_items {
        let project_id = format!("proj:{}", project.full_name);
        nodes.push(GraphNode {
            id: project_id.clone(),
            kind: NodeKind::Project,
            label: project.name.clone(),
            url: project.url.clone(),
            full_name: Some(project.full_name.clone()),
            score: Some(project.score),
            topics: Some(project.topics.clone()),
            use_cases: Some(project.use_cases.clone()),
            stars: Some(project.stars.unwrap_or(0)),
            avatar_url: None,
            project_count: None,
            total_score: None,
            total_contributions: None,
        });

        for contributor in &project.contributors {
            if contributor.login.is_empty() {
                continue;
            }
            let person_id = format!("person:{}", contributor.login);

            let entry = people.entry(person_id.clone()).or_insert_with(|| {
                nodes.push(GraphNode {
                    id: person_id.clone(),
                    kind: NodeKind::Person,
                    label: contributor.login.clone(),
                    url: contributor
                        .url
                        .clone()
                        .unwrap_or_else(|| format!("https://github.com/{}", contributor.login)),
                    full_name: None,
                    score: None,
                    topics: None,
                    use_cases: None,
                    stars: None,
                    avatar_url: Some(contributor.avatar_url.clone().unwrap_or_default()),
                    project_count: Some(0),
                    total_score: Some(0.0),
                    total_contributions: Some(0),
                });
                (nodes.len() - 1, PersonStats::default())
            });

            entry.1.project_count += 1;
            entry.1.total_score += project.score;
            entry.1.total_contributions += contributor.contributions;

            let weight = contributor.contributions as f64 * (1.0 + project.score / 100.0);
            links.push(GraphLink {
                source: person_id,
                target: project_id.clone(),
                weight,
                contributions: contributor.contributions,
            });
        }
    }

    for (index, stats) in people.into_values() {
        let node = &mut nodes[index];
        node.project_count = Some(stats.project_count);
        node.total_score = Some(stats.total_score);
        node.total_contributions = Some(stats.total_contributions);
    }

    let person_count = nodes.iter().filter(|n| n.kind == NodeKind::Person).count();
    let project_count = nodes.len() - person_count;

    ContributorGraph {
        node_count: nodes.len(),
        link_count: links.len(),
        person_count,
        project_count,
        nodes,
        links,
    }
}
