//! Degree centrality over the co-appearance graph.
//!
//! ## Algorithm
//! centrality(v) = distinct co-stars of v / (node count - 1)
//!
//! Ranking is by score descending, then actor name ascending, so equal scores
//! always come out in the same order.

use crate::graph::ActorGraph;
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

/// An actor's normalized degree centrality
#[derive(Debug, Clone, PartialEq)]
pub struct CentralityScore {
    pub actor_name: String,
    pub score: f64,
}

impl fmt::Display for CentralityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.4}", self.actor_name, self.score)
    }
}

/// Degree centrality for every node, in node-name order.
///
/// A graph with fewer than two nodes has no possible neighbors, so every
/// node scores 0.
pub fn degree_centrality(graph: &ActorGraph) -> Vec<CentralityScore> {
    let denominator = graph.node_count().saturating_sub(1);

    graph
        .nodes()
        .map(|name| {
            let degree = graph.degree(name).unwrap_or(0);
            let score = if denominator == 0 {
                0.0
            } else {
                degree as f64 / denominator as f64
            };
            CentralityScore {
                actor_name: name.to_string(),
                score,
            }
        })
        .collect()
}

/// Top-`k` actors by degree centrality
pub fn rank_by_degree_centrality(graph: &ActorGraph, k: usize) -> Vec<CentralityScore> {
    let mut scores = degree_centrality(graph);
    scores.sort_by(compare_scores);
    scores.truncate(k);

    debug!("Ranked {} of {} actors by degree centrality", scores.len(), graph.node_count());
    scores
}

fn compare_scores(a: &CentralityScore, b: &CentralityScore) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.actor_name.cmp(&b.actor_name))
}
