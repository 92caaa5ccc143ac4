//! Nearest neighbors of a query actor in genre space.
//!
//! ## Algorithm
//! 1. Realize the query's dense genre vector (missing id is an error)
//! 2. Compute cosine and Euclidean distance from the query to every row,
//!    the query included
//! 3. Sort each metric ascending (ties by name, then id), drop the query's
//!    own row by id, keep the next `k`
//! 4. Compare the two top-k lists
//!
//! Cosine distance of a zero vector is defined as 1.0: an actor who never
//! appeared in a genre-tagged movie is maximally dissimilar to everyone.

use crate::error::{AnalysisError, Result};
use crate::features::{ActorFeatures, FeatureMatrix};
use data_loader::ActorId;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, instrument};

/// Cosine distance when either vector has zero norm
pub const ZERO_NORM_COSINE_DISTANCE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceMetric {
    Cosine,
    Euclidean,
}

impl DistanceMetric {
    pub fn distance(&self, u: &[f64], v: &[f64]) -> f64 {
        match self {
            DistanceMetric::Cosine => cosine_distance(u, v),
            DistanceMetric::Euclidean => euclidean_distance(u, v),
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceMetric::Cosine => write!(f, "Cosine Distance"),
            DistanceMetric::Euclidean => write!(f, "Euclidean Distance"),
        }
    }
}

/// 1 - cos(u, v), clamped to [0, 2]
pub fn cosine_distance(u: &[f64], v: &[f64]) -> f64 {
    let dot: f64 = u.iter().zip(v).map(|(a, b)| a * b).sum();
    let norm_u = u.iter().map(|a| a * a).sum::<f64>().sqrt();
    let norm_v = v.iter().map(|b| b * b).sum::<f64>().sqrt();

    if norm_u == 0.0 || norm_v == 0.0 {
        return ZERO_NORM_COSINE_DISTANCE;
    }
    (1.0 - dot / (norm_u * norm_v)).clamp(0.0, 2.0)
}

/// L2 norm of u - v
pub fn euclidean_distance(u: &[f64], v: &[f64]) -> f64 {
    u.iter()
        .zip(v)
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        .sqrt()
}

/// One ranked actor and its distance to the query
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub actor_id: ActorId,
    pub actor_name: String,
    pub distance: f64,
}

impl fmt::Display for Neighbor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.actor_id, self.actor_name)
    }
}

/// How the cosine and Euclidean top-k lists relate
#[derive(Debug, Clone, PartialEq)]
pub enum RankingDiff {
    /// Same actors in the same order
    Identical,
    /// Same actors, different order
    Reordered,
    /// Actors that made only one of the two lists
    Differs {
        only_cosine: Vec<Neighbor>,
        only_euclidean: Vec<Neighbor>,
    },
}

/// Both rankings for one query actor
#[derive(Debug, Clone)]
pub struct SimilarityReport {
    pub query_id: ActorId,
    pub query_name: String,
    pub cosine: Vec<Neighbor>,
    pub euclidean: Vec<Neighbor>,
}

impl SimilarityReport {
    pub fn ranking(&self, metric: DistanceMetric) -> &[Neighbor] {
        match metric {
            DistanceMetric::Cosine => &self.cosine,
            DistanceMetric::Euclidean => &self.euclidean,
        }
    }

    /// Compare the two lists by actor id
    pub fn diff(&self) -> RankingDiff {
        let cosine_ids: Vec<&str> = self.cosine.iter().map(|n| n.actor_id.as_str()).collect();
        let euclidean_ids: Vec<&str> = self.euclidean.iter().map(|n| n.actor_id.as_str()).collect();
        if cosine_ids == euclidean_ids {
            return RankingDiff::Identical;
        }

        let in_cosine: HashSet<&str> = cosine_ids.iter().copied().collect();
        let in_euclidean: HashSet<&str> = euclidean_ids.iter().copied().collect();

        let only_cosine: Vec<Neighbor> = self
            .cosine
            .iter()
            .filter(|n| !in_euclidean.contains(n.actor_id.as_str()))
            .cloned()
            .collect();
        let only_euclidean: Vec<Neighbor> = self
            .euclidean
            .iter()
            .filter(|n| !in_cosine.contains(n.actor_id.as_str()))
            .cloned()
            .collect();

        if only_cosine.is_empty() && only_euclidean.is_empty() {
            RankingDiff::Reordered
        } else {
            RankingDiff::Differs {
                only_cosine,
                only_euclidean,
            }
        }
    }
}

/// Rank the `k` actors nearest to `query_actor_id` under both metrics
#[instrument(skip(matrix))]
pub fn rank_similar(matrix: &FeatureMatrix, query_actor_id: &str, k: usize) -> Result<SimilarityReport> {
    let query_row = matrix
        .row(query_actor_id)
        .ok_or_else(|| AnalysisError::QueryNotFound {
            actor_id: query_actor_id.to_string(),
        })?;
    let query = matrix.densify(query_row);
    let query_name = query_row.actor_name.clone();

    let rows = matrix.dense_rows();
    debug!(
        "Comparing {} ({}) against {} actors over {} genres",
        query_actor_id,
        query_name,
        rows.len(),
        matrix.genre_columns().len()
    );

    Ok(SimilarityReport {
        query_id: query_actor_id.to_string(),
        query_name,
        cosine: nearest(&rows, &query, query_actor_id, DistanceMetric::Cosine, k),
        euclidean: nearest(&rows, &query, query_actor_id, DistanceMetric::Euclidean, k),
    })
}

fn nearest(
    rows: &[(&ActorFeatures, Vec<f64>)],
    query: &[f64],
    query_actor_id: &str,
    metric: DistanceMetric,
    k: usize,
) -> Vec<Neighbor> {
    let mut scored: Vec<Neighbor> = rows
        .par_iter()
        .map(|(row, vector)| Neighbor {
            actor_id: row.actor_id.clone(),
            actor_name: row.actor_name.clone(),
            distance: metric.distance(query, vector),
        })
        .collect();

    scored.sort_by(compare_neighbors);
    scored
        .into_iter()
        .filter(|n| n.actor_id != query_actor_id)
        .take(k)
        .collect()
}

fn compare_neighbors(a: &Neighbor, b: &Neighbor) -> Ordering {
    a.distance
        .total_cmp(&b.distance)
        .then_with(|| a.actor_name.cmp(&b.actor_name))
        .then_with(|| a.actor_id.cmp(&b.actor_id))
}
