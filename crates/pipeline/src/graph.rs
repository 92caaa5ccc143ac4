//! Actor co-appearance graph.
//!
//! ## Algorithm
//! 1. Every credited actor on a movie becomes a node (keyed by display name)
//! 2. Every unordered pair of actors on that movie (index i against all j > i)
//!    gets its edge weight bumped by one, starting at 1
//! 3. Every pair update is also logged in encounter order for export
//!
//! Node identity is the actor *name*, so two ids sharing a name collapse into
//! one node. Such a pair on the same movie is still logged but is not an edge.

use crate::traits::{consume_all, MovieConsumer};
use data_loader::Movie;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use tracing::{info, instrument};

/// One co-appearance, as it was encountered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorPair {
    pub left: String,
    pub right: String,
}

/// Undirected weighted graph of actors.
///
/// Stored as a symmetric adjacency map: `adjacency[a][b] == adjacency[b][a]`.
/// Isolated actors (sole credit on every movie they're in) have an empty map.
#[derive(Debug, Clone, Default)]
pub struct ActorGraph {
    adjacency: BTreeMap<String, BTreeMap<String, u32>>,
    pairs: Vec<ActorPair>,
}

impl ActorGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an actor node; a no-op if it already exists
    pub fn add_node(&mut self, name: &str) {
        if !self.adjacency.contains_key(name) {
            self.adjacency.insert(name.to_string(), BTreeMap::new());
        }
    }

    /// Record one shared movie between two credits.
    ///
    /// The pair is always logged. Returns `false` without touching any edge
    /// when both credits carry the same name.
    pub fn add_co_appearance(&mut self, left: &str, right: &str) -> bool {
        self.pairs.push(ActorPair {
            left: left.to_string(),
            right: right.to_string(),
        });
        if left == right {
            return false;
        }

        *self
            .adjacency
            .entry(left.to_string())
            .or_default()
            .entry(right.to_string())
            .or_insert(0) += 1;
        *self
            .adjacency
            .entry(right.to_string())
            .or_default()
            .entry(left.to_string())
            .or_insert(0) += 1;
        true
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum::<usize>() / 2
    }

    /// Number of shared movies between two actors, if they ever co-appeared
    pub fn weight(&self, left: &str, right: &str) -> Option<u32> {
        self.adjacency.get(left)?.get(right).copied()
    }

    /// Number of distinct co-stars
    pub fn degree(&self, name: &str) -> Option<usize> {
        self.adjacency.get(name).map(BTreeMap::len)
    }

    /// Node names in ascending order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Co-stars of an actor with edge weights, in name order
    pub fn neighbors(&self, name: &str) -> impl Iterator<Item = (&str, u32)> {
        self.adjacency
            .get(name)
            .into_iter()
            .flat_map(|n| n.iter().map(|(other, &w)| (other.as_str(), w)))
    }

    /// Each undirected edge once, as `(a, b, weight)` with `a < b`
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, u32)> {
        self.adjacency.iter().flat_map(|(a, neighbors)| {
            neighbors
                .iter()
                .filter(move |(b, _)| a < *b)
                .map(move |(b, &w)| (a.as_str(), b.as_str(), w))
        })
    }

    /// Every pair update in the order movies were processed
    pub fn pairs(&self) -> &[ActorPair] {
        &self.pairs
    }
}

/// Builds an `ActorGraph` one movie at a time
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: ActorGraph,
    movies_used: usize,
    movies_skipped: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MovieConsumer for GraphBuilder {
    type Output = ActorGraph;

    fn name(&self) -> &str {
        "GraphBuilder"
    }

    fn observe(&mut self, movie: &Movie) {
        // Skip if no actors listed
        let Some(actors) = movie.credited_actors() else {
            self.movies_skipped += 1;
            return;
        };
        self.movies_used += 1;

        for actor in actors {
            self.graph.add_node(&actor.name);
        }

        for (i, left) in actors.iter().enumerate() {
            for right in &actors[i + 1..] {
                self.graph.add_co_appearance(&left.name, &right.name);
            }
        }
    }

    fn finish(self) -> ActorGraph {
        info!(
            "Built co-appearance graph: {} nodes, {} edges from {} movies ({} skipped)",
            self.graph.node_count(),
            self.graph.edge_count(),
            self.movies_used,
            self.movies_skipped
        );
        self.graph
    }
}

/// Build the co-appearance graph over a movie sequence
#[instrument(skip_all)]
pub fn build_graph<I>(movies: I) -> ActorGraph
where
    I: IntoIterator,
    I::Item: Borrow<Movie>,
{
    consume_all(GraphBuilder::new(), movies)
}
