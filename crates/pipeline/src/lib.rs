//! Analyses over the movie-credits corpus.
//!
//! This crate provides:
//! - MovieConsumer trait for single-pass builders
//! - Co-appearance graph and degree-centrality ranking
//! - Actor-by-genre feature matrix and nearest-neighbor ranking
//! - CSV exports for both
//!
//! ## Architecture
//! The two branches are independent and only share the record shape:
//! 1. `build_graph` → `rank_by_degree_centrality` (+ pair export)
//! 2. `build_feature_matrix` → `rank_similar` (+ cosine top-k export)
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{build_graph, build_feature_matrix, rank_by_degree_centrality, rank_similar};
//!
//! let movies = data_loader::parse_movies(&path)?;
//!
//! let graph = build_graph(&movies);
//! for score in rank_by_degree_centrality(&graph, 10) {
//!     println!("{}", score);
//! }
//!
//! let matrix = build_feature_matrix(&movies);
//! let report = rank_similar(&matrix, "nm1165110", 10)?;
//! ```

pub mod error;
pub mod traits;
pub mod graph;
pub mod centrality;
pub mod features;
pub mod similarity;
pub mod export;

// Re-export main types
pub use error::{AnalysisError, Result};
pub use traits::{consume_all, MovieConsumer};
pub use graph::{build_graph, ActorGraph, ActorPair, GraphBuilder};
pub use centrality::{degree_centrality, rank_by_degree_centrality, CentralityScore};
pub use features::{build_feature_matrix, ActorFeatures, FeatureMatrix, FeatureMatrixBuilder};
pub use similarity::{
    cosine_distance, euclidean_distance, rank_similar, DistanceMetric, Neighbor, RankingDiff,
    SimilarityReport,
};
pub use export::{save_pairs_csv, save_similar_csv, write_pairs_csv, write_similar_csv};
