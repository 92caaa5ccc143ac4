//! Actor-by-genre feature matrix.
//!
//! Each row is an actor (keyed by actor id), each column a genre label, and
//! each cell counts the movies the actor appeared in that carry that genre.
//! A movie with N genres adds one to N cells of every actor credited on it.
//!
//! Columns are the sorted set of every genre seen in the corpus; the dense row
//! of an actor is positionally aligned with them.

use crate::traits::{consume_all, MovieConsumer};
use data_loader::{ActorId, Movie};
use rayon::prelude::*;
use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{info, instrument};

/// One actor's sparse genre counts
#[derive(Debug, Clone, PartialEq)]
pub struct ActorFeatures {
    pub actor_id: ActorId,
    /// First name seen for this id
    pub actor_name: String,
    genre_counts: HashMap<String, u32>,
}

impl ActorFeatures {
    fn new(actor_id: &str, actor_name: &str) -> Self {
        Self {
            actor_id: actor_id.to_string(),
            actor_name: actor_name.to_string(),
            genre_counts: HashMap::new(),
        }
    }

    /// Appearances in `genre`, 0 if never
    pub fn count(&self, genre: &str) -> u32 {
        self.genre_counts.get(genre).copied().unwrap_or(0)
    }

    /// Sum of all genre counts
    pub fn total(&self) -> u32 {
        self.genre_counts.values().sum()
    }
}

/// The full matrix plus its column order
#[derive(Debug, Clone, Default)]
pub struct FeatureMatrix {
    rows: BTreeMap<ActorId, ActorFeatures>,
    genre_columns: Vec<String>,
}

impl FeatureMatrix {
    /// Genre labels, ascending; the column order of every dense row
    pub fn genre_columns(&self) -> &[String] {
        &self.genre_columns
    }

    pub fn actor_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, actor_id: &str) -> Option<&ActorFeatures> {
        self.rows.get(actor_id)
    }

    pub fn actor_name(&self, actor_id: &str) -> Option<&str> {
        self.rows.get(actor_id).map(|r| r.actor_name.as_str())
    }

    /// Cell value; 0 for an unknown actor or genre
    pub fn count(&self, actor_id: &str, genre: &str) -> u32 {
        self.rows.get(actor_id).map_or(0, |r| r.count(genre))
    }

    /// Rows in actor-id order
    pub fn rows(&self) -> impl Iterator<Item = &ActorFeatures> {
        self.rows.values()
    }

    /// Realize one actor's row against `genre_columns`
    pub fn dense_row(&self, actor_id: &str) -> Option<Vec<f64>> {
        self.rows.get(actor_id).map(|r| self.densify(r))
    }

    /// Realize a row of this matrix against `genre_columns`
    pub fn densify(&self, row: &ActorFeatures) -> Vec<f64> {
        self.genre_columns
            .iter()
            .map(|genre| row.count(genre) as f64)
            .collect()
    }

    /// Every row realized, in actor-id order
    pub fn dense_rows(&self) -> Vec<(&ActorFeatures, Vec<f64>)> {
        self.rows
            .par_iter()
            .map(|(_, row)| (row, self.densify(row)))
            .collect()
    }
}

/// Builds a `FeatureMatrix` one movie at a time
#[derive(Debug, Default)]
pub struct FeatureMatrixBuilder {
    rows: BTreeMap<ActorId, ActorFeatures>,
    genres: BTreeSet<String>,
    movies_used: usize,
    movies_skipped: usize,
}

impl FeatureMatrixBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MovieConsumer for FeatureMatrixBuilder {
    type Output = FeatureMatrix;

    fn name(&self) -> &str {
        "FeatureMatrixBuilder"
    }

    fn observe(&mut self, movie: &Movie) {
        // Skip movies without required fields
        let (Some(actors), Some(genres)) = (movie.actors.as_deref(), movie.genre_set()) else {
            self.movies_skipped += 1;
            return;
        };
        self.movies_used += 1;

        for genre in &genres {
            if !self.genres.contains(*genre) {
                self.genres.insert(genre.to_string());
            }
        }

        for actor in actors {
            let row = self
                .rows
                .entry(actor.id.clone())
                .or_insert_with(|| ActorFeatures::new(&actor.id, &actor.name));
            for genre in &genres {
                *row.genre_counts.entry(genre.to_string()).or_insert(0) += 1;
            }
        }
    }

    fn finish(self) -> FeatureMatrix {
        info!(
            "Built feature matrix: {} actors x {} genres from {} movies ({} skipped)",
            self.rows.len(),
            self.genres.len(),
            self.movies_used,
            self.movies_skipped
        );
        FeatureMatrix {
            rows: self.rows,
            genre_columns: self.genres.into_iter().collect(),
        }
    }
}

/// Build the actor-by-genre matrix over a movie sequence
#[instrument(skip_all)]
pub fn build_feature_matrix<I>(movies: I) -> FeatureMatrix
where
    I: IntoIterator,
    I::Item: Borrow<Movie>,
{
    consume_all(FeatureMatrixBuilder::new(), movies)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_corpus() -> Vec<Movie> {
        vec![
            Movie::with_credits(&[("nm1", "Chris"), ("nm2", "Tom")], &["Action", "Adventure"]),
            Movie::with_credits(&[("nm1", "Chris"), ("nm3", "Emma")], &["Drama"]),
            Movie::with_credits(&[("nm3", "Emma")], &["Drama", "Romance"]),
            Movie::with_credits(&[("nm4", "Nobody")], &[]),
        ]
    }

    #[test]
    fn test_counts_per_genre() {
        let matrix = build_feature_matrix(create_test_corpus());

        assert_eq!(matrix.actor_count(), 4);
        assert_eq!(matrix.genre_columns(), &["Action", "Adventure", "Drama", "Romance"]);
        assert_eq!(matrix.count("nm1", "Action"), 1);
        assert_eq!(matrix.count("nm1", "Drama"), 1);
        assert_eq!(matrix.count("nm3", "Drama"), 2);
        assert_eq!(matrix.count("nm2", "Romance"), 0);
        assert_eq!(matrix.count("nm999", "Drama"), 0);
    }

    #[test]
    fn test_dense_row_alignment() {
        let matrix = build_feature_matrix(create_test_corpus());

        assert_eq!(matrix.dense_row("nm1").unwrap(), vec![1.0, 1.0, 1.0, 0.0]);
        assert_eq!(matrix.dense_row("nm3").unwrap(), vec![0.0, 0.0, 2.0, 1.0]);
        assert_eq!(matrix.dense_row("nm4").unwrap(), vec![0.0; 4]);
        assert!(matrix.dense_row("nm999").is_none());
    }

    #[test]
    fn test_row_total_counts_every_genre() {
        let matrix = build_feature_matrix(create_test_corpus());
        // nm1: two movies, three genre tags between them
        assert_eq!(matrix.row("nm1").unwrap().total(), 3);
        // nm3: two movies, one and two genres
        assert_eq!(matrix.row("nm3").unwrap().total(), 3);
    }

    #[test]
    fn test_skips_records_missing_fields() {
        let mut no_genres = Movie::with_credits(&[("nm1", "Chris")], &[]);
        no_genres.genres = None;
        let no_actors = Movie { title: None, actors: None, genres: Some(vec!["Horror".into()]) };

        let matrix = build_feature_matrix(vec![no_genres, no_actors]);
        assert_eq!(matrix.actor_count(), 0);
        assert!(matrix.genre_columns().is_empty());
    }

    #[test]
    fn test_repeated_genre_label_counts_once() {
        let matrix = build_feature_matrix(vec![
            Movie::with_credits(&[("nm1", "Chris"), ("nm2", "Tom")], &["Drama", "Drama", "Action"]),
        ]);

        assert_eq!(matrix.genre_columns(), &["Action", "Drama"]);
        assert_eq!(matrix.count("nm1", "Drama"), 1);
        assert_eq!(matrix.count("nm2", "Drama"), 1);
        assert_eq!(matrix.row("nm1").unwrap().total(), 2);
    }

    #[test]
    fn test_name_is_keyed_by_id() {
        let matrix = build_feature_matrix(vec![
            Movie::with_credits(&[("nm1", "Sam Smith")], &["Comedy"]),
            Movie::with_credits(&[("nm2", "Sam Smith")], &["Horror"]),
            Movie::with_credits(&[("nm1", "Samuel Smith")], &["Comedy"]),
        ]);

        assert_eq!(matrix.actor_count(), 2);
        assert_eq!(matrix.actor_name("nm1"), Some("Sam Smith"));
        assert_eq!(matrix.count("nm1", "Comedy"), 2);
        assert_eq!(matrix.count("nm2", "Comedy"), 0);
    }

    #[test]
    fn test_dense_rows_in_id_order() {
        let matrix = build_feature_matrix(create_test_corpus());
        let ids: Vec<&str> = matrix
            .dense_rows()
            .into_iter()
            .map(|(row, _)| row.actor_id.as_str())
            .collect();
        assert_eq!(ids, vec!["nm1", "nm2", "nm3", "nm4"]);
    }
}
