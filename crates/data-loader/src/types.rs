//! Core domain types for the movie-credits corpus.
//!
//! Each line of the corpus is one JSON object. Only the fields the analyses
//! need are modelled; everything else on the line is ignored by serde.
//!
//! Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (ActorId)
//! - `Option<T>` for fields that may be missing from a record
//! - `#[serde(from = ...)]` to decode a JSON pair into a named struct

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// Type Aliases
// =============================================================================

/// Stable IMDB-style identifier for an actor (e.g. "nm1165110")
pub type ActorId = String;

// =============================================================================
// Credits
// =============================================================================

/// One actor credited on a movie.
///
/// On the wire this is a two-element array `["nm1165110", "Chris Hemsworth"]`,
/// so serde goes through the `(String, String)` tuple in both directions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct ActorCredit {
    pub id: ActorId,
    pub name: String,
}

impl ActorCredit {
    pub fn new(id: impl Into<ActorId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl From<(String, String)> for ActorCredit {
    fn from((id, name): (String, String)) -> Self {
        Self { id, name }
    }
}

impl From<ActorCredit> for (String, String) {
    fn from(credit: ActorCredit) -> Self {
        (credit.id, credit.name)
    }
}

// =============================================================================
// Movie
// =============================================================================

/// A movie record from the corpus
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Display title, if the record carries one
    #[serde(default)]
    pub title: Option<String>,

    /// Credited actors in billing order
    ///
    /// `None` means the key was missing (or `null`) on the record
    #[serde(default)]
    pub actors: Option<Vec<ActorCredit>>,

    /// Genre labels attached to the movie
    #[serde(default)]
    pub genres: Option<Vec<String>>,
}

impl Movie {
    /// Build an untitled movie from `(id, name)` credits and genre labels
    pub fn with_credits(actors: &[(&str, &str)], genres: &[&str]) -> Self {
        Self {
            title: None,
            actors: Some(
                actors
                    .iter()
                    .map(|&(id, name)| ActorCredit::new(id, name))
                    .collect(),
            ),
            genres: Some(genres.iter().map(|g| g.to_string()).collect()),
        }
    }

    /// Credited actors, or `None` when the list is missing or empty
    pub fn credited_actors(&self) -> Option<&[ActorCredit]> {
        self.actors.as_deref().filter(|actors| !actors.is_empty())
    }

    /// Distinct genre labels, or `None` when the key is missing
    ///
    /// Sorted, so a label listed twice on one record is only seen once
    pub fn genre_set(&self) -> Option<BTreeSet<&str>> {
        self.genres
            .as_ref()
            .map(|genres| genres.iter().map(String::as_str).collect())
    }
}
