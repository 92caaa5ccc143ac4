//! # Data Loader Crate
//!
//! This crate is the record source for the analyses: it reads the
//! line-delimited JSON movie-credits corpus.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, ActorCredit)
//! - **parser**: Turn corpus lines into `Movie` values, lazily
//! - **locate**: Pick the default corpus file in a data directory
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{latest_dataset, parse_movies};
//! use std::path::Path;
//!
//! let path = latest_dataset(Path::new("data"))?;
//! let movies = parse_movies(&path)?;
//!
//! println!("Loaded {} movies from {}", movies.len(), path.display());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod locate;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{ActorCredit, ActorId, Movie};
pub use parser::{open_movies, parse_movie_line, parse_movies, MovieReader};
pub use locate::{default_dataset, latest_dataset, DEFAULT_DATASET_FILE};
