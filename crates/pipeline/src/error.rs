//! Error types for the analysis pipeline.

use thiserror::Error;

/// Errors raised by the analysis stages
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The query actor has no row in the feature matrix
    #[error("Query actor {actor_id} not found in dataset")]
    QueryNotFound { actor_id: String },

    /// Writing an export failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
