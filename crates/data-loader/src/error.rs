//! Error types for the data-loader crate.
//!
//! Only structural failures are errors here. A record that parses but lacks
//! `actors` or `genres` is not an error: consumers skip it.

use thiserror::Error;

/// Errors that can occur while locating or reading a movie corpus
///
/// Rust concept: the `#[derive(Error)]` macro from thiserror implements
/// `std::error::Error` and `Display` from the `#[error(...)]` attributes
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The data directory holds no `.json` corpus (or doesn't exist)
    #[error("No JSON dataset found in {dir}. Run the fetch stage first.")]
    NoDataset { dir: String },

    /// An explicitly requested file could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in the corpus isn't a movie object
    ///
    /// This variant stores context about where the error occurred
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
