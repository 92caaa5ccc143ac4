//! Parser for line-delimited JSON movie corpora.
//!
//! Each non-blank line is one movie object:
//! `{"title": "...", "actors": [["nm0000129", "Tom Cruise"], ...], "genres": ["Action"]}`
//!
//! Rust concepts you'll learn here:
//! - Implementing `Iterator` for a lazy record source
//! - Generic readers (`BufRead`) so tests never touch the filesystem
//! - Error handling with `?` and `map_err`

use crate::error::{DataLoadError, Result};
use crate::types::Movie;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Lines};
use std::path::Path;
use tracing::debug;

/// Lazily yields one `Movie` per non-blank line of a reader.
///
/// Iteration stops being useful after the first `Err`; callers typically
/// `collect::<Result<Vec<_>>>()` and propagate.
pub struct MovieReader<R> {
    lines: Lines<R>,
    line_no: usize,
    source: String,
}

impl<R: BufRead> MovieReader<R> {
    /// Wrap any buffered reader. `source` is only used in error messages.
    pub fn new(reader: R, source: impl Into<String>) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            source: source.into(),
        }
    }
}

impl<R: BufRead> Iterator for MovieReader<R> {
    type Item = Result<Movie>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_no += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue; // Skip empty lines
            }
            return Some(parse_movie_line(trimmed, &self.source, self.line_no));
        }
    }
}

/// Parse a single corpus line into a `Movie`
///
/// Missing `actors`/`genres` keys are fine here (they become `None`);
/// a line that isn't a movie-shaped JSON object is a `ParseError`.
pub fn parse_movie_line(line: &str, source: &str, line_no: usize) -> Result<Movie> {
    serde_json::from_str(line).map_err(|e| DataLoadError::ParseError {
        file: source.to_string(),
        line: line_no,
        reason: e.to_string(),
    })
}

/// Open a corpus file as a lazy movie stream
pub fn open_movies(path: &Path) -> Result<MovieReader<BufReader<File>>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;
    Ok(MovieReader::new(BufReader::new(file), path.display().to_string()))
}

/// Read a whole corpus file into memory
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    let movies = open_movies(path)?.collect::<Result<Vec<_>>>()?;
    debug!("Parsed {} movies from {}", movies.len(), path.display());
    Ok(movies)
}
