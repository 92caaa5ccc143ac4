//! Core traits for the analysis pipeline.
//!
//! Both analysis branches are a single pass over the record source that
//! folds each movie into an aggregate. `MovieConsumer` is that fold.

use data_loader::Movie;
use std::borrow::Borrow;
use tracing::debug;

/// Something that accumulates movies into an aggregate.
///
/// ## Design Note
/// - `observe` borrows the movie, so one parsed corpus can feed both branches
/// - `finish` consumes the builder and hands back an immutable result
pub trait MovieConsumer {
    /// What the consumer produces once every movie has been seen
    type Output;

    /// Returns the name of this consumer (for logging/debugging)
    fn name(&self) -> &str;

    /// Fold one movie into the aggregate.
    ///
    /// Records missing the fields this consumer needs are skipped, not errors.
    fn observe(&mut self, movie: &Movie);

    /// Finish accumulation and return the aggregate
    fn finish(self) -> Self::Output;
}

/// Drive a consumer over a movie sequence (owned or borrowed movies).
pub fn consume_all<C, I>(mut consumer: C, movies: I) -> C::Output
where
    C: MovieConsumer,
    I: IntoIterator,
    I::Item: Borrow<Movie>,
{
    let mut seen = 0usize;
    for movie in movies {
        consumer.observe(movie.borrow());
        seen += 1;
    }
    debug!("{} observed {} movies", consumer.name(), seen);
    consumer.finish()
}
