use data_loader::{latest_dataset, parse_movies};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

fn main() {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| latest_dataset(Path::new("data")).expect("No dataset in data/"));

    println!("Loading movie corpus from {}...\n", path.display());

    let start = Instant::now();
    let movies = parse_movies(&path).expect("Failed to load corpus");
    let elapsed = start.elapsed();

    let credited = movies.iter().filter(|m| m.credited_actors().is_some()).count();
    let actors: HashSet<&str> = movies
        .iter()
        .filter_map(|m| m.credited_actors())
        .flatten()
        .map(|a| a.id.as_str())
        .collect();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", movies.len());
    println!("Movies with credits: {}", credited);
    println!("Distinct actors: {}", actors.len());
    println!("\nPerformance: {:.0} movies/second",
             movies.len() as f64 / elapsed.as_secs_f64());
}
