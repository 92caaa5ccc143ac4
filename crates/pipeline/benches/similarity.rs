//! Benchmarks for the two analysis branches
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic corpus so no dataset download is needed.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::Movie;
use pipeline::{build_feature_matrix, build_graph, rank_by_degree_centrality, rank_similar};

const GENRES: [&str; 8] = [
    "Action", "Adventure", "Comedy", "Crime", "Drama", "Horror", "Romance", "Thriller",
];

/// 5000 movies, 8 credits each, drawn from a pool of 2000 actors
fn synthetic_corpus() -> Vec<Movie> {
    (0..5000usize)
        .map(|m| {
            let credits: Vec<(String, String)> = (0..8)
                .map(|slot| {
                    let actor = (m * 7 + slot * 131) % 2000;
                    (format!("nm{:07}", actor), format!("Actor {}", actor))
                })
                .collect();
            let credits: Vec<(&str, &str)> =
                credits.iter().map(|(id, name)| (id.as_str(), name.as_str())).collect();
            let genres: Vec<&str> = (0..1 + m % 3)
                .map(|g| GENRES[(m + g * 3) % GENRES.len()])
                .collect();

            let mut movie = Movie::with_credits(&credits, &genres);
            movie.title = Some(format!("Movie {}", m));
            movie
        })
        .collect()
}

fn bench_build_graph(c: &mut Criterion) {
    let movies = synthetic_corpus();

    c.bench_function("build_graph", |b| {
        b.iter(|| {
            let graph = build_graph(black_box(&movies));
            black_box(rank_by_degree_centrality(&graph, 10))
        })
    });
}

fn bench_rank_similar(c: &mut Criterion) {
    let movies = synthetic_corpus();
    let matrix = build_feature_matrix(&movies);

    c.bench_function("rank_similar", |b| {
        b.iter(|| {
            let report = rank_similar(&matrix, black_box("nm0000007"), black_box(10)).unwrap();
            black_box(report)
        })
    });
}

criterion_group!(benches, bench_build_graph, bench_rank_similar);
criterion_main!(benches);
