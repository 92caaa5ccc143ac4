use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{default_dataset, latest_dataset, parse_movies, Movie, DEFAULT_DATASET_FILE};
use pipeline::{
    build_feature_matrix, build_graph, rank_by_degree_centrality, rank_similar, save_pairs_csv,
    save_similar_csv, DistanceMetric, RankingDiff, SimilarityReport,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

const DEFAULT_CORPUS_URL: &str =
    "https://github.com/cbuntain/umd.inst414/blob/main/data/imdb_movies_2000to2022.prolific.json?raw=true";

/// Chris Hemsworth
const DEFAULT_QUERY_ACTOR: &str = "nm1165110";

/// costar - co-appearance and genre-similarity analysis of movie credits
#[derive(Parser)]
#[command(name = "costar")]
#[command(about = "Actor co-appearance centrality and genre similarity over a movie-credits corpus", long_about = None)]
struct Cli {
    /// Directory holding the corpus and the CSV exports
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the corpus into the data directory
    Fetch {
        /// Where to download the line-delimited JSON corpus from
        #[arg(long, default_value = DEFAULT_CORPUS_URL)]
        url: String,

        /// File name to save it under, inside the data directory
        #[arg(long, default_value = DEFAULT_DATASET_FILE)]
        output: String,
    },

    /// Build the co-appearance graph and rank actors by degree centrality
    Centrality {
        /// Corpus to read (default: newest .json in the data directory)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Number of actors to show
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Find the actors most similar to a query actor by genre
    Similar {
        /// Corpus to read (default: the fetched corpus in the data directory)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Actor id of the query actor
        #[arg(long, default_value = DEFAULT_QUERY_ACTOR)]
        actor: String,

        /// Number of neighbors per metric
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Run fetch, centrality and similarity in order
    All {
        /// Reuse the corpus already in the data directory
        #[arg(long)]
        skip_fetch: bool,

        /// Actor id of the query actor
        #[arg(long, default_value = DEFAULT_QUERY_ACTOR)]
        actor: String,

        /// Number of results per ranking
        #[arg(long, default_value = "10")]
        top: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.as_path();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Fetch { url, output } => {
            handle_fetch(data_dir, &url, &output).await?;
        }
        Commands::Centrality { input, top } => handle_centrality(data_dir, input, top)?,
        Commands::Similar { input, actor, top } => handle_similar(data_dir, input, &actor, top)?,
        Commands::All {
            skip_fetch,
            actor,
            top,
        } => {
            if !skip_fetch {
                handle_fetch(data_dir, DEFAULT_CORPUS_URL, DEFAULT_DATASET_FILE).await?;
            }
            handle_centrality(data_dir, None, top)?;
            handle_similar(data_dir, None, &actor, top)?;
        }
    }

    Ok(())
}

/// Handle the 'fetch' command
async fn handle_fetch(data_dir: &Path, url: &str, output: &str) -> Result<PathBuf> {
    fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;
    let path = data_dir.join(output);

    info!("Downloading corpus from {}", url);
    let start = Instant::now();
    let response = reqwest::get(url)
        .await
        .with_context(|| format!("Failed to download corpus from {}", url))?;

    if !response.status().is_success() {
        return Err(anyhow!("Failed to download corpus: HTTP {}", response.status()));
    }

    let bytes = response
        .bytes()
        .await
        .context("Failed to read corpus body")?;
    fs::write(&path, &bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Downloaded {} bytes in {:?}", bytes.len(), start.elapsed());

    // Read it back once so a bad download fails here, not in a later stage
    let movies = parse_movies(&path).context("Downloaded corpus is not line-delimited movie JSON")?;

    println!("{} Data saved to: {}", "✓".green(), path.display());
    println!("{} movies", movies.len());
    for movie in movies.iter().take(5) {
        let actors = movie.actors.as_ref().map_or(0, Vec::len);
        println!(
            "  - {} ({} actors)",
            movie.title.as_deref().unwrap_or("<untitled>"),
            actors
        );
    }
    Ok(path)
}

/// Handle the 'centrality' command
fn handle_centrality(data_dir: &Path, input: Option<PathBuf>, top: usize) -> Result<()> {
    let path = match input {
        Some(path) => path,
        None => latest_dataset(data_dir).context("No corpus to analyze")?,
    };
    println!("Using dataset: {}", path.display());
    let movies = load_corpus(&path)?;

    let graph = build_graph(&movies);
    println!("Nodes: {}", graph.node_count());

    println!("{}", format!("\nTop {} Most Central Actors:", top).bold().blue());
    for score in rank_by_degree_centrality(&graph, top) {
        println!("{}", score);
    }

    let output = save_pairs_csv(data_dir, graph.pairs()).context("Failed to save actor pairs")?;
    println!(
        "\n{} Network centrality data saved to: {}",
        "✓".green(),
        output.display()
    );
    Ok(())
}

/// Handle the 'similar' command
fn handle_similar(data_dir: &Path, input: Option<PathBuf>, actor: &str, top: usize) -> Result<()> {
    let path = input.unwrap_or_else(|| default_dataset(data_dir));
    let movies = load_corpus(&path)?;

    let matrix = build_feature_matrix(&movies);
    let report = rank_similar(&matrix, actor, top)?;

    let output = save_similar_csv(data_dir, &report.cosine).context("Failed to save similar actors")?;

    for metric in [DistanceMetric::Cosine, DistanceMetric::Euclidean] {
        print_ranking(&report, metric, top);
    }
    print_diff(&report, top);

    println!(
        "\n{} Similar actors (cosine) saved to: {}",
        "✓".green(),
        output.display()
    );
    Ok(())
}

fn load_corpus(path: &Path) -> Result<Vec<Movie>> {
    let start = Instant::now();
    let movies = parse_movies(path).with_context(|| format!("Failed to load {}", path.display()))?;
    info!("Loaded {} movies in {:?}", movies.len(), start.elapsed());
    Ok(movies)
}

fn print_ranking(report: &SimilarityReport, metric: DistanceMetric, top: usize) {
    println!(
        "{}",
        format!(
            "\nTop {} actors most similar to {} ({}):",
            top, report.query_name, metric
        )
        .bold()
        .blue()
    );
    for neighbor in report.ranking(metric) {
        println!("{}", neighbor);
    }
}

fn print_diff(report: &SimilarityReport, top: usize) {
    match report.diff() {
        RankingDiff::Identical => {
            println!("\nBoth cosine and euclidean top {} lists are identical.", top);
        }
        RankingDiff::Reordered => {
            println!(
                "\nBoth cosine and euclidean top {} lists contain the same actors, in a different order.",
                top
            );
        }
        RankingDiff::Differs {
            only_cosine,
            only_euclidean,
        } => {
            println!("\nDifferences between cosine and euclidean top {} lists:", top);
            for neighbor in &only_cosine {
                println!("  {} {}", "cosine only:".yellow(), neighbor);
            }
            for neighbor in &only_euclidean {
                println!("  {} {}", "euclidean only:".yellow(), neighbor);
            }
        }
    }
}
