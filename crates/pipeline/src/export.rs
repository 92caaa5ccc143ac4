//! CSV exports for the two analyses.
//!
//! - `network_centrality_{timestamp}.csv`: every pair update,
//!   `left_actor_name,<->,right_actor_name`
//! - `similar_actors_genre_{timestamp}.csv`: the cosine top-k,
//!   `actor_id,actor_name`
//!
//! Writers are generic over `io::Write` so tests can render into a `Vec<u8>`.

use crate::error::Result;
use crate::graph::ActorPair;
use crate::similarity::Neighbor;
use chrono::{DateTime, Local};
use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Literal value of the middle column of the pair export
pub const PAIR_SEPARATOR: &str = "<->";

pub const PAIRS_FILE_PREFIX: &str = "network_centrality";
pub const SIMILAR_FILE_PREFIX: &str = "similar_actors_genre";

/// Write the pair list with its header row
pub fn write_pairs_csv<W: Write>(mut writer: W, pairs: &[ActorPair]) -> Result<()> {
    writeln!(writer, "left_actor_name,{},right_actor_name", PAIR_SEPARATOR)?;
    for pair in pairs {
        writeln!(
            writer,
            "{},{},{}",
            csv_field(&pair.left),
            PAIR_SEPARATOR,
            csv_field(&pair.right)
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Write ranked neighbors (id and name only) with a header row
pub fn write_similar_csv<W: Write>(mut writer: W, neighbors: &[Neighbor]) -> Result<()> {
    writeln!(writer, "actor_id,actor_name")?;
    for neighbor in neighbors {
        writeln!(
            writer,
            "{},{}",
            csv_field(&neighbor.actor_id),
            csv_field(&neighbor.actor_name)
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// `{dir}/{prefix}_{YYYYmmdd_HHMMSS}.csv`
pub fn timestamped_csv_path(dir: &Path, prefix: &str, at: &DateTime<Local>) -> PathBuf {
    dir.join(format!("{}_{}.csv", prefix, at.format("%Y%m%d_%H%M%S")))
}

/// Save the pair export into `dir`, returning the file written
pub fn save_pairs_csv(dir: &Path, pairs: &[ActorPair]) -> Result<PathBuf> {
    let path = create_artifact(dir, PAIRS_FILE_PREFIX)?;
    write_pairs_csv(BufWriter::new(File::create(&path)?), pairs)?;
    info!("Wrote {} actor pairs to {}", pairs.len(), path.display());
    Ok(path)
}

/// Save the similarity export into `dir`, returning the file written
pub fn save_similar_csv(dir: &Path, neighbors: &[Neighbor]) -> Result<PathBuf> {
    let path = create_artifact(dir, SIMILAR_FILE_PREFIX)?;
    write_similar_csv(BufWriter::new(File::create(&path)?), neighbors)?;
    info!("Wrote {} similar actors to {}", neighbors.len(), path.display());
    Ok(path)
}

fn create_artifact(dir: &Path, prefix: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    Ok(timestamped_csv_path(dir, prefix, &Local::now()))
}

/// Quote a field if it contains a comma, quote or line break
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn pair(left: &str, right: &str) -> ActorPair {
        ActorPair {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    #[test]
    fn test_pairs_csv_layout() {
        let mut out = Vec::new();
        write_pairs_csv(&mut out, &[pair("A", "B"), pair("A", "B"), pair("B", "C")]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "left_actor_name,<->,right_actor_name\nA,<->,B\nA,<->,B\nB,<->,C\n"
        );
    }

    #[test]
    fn test_similar_csv_layout() {
        let neighbors = vec![
            Neighbor { actor_id: "nm0000129".into(), actor_name: "Tom Cruise".into(), distance: 0.01 },
            Neighbor { actor_id: "nm0147147".into(), actor_name: "Henry Cavill".into(), distance: 0.02 },
        ];
        let mut out = Vec::new();
        write_similar_csv(&mut out, &neighbors).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "actor_id,actor_name\nnm0000129,Tom Cruise\nnm0147147,Henry Cavill\n"
        );
    }

    #[test]
    fn test_fields_are_quoted_when_needed() {
        assert_eq!(csv_field("Plain Name"), "Plain Name");
        assert_eq!(csv_field("Downey, Jr."), "\"Downey, Jr.\"");
        assert_eq!(csv_field("Dwayne \"The Rock\" Johnson"), "\"Dwayne \"\"The Rock\"\" Johnson\"");
    }

    #[test]
    fn test_timestamped_path() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let path = timestamped_csv_path(Path::new("data"), PAIRS_FILE_PREFIX, &at);
        assert_eq!(path, Path::new("data/network_centrality_20240309_140507.csv"));
    }

    #[test]
    fn test_save_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out");

        let path = save_pairs_csv(&target, &[pair("A", "B")]).unwrap();
        assert!(path.starts_with(&target));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("network_centrality_") && name.ends_with(".csv"));

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
    }
}
