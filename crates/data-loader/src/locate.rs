//! Resolving which corpus file a stage should read.
//!
//! The analyses themselves take an explicit path; these helpers only pick a
//! default when the operator didn't pass one.

use crate::error::{DataLoadError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;

/// File name the fetch stage writes and the similarity stage reads
pub const DEFAULT_DATASET_FILE: &str = "imdb_movies_2000to2022.prolific.json";

/// Path of the fixed-name corpus inside `data_dir`
pub fn default_dataset(data_dir: &Path) -> PathBuf {
    data_dir.join(DEFAULT_DATASET_FILE)
}

/// Find the most recently created `.json` file in `data_dir`
///
/// Creation time isn't available on every filesystem; modification time is
/// used there instead. Ties go to the lexicographically greatest path.
pub fn latest_dataset(data_dir: &Path) -> Result<PathBuf> {
    let no_dataset = || DataLoadError::NoDataset {
        dir: data_dir.display().to_string(),
    };

    let entries = match fs::read_dir(data_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(no_dataset()),
        Err(e) => return Err(e.into()),
    };

    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let metadata = entry.metadata()?;
        if !is_json || !metadata.is_file() {
            continue;
        }

        let stamp = metadata.created().or_else(|_| metadata.modified())?;
        let candidate = (stamp, path);
        newest = match newest {
            Some(current) if current >= candidate => Some(current),
            _ => Some(candidate),
        };
    }

    let (_, path) = newest.ok_or_else(no_dataset)?;
    debug!("Latest dataset in {}: {}", data_dir.display(), path.display());
    Ok(path)
}
