//! Content Preparation
//!
//! Produces the frame text for a run: bootstrap the folder, pick a file,
//! load, sample and format it. Every failure becomes a placeholder message
//! so the screensaver always has something to type out.

use std::path::Path;

use rand::Rng;
use tracing::{info, warn};

use crate::config::ScreensaverConfig;
use crate::data::{self, Dataset};
use crate::error::Result;

/// Placeholder when the folder holds no supported files
pub fn no_files_message(dir: &Path) -> String {
    format!("No CSV or Parquet files found in: {}", dir.display())
}

/// Placeholder for a file without any rows
pub fn empty_file_message(name: &str) -> String {
    format!("Empty file: {name}")
}

/// Placeholder for any read or parse failure
pub fn load_error_message(err: &dyn std::fmt::Display) -> String {
    format!("Error loading file: {err}")
}

/// Build the frame text for this run; never fails
pub fn prepare_frame_text<R: Rng + ?Sized>(config: &ScreensaverConfig, rng: &mut R) -> String {
    let dir = config.data_dir.as_path();

    let files = match data::ensure_data_dir(dir).and_then(|_| data::find_data_files(dir)) {
        Ok(files) => files,
        Err(err) => {
            warn!(dir = %dir.display(), error = %err, "Data folder unreadable");
            return load_error_message(&err);
        }
    };

    let Some(path) = data::choose_file(&files, rng) else {
        warn!(dir = %dir.display(), "No data files found");
        return no_files_message(dir);
    };

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    info!(file = %name, candidates = files.len(), "Selected data file");

    match load_limited(path, config.max_rows, rng) {
        Ok(dataset) if dataset.is_empty() => {
            warn!(file = %name, "Selected file is empty");
            empty_file_message(&name)
        }
        Ok(dataset) => config.formatter.format(&dataset, Some(&name)),
        Err(err) => {
            warn!(file = %name, error = %err, "Failed to load data file");
            load_error_message(&err)
        }
    }
}

fn load_limited<R: Rng + ?Sized>(path: &Path, max_rows: usize, rng: &mut R) -> Result<Dataset> {
    Ok(data::load_dataset(path)?.limit_rows(max_rows, rng))
}
