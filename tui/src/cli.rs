//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

/// Retro screensaver that types out a random CSV or Parquet file
#[derive(Debug, Parser)]
#[command(name = "csv-screensaver", version, about)]
pub struct Cli {
    /// Folder scanned for .csv, .csv.gz and .parquet files
    /// (overrides CSV_SCREENSAVER_DATA_DIR)
    pub data_dir: Option<PathBuf>,
}
