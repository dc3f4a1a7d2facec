//! Data folder bootstrap
//!
//! A missing data folder is created on first run and seeded with two small
//! CSV files so the screensaver always has something to show.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Application directory name under the user's data dir
const APP_DIR: &str = "csv-screensaver";

/// Built-in sample files: (file name, rows including header)
pub const SAMPLE_FILES: &[(&str, &[&[&str]])] = &[
    (
        "retro_computers.csv",
        &[
            &["Computer", "Year", "CPU", "RAM"],
            &["Commodore 64", "1982", "MOS 6510", "64 KB"],
            &["Apple II", "1977", "MOS 6502", "4 KB"],
            &["IBM PC", "1981", "Intel 8088", "16 KB"],
            &["Atari 800", "1979", "MOS 6502", "8 KB"],
            &["ZX Spectrum", "1982", "Zilog Z80", "16 KB"],
            &["Amiga 500", "1987", "Motorola 68000", "512 KB"],
        ],
    ),
    (
        "fun_facts.csv",
        &[
            &["Fact ID", "Category", "Fact"],
            &["001", "Space", "A day on Venus is longer than its year"],
            &["002", "Ocean", "More people have been to space than the Mariana Trench"],
            &["003", "Nature", "Honey never spoils - it can last thousands of years"],
            &["004", "Tech", "The first computer bug was an actual moth"],
            &["005", "History", "Oxford University predates the Aztec Empire"],
        ],
    ),
];

/// `~/.local/share/csv-screensaver/data` on Linux (XDG data dir elsewhere)
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("share")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("data")
}

/// Create `dir` with sample data if it does not exist yet
///
/// Returns `true` when the folder was created. An existing folder is left
/// untouched, even if empty.
pub fn ensure_data_dir(dir: &Path) -> Result<bool> {
    if dir.exists() {
        return Ok(false);
    }

    fs::create_dir_all(dir).map_err(|e| Error::io(e, dir))?;
    let written = write_sample_files(dir)?;
    tracing::info!(
        dir = %dir.display(),
        files = written.len(),
        "Created data folder with sample files"
    );
    Ok(true)
}

/// Write every entry of [`SAMPLE_FILES`] into `dir`
pub fn write_sample_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(SAMPLE_FILES.len());

    for (name, rows) in SAMPLE_FILES {
        let path = dir.join(name);
        let mut writer = csv::Writer::from_path(&path)?;
        for row in rows.iter() {
            writer.write_record(row.iter())?;
        }
        writer.flush().map_err(|e| Error::io(e, &path))?;
        written.push(path);
    }

    Ok(written)
}
