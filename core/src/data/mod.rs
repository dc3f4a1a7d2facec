//! Data Loader
//!
//! Finds tabular files in the data folder, picks one at random, decodes it
//! into rows of text cells and keeps large datasets to a random sample.
//!
//! Supported inputs, detected by file name (case-insensitive):
//!
//! | Suffix       | Decoder                                  |
//! |--------------|------------------------------------------|
//! | `.csv`       | `csv` reader                             |
//! | `.csv.gz`    | `flate2` gzip stream into the csv reader |
//! | `.parquet`   | `parquet` Arrow record batch reader      |

mod loader;
mod samples;

use std::fs;
use std::path::{Path, PathBuf};

use rand::seq::{index, SliceRandom};
use rand::Rng;

use crate::error::{Error, Result};

pub use loader::load_dataset;
pub use samples::{default_data_dir, ensure_data_dir, write_sample_files, SAMPLE_FILES};

/// Default cap on data rows kept from one file
pub const DEFAULT_MAX_ROWS: usize = 10_000;

/// Tabular file formats the loader understands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataFormat {
    Csv,
    CsvGz,
    Parquet,
}

impl DataFormat {
    /// Detect the format from a file name
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_lowercase();
        if name.ends_with(".csv.gz") {
            Some(Self::CsvGz)
        } else if name.ends_with(".csv") {
            Some(Self::Csv)
        } else if name.ends_with(".parquet") {
            Some(Self::Parquet)
        } else {
            None
        }
    }
}

/// A decoded table: one header row plus data records
///
/// Records are not forced to the header's width; the formatter deals with
/// ragged rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    pub header: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(header: Vec<String>, records: Vec<Vec<String>>) -> Self {
        Self { header, records }
    }

    /// Build from raw rows where the first row is the header
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let mut rows = rows.into_iter();
        let header = rows.next().unwrap_or_default();
        Self {
            header,
            records: rows.collect(),
        }
    }

    /// No header and no records
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.records.is_empty()
    }

    /// Number of data records (header excluded)
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Keep at most `max_rows` records, sampled uniformly without replacement
    ///
    /// The header is always kept and surviving records stay in file order.
    pub fn limit_rows<R: Rng + ?Sized>(mut self, max_rows: usize, rng: &mut R) -> Self {
        let total = self.records.len();
        if total <= max_rows {
            return self;
        }

        let mut keep = index::sample(rng, total, max_rows).into_vec();
        keep.sort_unstable();

        let mut wanted = keep.into_iter().peekable();
        self.records = std::mem::take(&mut self.records)
            .into_iter()
            .enumerate()
            .filter_map(|(idx, record)| {
                if wanted.peek() == Some(&idx) {
                    wanted.next();
                    Some(record)
                } else {
                    None
                }
            })
            .collect();

        tracing::debug!(total, kept = self.records.len(), "Sampled dataset rows");
        self
    }
}

/// List supported data files in `dir`, sorted by path
pub fn find_data_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(e, dir))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && DataFormat::from_path(path).is_some())
        .collect();
    files.sort();
    Ok(files)
}

/// Pick one file uniformly at random
pub fn choose_file<'a, R: Rng + ?Sized>(files: &'a [PathBuf], rng: &mut R) -> Option<&'a PathBuf> {
    files.choose(rng)
}
