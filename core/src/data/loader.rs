//! File decoding for CSV, gzipped CSV and Parquet.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use arrow::util::display::{ArrayFormatter, FormatOptions};
use flate2::read::GzDecoder;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::{DataFormat, Dataset};
use crate::error::{Error, Result};

/// Decode one data file into text rows
///
/// # Errors
///
/// Returns an error if:
/// - The file name has no supported suffix
/// - The file cannot be opened
/// - The contents are not valid CSV / gzip / Parquet
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let format = DataFormat::from_path(path).ok_or_else(|| Error::UnsupportedFormat {
        name: path.display().to_string(),
    })?;

    let file = File::open(path).map_err(|e| Error::io(e, path))?;

    let dataset = match format {
        DataFormat::Csv => read_csv(BufReader::new(file))?,
        DataFormat::CsvGz => read_csv(GzDecoder::new(BufReader::new(file)))?,
        DataFormat::Parquet => read_parquet(file)?,
    };

    tracing::debug!(
        path = %path.display(),
        ?format,
        columns = dataset.header.len(),
        records = dataset.record_count(),
        "Loaded dataset"
    );
    Ok(dataset)
}

/// Read CSV without header inference; ragged rows are kept as-is
fn read_csv<R: Read>(input: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Dataset::from_rows(rows))
}

fn read_parquet(file: File) -> Result<Dataset> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;

    let header = builder
        .schema()
        .fields()
        .iter()
        .map(|field| field.name().clone())
        .collect();

    let reader = builder.build()?;
    let options = FormatOptions::default().with_null("NULL");

    let mut records = Vec::new();
    for batch in reader {
        let batch = batch?;
        let formatters = batch
            .columns()
            .iter()
            .map(|column| ArrayFormatter::try_new(column.as_ref(), &options))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        for row in 0..batch.num_rows() {
            records.push(
                formatters
                    .iter()
                    .map(|formatter| formatter.value(row).to_string())
                    .collect(),
            );
        }
    }

    Ok(Dataset::new(header, records))
}
