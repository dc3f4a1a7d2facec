//! Frame Text formatting
//!
//! Renders a [`Dataset`] as a fixed-width table framed by the retro
//! "DATA RETRIEVAL SYSTEM" banner. Widths are measured in terminal columns
//! so wide glyphs line up.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::data::Dataset;

/// Width of the `=` banner rules
pub const BANNER_WIDTH: usize = 70;

/// Column separator between cells
const CELL_SEPARATOR: &str = " | ";

/// Marker appended to cells cut at the column cap
const ELLIPSIS: char = '…';

/// Turns datasets into frame text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameFormatter {
    /// Maximum column width (after padding); `None` = unlimited
    pub column_cap: Option<usize>,
    /// Extra columns added to each column's content width
    pub padding: usize,
}

impl FrameFormatter {
    pub const fn new() -> Self {
        Self {
            column_cap: None,
            padding: 2,
        }
    }

    #[must_use]
    pub const fn with_column_cap(mut self, cap: Option<usize>) -> Self {
        self.column_cap = cap;
        self
    }

    #[must_use]
    pub const fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Format `dataset` into frame text
    ///
    /// `source_name` (the file name) appears in the banner when known.
    pub fn format(&self, dataset: &Dataset, source_name: Option<&str>) -> String {
        let rule = "=".repeat(BANNER_WIDTH);
        let mut lines: Vec<String> = vec![
            rule.clone(),
            "  DATA RETRIEVAL SYSTEM v1.0".to_string(),
            "  [ CLASSIFIED INFORMATION ]".to_string(),
            rule.clone(),
            String::new(),
            match source_name {
                Some(name) => format!("Loading file: {name}"),
                None => "Initializing data stream...".to_string(),
            },
            String::new(),
        ];

        if !dataset.header.is_empty() {
            let widths = self.column_widths(dataset);

            let header_line = format_row(&dataset.header, &widths);
            let separator = "-".repeat(header_line.width());
            lines.push(header_line);
            lines.push(separator);

            lines.extend(
                dataset
                    .records
                    .iter()
                    .filter(|record| !record.is_empty())
                    .map(|record| format_row(record, &widths)),
            );
        }

        lines.push(String::new());
        lines.push(rule.clone());
        lines.push("END OF DATA STREAM".to_string());
        lines.push(rule);

        lines.join("\n")
    }

    /// Widest cell per header column, plus padding, capped
    fn column_widths(&self, dataset: &Dataset) -> Vec<usize> {
        (0..dataset.header.len())
            .map(|col| {
                let content = std::iter::once(&dataset.header)
                    .chain(dataset.records.iter())
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.width())
                    .max()
                    .unwrap_or(0);
                let width = content + self.padding;
                match self.column_cap {
                    Some(cap) => width.min(cap),
                    None => width,
                }
            })
            .collect()
    }
}

impl Default for FrameFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Join cells fitted to `widths`; cells past the header's columns are dropped
fn format_row(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| fit_cell(cell, width))
        .collect::<Vec<_>>()
        .join(CELL_SEPARATOR);
    line.trim_end().to_string()
}

/// Left-justify `cell` to exactly `width` columns, truncating with an ellipsis
fn fit_cell(cell: &str, width: usize) -> String {
    let cell_width = cell.width();
    if cell_width <= width {
        let mut fitted = String::with_capacity(cell.len() + width - cell_width);
        fitted.push_str(cell);
        fitted.extend(std::iter::repeat(' ').take(width - cell_width));
        return fitted;
    }

    let mut fitted = truncate_to_width(cell, width);
    let used = fitted.width();
    fitted.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    fitted
}

/// Cut `s` so that it plus a trailing ellipsis fits in `width` columns
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}
