//! Spreadsheet sink (.xlsx / .csv).
//!
//! Loads the existing table (if any), appends one row per currency, and
//! rewrites the whole file. Existing .xlsx files are read with calamine and
//! rewritten with rust_xlsxwriter; .csv files use the csv crate both ways.
//!
//! Legacy .xls is not supported: calamine can read it but nothing in the
//! Rust stack writes BIFF, so the extension is rejected up front.

use anyhow::{Context, Result};
use calamine::{open_workbook, Reader, Xlsx};
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::currency::Currency;
use crate::error::CambioError;

/// Fixed three-column schema
pub const HEADER: [&str; 3] = ["DATE/TIME", "CURRENCY", "VALUE"];

/// Recognized tabular file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabularFormat {
    Xlsx,
    Csv,
}

impl TabularFormat {
    /// Determine the format from the path's extension.
    ///
    /// Rejects unrecognized extensions before any filesystem access.
    pub fn from_path(path: &Path) -> Result<Self, CambioError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "xlsx" => Ok(TabularFormat::Xlsx),
            "csv" => Ok(TabularFormat::Csv),
            other => Err(CambioError::UnsupportedExtension(other.to_string())),
        }
    }
}

/// One data row of the table
#[derive(Debug, Clone, PartialEq, Eq)]
struct QuoteRow {
    taken_at: String,
    currency: String,
    value: String,
}

/// Append both quotes to a tabular file, creating it if needed.
///
/// The whole table is loaded, two rows are appended (USD then Euro), and the
/// file is rewritten in place. Duplicate timestamps are appended as-is, never
/// merged. Returns the absolute path written.
pub fn save_spreadsheet(
    path: &Path,
    taken_at: &str,
    usd_quote: &str,
    euro_quote: &str,
) -> Result<PathBuf> {
    let format = TabularFormat::from_path(path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(CambioError::InvalidPath(path.to_path_buf()).into());
        }
    }

    let mut rows = if path.exists() {
        load_rows(path, format)?
    } else {
        Vec::new()
    };

    for (currency, value) in [(Currency::Usd, usd_quote), (Currency::Euro, euro_quote)] {
        rows.push(QuoteRow {
            taken_at: taken_at.to_string(),
            currency: currency.label().to_string(),
            value: value.to_string(),
        });
    }

    match format {
        TabularFormat::Xlsx => write_xlsx(path, &rows)?,
        TabularFormat::Csv => write_csv(path, &rows)?,
    }

    info!("Saved {} row(s) to {}", rows.len(), path.display());

    let abs = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    Ok(abs)
}

fn load_rows(path: &Path, format: TabularFormat) -> Result<Vec<QuoteRow>> {
    match format {
        TabularFormat::Xlsx => load_xlsx_rows(path),
        TabularFormat::Csv => load_csv_rows(path),
    }
}

fn load_xlsx_rows(path: &Path) -> Result<Vec<QuoteRow>> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open workbook {}", path.display()))?;

    let mut rows = Vec::new();

    if let Some(range) = workbook.worksheet_range_at(0) {
        let range = range.context("Failed to read worksheet")?;
        // First row is the header
        for row in range.rows().skip(1) {
            let cell = |idx: usize| row.get(idx).map(|c| c.to_string()).unwrap_or_default();
            rows.push(QuoteRow {
                taken_at: cell(0),
                currency: cell(1),
                value: cell(2),
            });
        }
    }

    Ok(rows)
}

fn load_csv_rows(path: &Path) -> Result<Vec<QuoteRow>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("Failed to read CSV record")?;
        let cell = |idx: usize| record.get(idx).unwrap_or_default().to_string();
        rows.push(QuoteRow {
            taken_at: cell(0),
            currency: cell(1),
            value: cell(2),
        });
    }

    Ok(rows)
}

fn write_xlsx(path: &Path, rows: &[QuoteRow]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADER.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .context("Failed to write header")?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write_string(r, 0, &row.taken_at)?;
        worksheet.write_string(r, 1, &row.currency)?;
        worksheet.write_string(r, 2, &row.value)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to save {}", path.display()))?;
    Ok(())
}

fn write_csv(path: &Path, rows: &[QuoteRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    writer.write_record(HEADER)?;
    for row in rows {
        writer.write_record([&row.taken_at, &row.currency, &row.value])?;
    }
    writer.flush().context("Failed to flush CSV writer")?;
    Ok(())
}
