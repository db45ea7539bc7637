//! Integration tests for the quote sinks
//!
//! These tests verify end-to-end persistence behavior:
//! - Text sink line format and append-in-order semantics
//! - Spreadsheet sink create/reload/rewrite cycle for .csv and .xlsx
//! - Extension and path rejection without touching the filesystem

use anyhow::Result;
use calamine::{open_workbook, Reader, Xlsx};
use cambio::error::CambioError;
use cambio::sinks::spreadsheet::save_spreadsheet;
use cambio::sinks::text::{default_file_name, save_txt};
use std::path::Path;
use tempfile::TempDir;

const TS_FIRST: &str = "2024-01-01 12:00:00";
const TS_SECOND: &str = "2024-01-02 09:30:00";

/// Test helper: read a whole text file
fn read_lines(path: &Path) -> Result<Vec<String>> {
    Ok(std::fs::read_to_string(path)?
        .lines()
        .map(|l| l.to_string())
        .collect())
}

/// Test helper: read all rows (header included) from an xlsx file
fn read_xlsx_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .expect("workbook has a sheet")?;
    Ok(range
        .rows()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect())
}

/// Test helper: read all rows (header included) from a csv file
fn read_csv_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(|c| c.to_string()).collect());
    }
    Ok(rows)
}

#[test]
fn test_text_sink_writes_exact_line() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("quotes.txt");

    save_txt(Some(&path), TS_FIRST, "1.00 USD", "0.90 EUR")?;

    let lines = read_lines(&path)?;
    assert_eq!(lines, vec!["2024-01-01 12:00:00 | USD: 1.00 USD  Euro: 0.90 EUR"]);
    Ok(())
}

#[test]
fn test_text_sink_appends_in_call_order() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("quotes.txt");

    save_txt(Some(&path), TS_FIRST, "5.43", "6.12")?;
    save_txt(Some(&path), TS_SECOND, "5.50", "6.20")?;

    let lines = read_lines(&path)?;
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "2024-01-01 12:00:00 | USD: 5.43  Euro: 6.12");
    assert_eq!(lines[1], "2024-01-02 09:30:00 | USD: 5.50  Euro: 6.20");
    Ok(())
}

#[test]
fn test_text_sink_preserves_prior_content() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("quotes.txt");
    std::fs::write(&path, "existing line\n")?;

    save_txt(Some(&path), TS_FIRST, "5.43", "6.12")?;

    let lines = read_lines(&path)?;
    assert_eq!(lines[0], "existing line");
    assert_eq!(lines[1], "2024-01-01 12:00:00 | USD: 5.43  Euro: 6.12");
    Ok(())
}

#[test]
fn test_default_text_file_name_is_timestamped() {
    let name = default_file_name();
    assert!(name.ends_with("_quotes.txt"));
    assert_eq!(name.len(), "2024-01-01_12-00-00_quotes.txt".len());
}

#[test]
fn test_spreadsheet_rejects_docx_without_creating_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.docx");

    let err = save_spreadsheet(&path, TS_FIRST, "5.43", "6.12").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CambioError>(),
        Some(CambioError::UnsupportedExtension(_))
    ));
    assert!(!path.exists());
}

#[test]
fn test_spreadsheet_rejects_missing_parent_dir() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no/such/dir/quotes.csv");

    let err = save_spreadsheet(&path, TS_FIRST, "5.43", "6.12").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CambioError>(),
        Some(CambioError::InvalidPath(_))
    ));
    assert!(!path.exists());
}

#[test]
fn test_csv_sink_creates_then_appends() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("quotes.csv");

    save_spreadsheet(&path, TS_FIRST, "5.43", "6.12")?;

    let rows = read_csv_rows(&path)?;
    assert_eq!(rows.len(), 3); // header + USD + Euro
    assert_eq!(rows[0], vec!["DATE/TIME", "CURRENCY", "VALUE"]);
    assert_eq!(rows[1], vec![TS_FIRST, "USD", "5.43"]);
    assert_eq!(rows[2], vec![TS_FIRST, "Euro", "6.12"]);

    save_spreadsheet(&path, TS_SECOND, "5.50", "6.20")?;

    let rows = read_csv_rows(&path)?;
    assert_eq!(rows.len(), 5);
    // First run's rows are preserved unchanged
    assert_eq!(rows[1], vec![TS_FIRST, "USD", "5.43"]);
    assert_eq!(rows[2], vec![TS_FIRST, "Euro", "6.12"]);
    assert_eq!(rows[3], vec![TS_SECOND, "USD", "5.50"]);
    assert_eq!(rows[4], vec![TS_SECOND, "Euro", "6.20"]);
    Ok(())
}

#[test]
fn test_xlsx_sink_creates_then_appends() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("quotes.xlsx");

    save_spreadsheet(&path, TS_FIRST, "5.43", "6.12")?;

    let rows = read_xlsx_rows(&path)?;
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], vec!["DATE/TIME", "CURRENCY", "VALUE"]);
    assert_eq!(rows[1], vec![TS_FIRST, "USD", "5.43"]);
    assert_eq!(rows[2], vec![TS_FIRST, "Euro", "6.12"]);

    save_spreadsheet(&path, TS_SECOND, "5.50", "6.20")?;

    let rows = read_xlsx_rows(&path)?;
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[1], vec![TS_FIRST, "USD", "5.43"]);
    assert_eq!(rows[2], vec![TS_FIRST, "Euro", "6.12"]);
    assert_eq!(rows[3], vec![TS_SECOND, "USD", "5.50"]);
    assert_eq!(rows[4], vec![TS_SECOND, "Euro", "6.20"]);
    Ok(())
}

#[test]
fn test_unavailable_quotes_are_persisted_as_text() -> Result<()> {
    use cambio::scraping::QuoteFetch;

    let dir = TempDir::new()?;
    let path = dir.path().join("quotes.txt");

    let usd = QuoteFetch::Retrieved("5.43".to_string());
    let euro = QuoteFetch::Unavailable("timed out".to_string());

    save_txt(Some(&path), TS_FIRST, usd.display(), euro.display())?;

    let lines = read_lines(&path)?;
    assert_eq!(lines[0], "2024-01-01 12:00:00 | USD: 5.43  Euro: unavailable");
    Ok(())
}
