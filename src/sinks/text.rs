//! Append-only text sink.
//!
//! Writes one timestamped line per run:
//! `<taken_at> | USD: <usd>  Euro: <euro>`

use anyhow::{Context, Result};
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Append both quotes as a single line to a text file.
///
/// When no file name is supplied, one is synthesized from the current local
/// time (`<%Y-%m-%d_%H-%M-%S>_quotes.txt`). Returns the path written.
pub fn save_txt(
    file_name: Option<&Path>,
    taken_at: &str,
    usd_quote: &str,
    euro_quote: &str,
) -> Result<PathBuf> {
    let path = match file_name {
        Some(name) => name.to_path_buf(),
        None => PathBuf::from(default_file_name()),
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    writeln!(file, "{}", quote_line(taken_at, usd_quote, euro_quote))
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    info!("Appended quotes to {}", path.display());
    Ok(path)
}

/// Timestamp-based default file name
pub fn default_file_name() -> String {
    format!("{}_quotes.txt", Local::now().format("%Y-%m-%d_%H-%M-%S"))
}

/// The exact line format written to the file (without trailing newline)
pub fn quote_line(taken_at: &str, usd_quote: &str, euro_quote: &str) -> String {
    format!("{} | USD: {}  Euro: {}", taken_at, usd_quote, euro_quote)
}
