//! Error handling for Cambio
//!
//! Defines custom error types and establishes a unified Result type
//! using anyhow for context chaining and error propagation.

use std::path::PathBuf;
use thiserror::Error;

/// Core error types for quote persistence
#[derive(Error, Debug)]
pub enum CambioError {
    #[error("unsupported file extension: {0} (use .xlsx or .csv)")]
    UnsupportedExtension(String),

    #[error("invalid path: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("scrape error: {0}")]
    Scrape(String),

    #[error("io error")]
    Io(#[from] std::io::Error),
}

/// Result type alias for cambio operations
pub type Result<T> = anyhow::Result<T>;
