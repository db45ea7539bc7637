//! Persistence sinks for retrieved quotes.
//!
//! Each run produces at most two records (USD, Euro). The text sink appends
//! one formatted line per run; the spreadsheet sink loads the whole table,
//! appends one row per currency, and rewrites the file in place.

pub mod spreadsheet;
pub mod text;

use std::path::Path;
use std::process::Command;
use tracing::warn;

/// Open a saved file in the platform's default viewer.
///
/// Best-effort: a failure to spawn the viewer is logged and ignored, the
/// file has already been written.
pub fn open_in_viewer(path: &Path) {
    #[cfg(target_os = "macos")]
    let result = Command::new("open").arg(path).spawn();

    #[cfg(target_os = "windows")]
    let result = Command::new("cmd").args(["/C", "start", ""]).arg(path).spawn();

    #[cfg(all(unix, not(target_os = "macos")))]
    let result = Command::new("xdg-open").arg(path).spawn();

    if let Err(e) = result {
        warn!("Failed to open {} in default viewer: {}", path.display(), e);
    }
}
