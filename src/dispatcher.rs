//! Save dispatch.
//!
//! Routes an already-collected [`SaveChoice`] to the matching sink, so the
//! dispatch logic is testable without interactive input. User-facing sink
//! rejections (bad extension, bad path) are printed and do not abort the
//! run; everything else propagates to the entry routine.

use anyhow::Result;
use chrono::Local;
use colored::Colorize;

use crate::error::CambioError;
use crate::prompt::SaveChoice;
use crate::scraping::QuoteFetch;
use crate::sinks::{self, spreadsheet, text};

/// Persist the quotes according to the user's choice.
///
/// Stamps the current local time; absent quotes are written as
/// `unavailable`. Invokes at most one sink.
pub fn dispatch_save(choice: SaveChoice, usd: &QuoteFetch, euro: &QuoteFetch) -> Result<()> {
    let taken_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    match choice {
        SaveChoice::Skip => Ok(()),
        SaveChoice::Text => {
            let path = text::save_txt(None, &taken_at, usd.display(), euro.display())?;
            println!("{} File {} saved successfully!", "✓".green(), path.display());
            Ok(())
        }
        SaveChoice::Spreadsheet { path } => {
            match spreadsheet::save_spreadsheet(&path, &taken_at, usd.display(), euro.display()) {
                Ok(abs) => {
                    println!("{} File saved successfully at {}", "✓".green(), abs.display());
                    sinks::open_in_viewer(&abs);
                    Ok(())
                }
                Err(e) => match e.downcast_ref::<CambioError>() {
                    Some(CambioError::UnsupportedExtension(_))
                    | Some(CambioError::InvalidPath(_)) => {
                        eprintln!("{} {}", "Error:".red().bold(), e);
                        Ok(())
                    }
                    _ => Err(e),
                },
            }
        }
    }
}
