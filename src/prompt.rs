//! Interactive input collection.
//!
//! Collects the save decision from the user and yields a [`SaveChoice`],
//! keeping the save dispatch itself free of terminal I/O. The parsing
//! helpers are plain functions so they test without a terminal.

use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::Result;

/// The user's save decision for this run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveChoice {
    /// Do not persist anything
    Skip,
    /// Append to a text file with a timestamp-based default name
    Text,
    /// Append to a tabular file at the given path
    Spreadsheet { path: PathBuf },
}

/// Ask whether and how to save the quotes.
///
/// Ctrl-C or Ctrl-D at any prompt means [`SaveChoice::Skip`], as does any
/// answer other than yes, or an unrecognized format option.
pub fn collect_save_choice(rl: &mut DefaultEditor) -> Result<SaveChoice> {
    let answer = match read_line(rl, "Do you want to save the quotes? (Y/N) ")? {
        Some(line) => line,
        None => return Ok(SaveChoice::Skip),
    };

    if parse_yes_no(&answer) != Some(true) {
        println!("Exiting without saving.");
        return Ok(SaveChoice::Skip);
    }

    let format = match read_line(
        rl,
        "Which file format do you want to save?\n[1] - .txt\n[2] - .xlsx/.csv\n> ",
    )? {
        Some(line) => line,
        None => return Ok(SaveChoice::Skip),
    };

    match parse_format_choice(&format) {
        Some(FormatChoice::Text) => Ok(SaveChoice::Text),
        Some(FormatChoice::Spreadsheet) => {
            let raw = match read_line(rl, "Enter the file path: ")? {
                Some(line) => line,
                None => return Ok(SaveChoice::Skip),
            };
            Ok(SaveChoice::Spreadsheet {
                path: PathBuf::from(clean_path(&raw)),
            })
        }
        None => {
            println!("Invalid option. Choose 1 (.txt) or 2 (.xlsx/.csv)");
            Ok(SaveChoice::Skip)
        }
    }
}

/// Read one line, mapping Ctrl-C / Ctrl-D to None
fn read_line(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<String>> {
    match rl.readline(prompt) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormatChoice {
    Text,
    Spreadsheet,
}

fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

fn parse_format_choice(input: &str) -> Option<FormatChoice> {
    match input.trim() {
        "1" => Some(FormatChoice::Text),
        "2" => Some(FormatChoice::Spreadsheet),
        _ => None,
    }
}

/// Strip whitespace and surrounding quotes from a pasted path
fn clean_path(input: &str) -> &str {
    input.trim().trim_matches('"').trim_matches('\'')
}
