//! Cambio - currency exchange-rate quote scraper
//!
//! This library provides functionality for scraping the displayed USD and
//! Euro exchange-rate quotes from a search-engine results page and persisting
//! them to a text or spreadsheet file.

pub mod currency;
pub mod dispatcher;
pub mod error;
pub mod prompt;
pub mod scraping;
pub mod sinks;
