use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::DefaultEditor;

use cambio::currency::Currency;
use cambio::scraping::QuoteScraper;
use cambio::{dispatcher, prompt};

/// Scrape the displayed USD and Euro exchange-rate quotes and optionally
/// save them to a text or spreadsheet file.
///
/// All configuration is interactive; there are no flags.
#[derive(Parser)]
#[command(name = "cambio", version, about)]
struct Cli {}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let _cli = Cli::parse();

    // Any error escaping the run is printed and the process exits normally
    if let Err(e) = run() {
        eprintln!("{} {:#}", "An error occurred:".red().bold(), e);
    }
}

fn run() -> Result<()> {
    println!("Collecting data... Please wait");

    let (usd, euro) = {
        let scraper = QuoteScraper::launch()?;
        let usd = scraper.fetch_quote(Currency::Usd);
        let euro = scraper.fetch_quote(Currency::Euro);
        (usd, euro)
        // scraper dropped here: browser released before the save step
    };

    println!("USD: {}", usd.display());
    println!("Euro: {}", euro.display());

    let mut rl = DefaultEditor::new()?;
    let choice = prompt::collect_save_choice(&mut rl)?;
    dispatcher::dispatch_save(choice, &usd, &euro)
}
