// Scraper for the Google results page currency panel
//
// Uses headless Chrome to submit a "<currency> today" search and read the
// displayed quote from the knowledge panel. The panel is located by a fixed
// structural XPath, so this is inherently fragile to upstream markup changes.

use anyhow::{Context, Result};
use headless_chrome::{Browser, LaunchOptions};
use std::time::Duration;
use tracing::{info, warn};

use crate::currency::Currency;
use crate::scraping::QuoteFetch;

const SEARCH_URL: &str = "https://google.com";

/// Selector for the search box (Google renders it as input or textarea)
const SEARCH_BOX: &str = "[name='q']";

/// Quote value inside the currency knowledge panel
const QUOTE_XPATH: &str =
    r#"//*[@id="knowledge-currency__updatable-data-column"]/div[1]/div[2]/span[1]"#;

/// Upper bound on each element-visibility wait
const WAIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Scraper for currency quotes, owning one browser session.
///
/// The session is acquired on launch and released when the scraper is
/// dropped; both lookups of a run reuse it.
pub struct QuoteScraper {
    browser: Browser,
}

impl QuoteScraper {
    /// Launch a headless Chrome session
    pub fn launch() -> Result<Self> {
        info!("Launching headless Chrome browser");

        let options = LaunchOptions {
            headless: true,
            sandbox: false, // May be needed on some systems
            args: vec![
                // Disable automation flags to avoid detection
                std::ffi::OsStr::new("--disable-blink-features=AutomationControlled"),
                // Set a realistic user agent
                std::ffi::OsStr::new("--user-agent=Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"),
                std::ffi::OsStr::new("--disable-dev-shm-usage"),
                std::ffi::OsStr::new("--window-size=1920,1080"),
            ],
            ..Default::default()
        };

        let browser = Browser::new(options)
            .context("Failed to launch headless Chrome. Is Chrome/Chromium installed?")?;

        Ok(Self { browser })
    }

    /// Look up the displayed quote for a currency.
    ///
    /// Never propagates a scraping failure: any timeout, missing element, or
    /// navigation error is logged and reported as `QuoteFetch::Unavailable`.
    pub fn fetch_quote(&self, currency: Currency) -> QuoteFetch {
        info!("Fetching {} quote", currency.label());

        match self.try_fetch(currency) {
            Ok(value) => {
                info!("{} quote: {}", currency.label(), value);
                QuoteFetch::Retrieved(value)
            }
            Err(e) => {
                warn!("Failed to fetch {} quote: {:#}", currency.label(), e);
                QuoteFetch::Unavailable(format!("{:#}", e))
            }
        }
    }

    fn try_fetch(&self, currency: Currency) -> Result<String> {
        let tab = self
            .browser
            .new_tab()
            .context("Failed to create new browser tab")?;
        tab.set_default_timeout(WAIT_TIMEOUT);

        tab.navigate_to(SEARCH_URL)
            .context("Failed to navigate to search page")?;

        let search_box = tab
            .wait_for_element(SEARCH_BOX)
            .context("Timed out waiting for search box")?;

        search_box
            .type_into(&currency.search_query())
            .context("Failed to type search query")?;
        tab.press_key("Enter").context("Failed to submit search")?;

        let panel = tab
            .wait_for_xpath(QUOTE_XPATH)
            .context("Timed out waiting for currency panel")?;

        let value = panel
            .get_inner_text()
            .context("Failed to read quote text")?;
        let value = value.trim().to_string();

        if value.is_empty() {
            anyhow::bail!("currency panel was present but empty");
        }

        Ok(value)
    }
}
