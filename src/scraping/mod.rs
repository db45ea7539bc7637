// Web scraping module for extracting currency quotes from the search
// results page. Uses headless Chrome, same as a real browser session.

pub mod google;

pub use google::QuoteScraper;

/// Outcome of a single quote lookup.
///
/// A failed lookup is ordinary output, not an error: callers branch on this
/// type instead of relying on what was logged. The reason string carries the
/// full error chain for display and logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteFetch {
    /// The quote text as displayed on the results page
    Retrieved(String),
    /// Lookup failed (timeout, missing element, navigation error)
    Unavailable(String),
}

impl QuoteFetch {
    /// The quote value, if one was retrieved
    pub fn value(&self) -> Option<&str> {
        match self {
            QuoteFetch::Retrieved(v) => Some(v),
            QuoteFetch::Unavailable(_) => None,
        }
    }

    /// Text used when printing or persisting the quote
    pub fn display(&self) -> &str {
        match self {
            QuoteFetch::Retrieved(v) => v,
            QuoteFetch::Unavailable(_) => "unavailable",
        }
    }

    pub fn is_retrieved(&self) -> bool {
        matches!(self, QuoteFetch::Retrieved(_))
    }
}
