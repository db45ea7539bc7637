//! Currencies tracked per run.
//!
//! Each run looks up exactly two quotes: USD and Euro. The enum knows its
//! display label (also used as the CURRENCY column value in spreadsheets)
//! and the search query submitted to the results page.

/// A currency whose quote is looked up on the results page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Usd,
    Euro,
}

impl Currency {
    /// Display label, also written to the CURRENCY column
    pub fn label(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Euro => "Euro",
        }
    }

    /// Query typed into the search box
    pub fn search_query(&self) -> String {
        match self {
            Currency::Usd => "usd today".to_string(),
            Currency::Euro => "euro today".to_string(),
        }
    }
}
