use crate::models::{Error, ListingConfig};
use crate::types::{CompanyName, CompanySymbol, SearchKey, TickerSymbol};
use serde::{Deserialize, Serialize};

/// A single listed company as it appears in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub name: CompanyName,
    pub symbol: CompanySymbol,
    pub ticker: TickerSymbol,
    /// Sole matching target. Deserializes from either `searchKey` or the
    /// older `search_key` spelling, and may be omitted in which case it is
    /// derived from the symbol and name.
    #[serde(rename = "searchKey", alias = "search_key", default)]
    pub search_key: SearchKey,
}

impl CompanyRecord {
    pub fn new(name: &str, symbol: &str, ticker: &str, search_key: &str) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            ticker: ticker.to_string(),
            search_key: search_key.to_string(),
        }
    }

    /// Builds a record from a raw exchange listing row.
    ///
    /// The ticker is the symbol with the listing's exchange suffix, and the
    /// search key is the uppercased `"{symbol} {name} {suffix}"`.
    ///
    /// ```rust
    /// use company_lookup::{CompanyRecord, DEFAULT_LISTING_CONFIG};
    ///
    /// let record = CompanyRecord::from_listing("TCS", "Tata Consultancy Services", &DEFAULT_LISTING_CONFIG);
    /// assert_eq!(record.ticker, "TCS.NS");
    /// assert_eq!(record.search_key, "TCS TATA CONSULTANCY SERVICES INDIA");
    /// ```
    pub fn from_listing(symbol: &str, name: &str, listing_config: &ListingConfig) -> Self {
        let symbol = symbol.trim();
        let name = if name.trim().is_empty() {
            symbol
        } else {
            name.trim()
        };

        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            ticker: format!("{}{}", symbol, listing_config.ticker_suffix),
            search_key: derive_search_key(symbol, name, listing_config),
        }
    }

    /// Canonical `"{name} ({symbol})"` form committed to the query box on selection.
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.symbol)
    }

    /// Fills in a missing search key from the symbol and name.
    pub(crate) fn with_derived_search_key(mut self, listing_config: &ListingConfig) -> Self {
        if self.search_key.trim().is_empty() {
            self.search_key = derive_search_key(&self.symbol, &self.name, listing_config);
        }

        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.ticker.trim().is_empty() {
            return Err(Error::InvalidRecord(format!(
                "Record {:?} has an empty ticker",
                self.name
            )));
        }

        if self.search_key.trim().is_empty() {
            return Err(Error::InvalidRecord(format!(
                "Record {} has an empty search key",
                self.ticker
            )));
        }

        Ok(())
    }
}

fn derive_search_key(symbol: &str, name: &str, listing_config: &ListingConfig) -> SearchKey {
    [symbol, name, listing_config.search_key_suffix]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}
