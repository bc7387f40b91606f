mod config;
pub use config::{DEFAULT_LISTING_CONFIG, DEFAULT_SEARCH_CONFIG};
pub mod constants;
pub mod models;
pub use models::{
    Catalog, CatalogSource, CatalogStore, CompanyRecord, Error, ListingConfig, QuerySession,
    SearchConfig, SearchIndex, SearchMatch, SelectionHandler, SessionState,
};
pub mod types;
pub use types::{
    CatalogIndex, CompanyName, CompanySymbol, EditDistance, MatchScore, SearchKey, TickerSymbol,
};
mod utils;
pub use utils::{
    approximate_substring_distance, normalize_search_text, sort_matches, token_start_positions,
};

use std::sync::Arc;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Returns the tickers best matching `query`, with their scores, using the
/// default search configuration.
pub fn search_companies(query: &str, catalog: &Arc<Catalog>) -> Vec<(TickerSymbol, MatchScore)> {
    search_companies_with_custom_config(&DEFAULT_SEARCH_CONFIG, query, catalog)
}

/// Builds a one-off index with `search_config` and returns up to
/// `search_config.limit` `(ticker, score)` pairs, best match first.
pub fn search_companies_with_custom_config(
    search_config: &SearchConfig,
    query: &str,
    catalog: &Arc<Catalog>,
) -> Vec<(TickerSymbol, MatchScore)> {
    let index = SearchIndex::build_with_config(Arc::clone(catalog), *search_config);

    index
        .search_scored(query, search_config.limit)
        .into_iter()
        .map(|search_match| (search_match.record.ticker.clone(), search_match.score))
        .collect()
}
