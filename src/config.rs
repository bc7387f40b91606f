use crate::models::{ListingConfig, SearchConfig};

pub const DEFAULT_SEARCH_CONFIG: SearchConfig = SearchConfig {
    threshold: 0.3,
    limit: 8,
    min_query_length: 2,
    mid_token_penalty: 0.05,
};

pub const DEFAULT_LISTING_CONFIG: ListingConfig = ListingConfig {
    ticker_suffix: ".NS",
    search_key_suffix: "India",
};
