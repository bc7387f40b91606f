#![allow(dead_code)] // Not every helper is used by every test binary

use company_lookup::{Catalog, CatalogSource, CatalogStore, CompanyRecord, SearchIndex};
use std::sync::Arc;
pub mod constants;

/// Two-record catalog with overlapping leading tokens.
pub fn tata_catalog() -> Arc<Catalog> {
    let records = vec![
        CompanyRecord::new(
            "Tata Steel",
            "TATASTEEL",
            "TATASTEEL.NS",
            "tata steel tatasteel",
        ),
        CompanyRecord::new(
            "Tata Motors",
            "TATAMOTORS",
            "TATAMOTORS.NS",
            "tata motors tatamotors",
        ),
    ];

    Arc::new(Catalog::from_records(records).expect("Failed to build test catalog"))
}

pub fn tata_index() -> SearchIndex {
    SearchIndex::build(tata_catalog())
}

/// Store loaded from the CSV fixture.
pub fn load_test_store() -> CatalogStore {
    let mut store = CatalogStore::new();
    store
        .load(&CatalogSource::from_path(constants::TEST_COMPANIES_CSV_PATH))
        .expect("Failed to load test catalog");

    store
}

pub fn tickers(records: &[&CompanyRecord]) -> Vec<String> {
    records.iter().map(|record| record.ticker.clone()).collect()
}
