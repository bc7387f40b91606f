use crate::config::{DEFAULT_LISTING_CONFIG, DEFAULT_SEARCH_CONFIG};
use crate::models::{
    Catalog, CatalogSource, CompanyRecord, Error, ListingConfig, SearchConfig, SearchIndex,
    SearchMatch,
};
use log::{info, warn};
use std::sync::Arc;

/// Holds the loaded catalog and the index built from it.
///
/// Until a load succeeds the store is "not ready": searches return nothing
/// and `index()` reports a contract violation.
pub struct CatalogStore {
    search_config: SearchConfig,
    listing_config: ListingConfig,
    index: Option<SearchIndex>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_SEARCH_CONFIG, DEFAULT_LISTING_CONFIG)
    }

    pub fn with_config(search_config: SearchConfig, listing_config: ListingConfig) -> Self {
        Self {
            search_config,
            listing_config,
            index: None,
        }
    }

    /// Loads every record from `source` and builds a fresh index over them.
    ///
    /// The previous catalog and index are replaced only once the new ones
    /// are complete. On failure the store is emptied and stays not ready
    /// until a later load succeeds.
    pub fn load(&mut self, source: &CatalogSource) -> Result<&Catalog, Error> {
        match self.build_index(source) {
            Ok(index) => {
                info!(
                    "Loaded {} companies from {}",
                    index.catalog().len(),
                    source.describe()
                );

                Ok(self.index.insert(index).catalog().as_ref())
            }
            Err(err) => {
                warn!("Failed to load catalog from {}: {}", source.describe(), err);
                self.index = None;

                Err(err)
            }
        }
    }

    fn build_index(&self, source: &CatalogSource) -> Result<SearchIndex, Error> {
        let records = source.read_records(&self.listing_config)?;
        let catalog = Catalog::from_records(records)?;

        Ok(SearchIndex::build_with_config(
            Arc::new(catalog),
            self.search_config,
        ))
    }

    /// Drops the current catalog and index.
    pub fn clear(&mut self) {
        self.index = None;
    }

    pub fn is_ready(&self) -> bool {
        self.index.is_some()
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.search_config
    }

    pub fn listing_config(&self) -> &ListingConfig {
        &self.listing_config
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.index.as_ref().map(|index| index.catalog().as_ref())
    }

    /// Returns the built index, or `Error::ContractViolation` if no catalog
    /// has been loaded.
    pub fn index(&self) -> Result<&SearchIndex, Error> {
        self.index.as_ref().ok_or_else(|| {
            Error::ContractViolation("Search index used before a catalog was loaded".to_string())
        })
    }

    /// Searches the current index; empty while the catalog is not ready.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&CompanyRecord> {
        self.index
            .as_ref()
            .map(|index| index.search(query, limit))
            .unwrap_or_default()
    }

    pub fn search_scored(&self, query: &str, limit: usize) -> Vec<SearchMatch<'_>> {
        self.index
            .as_ref()
            .map(|index| index.search_scored(query, limit))
            .unwrap_or_default()
    }

    pub fn find_by_ticker(&self, ticker: &str) -> Option<&CompanyRecord> {
        self.catalog()
            .and_then(|catalog| catalog.find_by_ticker(ticker))
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
