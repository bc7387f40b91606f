use crate::models::{CompanyRecord, Error};
use crate::types::CatalogIndex;
use std::collections::HashSet;

/// Ordered, read-only sequence of company records.
///
/// Records are validated on construction: every ticker is non-empty and
/// unique, and every search key is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<CompanyRecord>,
}

impl Catalog {
    pub fn from_records(records: Vec<CompanyRecord>) -> Result<Self, Error> {
        let mut seen_tickers = HashSet::with_capacity(records.len());

        for record in &records {
            record.validate()?;

            if !seen_tickers.insert(record.ticker.as_str()) {
                return Err(Error::DuplicateTicker(record.ticker.clone()));
            }
        }

        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, catalog_index: CatalogIndex) -> Option<&CompanyRecord> {
        self.records.get(catalog_index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompanyRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[CompanyRecord] {
        &self.records
    }

    pub fn find_by_ticker(&self, ticker: &str) -> Option<&CompanyRecord> {
        self.records.iter().find(|record| record.ticker == ticker)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CompanyRecord;
    type IntoIter = std::slice::Iter<'a, CompanyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
