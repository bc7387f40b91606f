use crate::config::DEFAULT_SEARCH_CONFIG;
use crate::models::{Catalog, CompanyRecord, SearchConfig};
use crate::types::{CatalogIndex, MatchScore};
use crate::utils::{
    approximate_substring_distance, normalize_search_text, sort_matches, token_start_positions,
};
use log::debug;
use std::sync::Arc;

/// A catalog record together with how well it matched a query.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchMatch<'a> {
    pub catalog_index: CatalogIndex,
    pub record: &'a CompanyRecord,
    pub score: MatchScore,
}

/// Search key as prepared at build time.
#[derive(Debug, Clone, PartialEq)]
struct IndexedKey {
    chars: Vec<char>,
    token_starts: Vec<bool>,
}

/// Fuzzy lookup structure built once from a `Catalog`.
///
/// The index is immutable; when the catalog changes a new index is built
/// from the new catalog.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    catalog: Arc<Catalog>,
    keys: Vec<IndexedKey>,
    config: SearchConfig,
}

impl SearchIndex {
    pub fn build(catalog: Arc<Catalog>) -> Self {
        Self::build_with_config(catalog, DEFAULT_SEARCH_CONFIG)
    }

    pub fn build_with_config(catalog: Arc<Catalog>, config: SearchConfig) -> Self {
        let keys: Vec<IndexedKey> = catalog
            .iter()
            .map(|record| {
                let chars = normalize_search_text(&record.search_key);
                let token_starts = token_start_positions(&chars);

                IndexedKey {
                    chars,
                    token_starts,
                }
            })
            .collect();

        debug!("Built search index over {} records", keys.len());

        Self {
            catalog,
            keys,
            config,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns at most `limit` records matching `query`, best match first.
    ///
    /// ```rust
    /// use company_lookup::{Catalog, CompanyRecord, SearchIndex};
    /// use std::sync::Arc;
    ///
    /// let catalog = Catalog::from_records(vec![
    ///     CompanyRecord::new("Tata Steel", "TATASTEEL", "TATASTEEL.NS", "tata steel tatasteel"),
    ///     CompanyRecord::new("Tata Motors", "TATAMOTORS", "TATAMOTORS.NS", "tata motors tatamotors"),
    /// ])
    /// .unwrap();
    /// let index = SearchIndex::build(Arc::new(catalog));
    ///
    /// let tickers: Vec<&str> = index
    ///     .search("tatmotor", 8)
    ///     .iter()
    ///     .map(|record| record.ticker.as_str())
    ///     .collect();
    /// assert_eq!(tickers, vec!["TATAMOTORS.NS"]);
    /// ```
    pub fn search(&self, query: &str, limit: usize) -> Vec<&CompanyRecord> {
        self.search_scored(query, limit)
            .into_iter()
            .map(|search_match| search_match.record)
            .collect()
    }

    /// Same as `search`, keeping the catalog position and score of each match.
    pub fn search_scored(&self, query: &str, limit: usize) -> Vec<SearchMatch<'_>> {
        if query.chars().count() < self.config.min_query_length || limit == 0 {
            return Vec::new();
        }

        let query_chars = normalize_search_text(query);
        if query_chars.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<SearchMatch<'_>> = self
            .keys
            .iter()
            .enumerate()
            .filter_map(|(catalog_index, key)| {
                let score = self.score_key(&query_chars, key)?;

                self.catalog.get(catalog_index).map(|record| SearchMatch {
                    catalog_index,
                    record,
                    score,
                })
            })
            .collect();

        let total_matches = matches.len();

        sort_matches(&mut matches);
        matches.truncate(limit);

        debug!(
            "Query {:?} matched {} of {} records, returning {}",
            query,
            total_matches,
            self.keys.len(),
            matches.len()
        );

        matches
    }

    /// Returns the score of `key` for `query_chars`, or `None` when the
    /// score exceeds the acceptance threshold.
    ///
    /// Alignments that start at a token boundary score their edit ratio
    /// directly; other alignments pay `mid_token_penalty` on top.
    fn score_key(&self, query_chars: &[char], key: &IndexedKey) -> Option<MatchScore> {
        let query_len = query_chars.len() as MatchScore;

        let unanchored_distance = approximate_substring_distance(query_chars, &key.chars, None);
        let unanchored_ratio = unanchored_distance as MatchScore / query_len;

        // An anchored alignment can never beat the unanchored one
        if unanchored_ratio > self.config.threshold {
            return None;
        }

        let anchored_distance =
            approximate_substring_distance(query_chars, &key.chars, Some(&key.token_starts));
        let anchored_ratio = anchored_distance as MatchScore / query_len;

        let score = anchored_ratio
            .min(unanchored_ratio + self.config.mid_token_penalty)
            .min(1.0);

        if score > self.config.threshold {
            None
        } else {
            Some(score)
        }
    }
}
