#[path = "../test_utils/lib.rs"]
mod test_utils;

use company_lookup::{
    approximate_substring_distance, search_companies, Catalog, CompanyRecord, SearchConfig,
    SearchIndex, DEFAULT_SEARCH_CONFIG,
};
use std::sync::Arc;
use test_utils::constants::DEFAULT_TEST_LIMIT;
use test_utils::{load_test_store, tata_catalog, tata_index, tickers};

fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

#[cfg(test)]
mod search_index_tests {
    use super::*;

    #[test]
    fn test_short_queries_return_nothing() {
        let index = tata_index();

        for query in ["", "t", "T", " "] {
            assert!(
                index.search(query, DEFAULT_TEST_LIMIT).is_empty(),
                "Expected no results for {:?}",
                query
            );
        }
    }

    #[test]
    fn test_leading_token_ties_keep_catalog_order() {
        let index = tata_index();

        let results = index.search("tata", DEFAULT_TEST_LIMIT);
        assert_eq!(tickers(&results), vec!["TATASTEEL.NS", "TATAMOTORS.NS"]);

        let scored = index.search_scored("tata", DEFAULT_TEST_LIMIT);
        assert!(scored.iter().all(|search_match| search_match.score == 0.0));
    }

    #[test]
    fn test_typo_ranks_intended_company_first() {
        let index = tata_index();

        let results = index.search("tatmotor", DEFAULT_TEST_LIMIT);
        assert_eq!(results[0].ticker, "TATAMOTORS.NS");
    }

    #[test]
    fn test_every_record_finds_itself_first() {
        let store = load_test_store();
        let index = store.index().expect("Index should be built");

        for record in index.catalog().iter() {
            let results = index.search_scored(&record.search_key, DEFAULT_TEST_LIMIT);

            assert!(!results.is_empty(), "No results for {:?}", record.search_key);
            assert_eq!(results[0].record, record);
            assert_eq!(results[0].score, 0.0);
        }
    }

    #[test]
    fn test_results_respect_limit_and_threshold() {
        let store = load_test_store();
        let index = store.index().expect("Index should be built");

        // Every fixture key ends with INDIA
        assert_eq!(index.search("india", 8).len(), 8);
        assert_eq!(index.search("india", 3).len(), 3);
        assert!(index.search("india", 0).is_empty());

        for query in ["india", "tata", "mahindra", "bnak", "motor"] {
            for search_match in index.search_scored(query, 100) {
                assert!(
                    search_match.score <= DEFAULT_SEARCH_CONFIG.threshold,
                    "{:?} scored {} for {:?}",
                    search_match.record.ticker,
                    search_match.score,
                    query
                );
            }
        }
    }

    #[test]
    fn test_search_is_deterministic() {
        let store = load_test_store();
        let index = store.index().expect("Index should be built");

        let first = tickers(&index.search("tata", DEFAULT_TEST_LIMIT));
        for _ in 0..5 {
            assert_eq!(tickers(&index.search("tata", DEFAULT_TEST_LIMIT)), first);
        }
    }

    #[test]
    fn test_rebuilt_index_matches_original() {
        let catalog = tata_catalog();
        let first = SearchIndex::build(Arc::clone(&catalog));
        let second = SearchIndex::build(catalog);

        for query in ["tata", "steel", "tatmotor", "motors"] {
            assert_eq!(
                tickers(&first.search(query, DEFAULT_TEST_LIMIT)),
                tickers(&second.search(query, DEFAULT_TEST_LIMIT))
            );
        }
    }

    #[test]
    fn test_case_insensitive() {
        let store = load_test_store();
        let index = store.index().expect("Index should be built");

        let lower = tickers(&index.search("tcs", DEFAULT_TEST_LIMIT));
        let upper = tickers(&index.search("TCS", DEFAULT_TEST_LIMIT));

        assert_eq!(lower, upper);
        assert_eq!(lower[0], "TCS.NS");
    }

    #[test]
    fn test_transposed_characters_still_match() {
        let store = load_test_store();
        let index = store.index().expect("Index should be built");

        let results = tickers(&index.search("Relaince", DEFAULT_TEST_LIMIT));
        assert!(results.contains(&"RELIANCE.NS".to_string()));
        assert_eq!(results[0], "RELIANCE.NS");
    }

    #[test]
    fn test_high_entropy_query_matches_nothing() {
        let store = load_test_store();
        let index = store.index().expect("Index should be built");

        assert!(index.search("qzxqzxqzxq", DEFAULT_TEST_LIMIT).is_empty());
    }

    #[test]
    fn test_partial_token_prefix_matches() {
        let store = load_test_store();
        let index = store.index().expect("Index should be built");

        let results = tickers(&index.search("mahin", DEFAULT_TEST_LIMIT));
        assert!(results.contains(&"M&M.NS".to_string()));
        assert!(results.contains(&"TECHM.NS".to_string()));
    }

    #[test]
    fn test_mid_token_alignment_ranks_below_token_start() {
        let catalog = Catalog::from_records(vec![
            CompanyRecord::new("Tata Steel", "TATASTEEL", "TATASTEEL.NS", "tatasteel"),
            CompanyRecord::new("Steel Authority", "SAIL", "SAIL.NS", "steel authority"),
        ])
        .expect("Failed to build catalog");
        let index = SearchIndex::build(Arc::new(catalog));

        let results = index.search_scored("steel", DEFAULT_TEST_LIMIT);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].record.ticker, "SAIL.NS");
        assert_eq!(results[0].score, 0.0);
        assert_eq!(results[1].record.ticker, "TATASTEEL.NS");
        assert!((results[1].score - DEFAULT_SEARCH_CONFIG.mid_token_penalty).abs() < 1e-6);
    }

    #[test]
    fn test_score_grows_with_edit_distance() {
        let catalog = Catalog::from_records(vec![CompanyRecord::new(
            "Reliance Industries Ltd",
            "RELIANCE",
            "RELIANCE.NS",
            "reliance industries",
        )])
        .expect("Failed to build catalog");
        let config = SearchConfig {
            threshold: 1.0,
            ..DEFAULT_SEARCH_CONFIG
        };
        let index = SearchIndex::build_with_config(Arc::new(catalog), config);

        let scores: Vec<f32> = ["reliance", "reliancx", "relianxx", "reliaxxx"]
            .iter()
            .map(|query| index.search_scored(query, 1)[0].score)
            .collect();

        assert_eq!(scores[0], 0.0);
        for pair in scores.windows(2) {
            assert!(pair[0] <= pair[1], "Scores not monotonic: {:?}", scores);
        }
        assert!(scores.iter().all(|score| (0.0..=1.0).contains(score)));
    }

    #[test]
    fn test_custom_threshold_and_min_length() {
        let strict = SearchConfig {
            threshold: 0.0,
            min_query_length: 4,
            ..DEFAULT_SEARCH_CONFIG
        };
        let index = SearchIndex::build_with_config(tata_catalog(), strict);

        assert!(index.search("tat", DEFAULT_TEST_LIMIT).is_empty());
        assert!(index.search("tatmotor", DEFAULT_TEST_LIMIT).is_empty());
        assert_eq!(
            tickers(&index.search("motors", DEFAULT_TEST_LIMIT)),
            vec!["TATAMOTORS.NS"]
        );
    }

    #[test]
    fn test_empty_catalog_matches_nothing() {
        let catalog = Catalog::from_records(Vec::new()).expect("Empty catalog is valid");
        let index = SearchIndex::build(Arc::new(catalog));

        assert!(index.is_empty());
        assert!(index.search("tata", DEFAULT_TEST_LIMIT).is_empty());
    }

    #[test]
    fn test_search_companies_returns_scored_tickers() {
        let results = search_companies("tatmotor", &tata_catalog());

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0, "TATAMOTORS.NS");
        assert!((results[0].1 - 0.125).abs() < 1e-6);
    }
}

#[cfg(test)]
mod approximate_substring_distance_tests {
    use super::*;

    #[test]
    fn test_exact_substring_costs_nothing() {
        assert_eq!(
            approximate_substring_distance(&chars("motors"), &chars("tata motors"), None),
            0
        );
    }

    #[test]
    fn test_transposition_costs_one_edit() {
        assert_eq!(approximate_substring_distance(&chars("ab"), &chars("ba"), None), 1);
    }

    #[test]
    fn test_distance_never_exceeds_query_length() {
        assert_eq!(approximate_substring_distance(&chars("xyz"), &chars("abc"), None), 3);
        assert_eq!(approximate_substring_distance(&chars("xyz"), &chars(""), None), 3);
    }

    #[test]
    fn test_anchors_restrict_alignment_start() {
        let key = chars("tatasteel");
        let anchors = company_lookup::token_start_positions(&key);

        assert_eq!(approximate_substring_distance(&chars("steel"), &key, None), 0);
        // Reaching "steel" from the token start means skipping "tata"
        assert_eq!(
            approximate_substring_distance(&chars("steel"), &key, Some(&anchors)),
            4
        );
    }
}
