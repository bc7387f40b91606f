use company_lookup::{CatalogSource, CatalogStore, DEFAULT_SEARCH_CONFIG};
use log::error;
use std::io::{self, BufRead};

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    // Use the catalog given as the first argument, or the bundled listing
    let source = match std::env::args().nth(1) {
        Some(path) => CatalogSource::from_path(path),
        None => CatalogSource::Embedded,
    };

    let mut store = CatalogStore::new();
    if let Err(e) = store.load(&source) {
        error!("Failed to load catalog: {}", e);
        eprintln!("Failed to load catalog: {}", e);
        std::process::exit(1);
    }

    // One query per line of stdin
    for line in io::stdin().lock().lines() {
        let query = match line {
            Ok(query) => query,
            Err(e) => {
                error!("Failed to read from stdin: {}", e);
                std::process::exit(1);
            }
        };

        let matches = store.search_scored(&query, DEFAULT_SEARCH_CONFIG.limit);

        if matches.is_empty() {
            println!("{}: no matches", query);
            continue;
        }

        println!("{}:", query);
        for search_match in matches {
            println!(
                "  {} {} ({:.3})",
                search_match.record.ticker,
                search_match.record.display_label(),
                search_match.score
            );
        }
    }
}
