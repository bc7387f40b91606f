pub mod approximate_substring_distance;
pub use approximate_substring_distance::approximate_substring_distance;

pub mod decompress_if_gzipped;
pub use decompress_if_gzipped::decompress_if_gzipped;

pub mod normalize_search_text;
pub use normalize_search_text::{normalize_search_text, token_start_positions};

pub mod read_company_records;
pub use read_company_records::{read_company_records_from_csv, read_company_records_from_json};

pub mod sort_matches;
pub use sort_matches::sort_matches;
