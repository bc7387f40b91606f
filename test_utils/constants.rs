pub const TEST_COMPANIES_CSV_PATH: &str = "tests/test_data_files/test_companies.csv";

pub const TEST_COMPANIES_JSON_PATH: &str = "tests/test_data_files/test_companies.json";

pub const TEST_LISTING_CSV_PATH: &str = "tests/test_data_files/test_listing.csv";

pub const DEFAULT_TEST_LIMIT: usize = 8;
