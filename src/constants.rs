/// Nifty 50 listing bundled with the crate so a catalog is always available.
pub const EMBEDDED_COMPANY_LISTING_CSV: &str = include_str!("../data/nifty_50.csv");

/// Leading bytes of a gzip stream.
pub const GZIP_MAGIC_BYTES: [u8; 2] = [0x1f, 0x8b];

pub const PROMPT_START_TYPING: &str = "Start typing to search.";

pub const PROMPT_NO_MATCHES: &str = "No matches found. Check spelling.";

// Raw exchange listing headers (NSE `EQUITY_L.csv`)
pub const LISTING_SYMBOL_HEADER: &str = "SYMBOL";
pub const LISTING_NAME_HEADER: &str = "NAME OF COMPANY";
