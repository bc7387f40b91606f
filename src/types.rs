// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents the display name of a company as an owned `String`.
pub type CompanyName = String;

/// Represents the exchange shorthand for a company (e.g. `TCS`) as an owned `String`.
pub type CompanySymbol = String;

/// Represents the fully-qualified instrument identifier handed to downstream
/// analysis (e.g. `TCS.NS`) as an owned `String`.
pub type TickerSymbol = String;

/// Represents the string a record is matched against.
pub type SearchKey = String;

/// Position of a record within its catalog. Catalog order is the tie-break
/// for equally scored matches.
pub type CatalogIndex = usize;

/// Normalized match distance in `[0.0, 1.0]`, where `0.0` is an exact match.
pub type MatchScore = f32;

/// Number of edit operations needed to align a query with a search key.
pub type EditDistance = usize;
