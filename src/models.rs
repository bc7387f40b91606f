pub mod catalog;
pub use catalog::Catalog;

pub mod catalog_source;
pub use catalog_source::CatalogSource;

pub mod catalog_store;
pub use catalog_store::CatalogStore;

pub mod company_record;
pub use company_record::CompanyRecord;

pub mod error;
pub use error::Error;

pub mod listing_config;
pub use listing_config::ListingConfig;

pub mod query_session;
pub use query_session::{QuerySession, SelectionHandler};

pub mod search_config;
pub use search_config::SearchConfig;

pub mod search_index;
pub use search_index::{SearchIndex, SearchMatch};

pub mod session_state;
pub use session_state::SessionState;
