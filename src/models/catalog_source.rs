use crate::constants::EMBEDDED_COMPANY_LISTING_CSV;
use crate::models::{CompanyRecord, Error, ListingConfig};
use crate::utils::{
    decompress_if_gzipped, read_company_records_from_csv, read_company_records_from_json,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Where a catalog is loaded from.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// JSON array of `{name, symbol, ticker, searchKey}` objects.
    Json(String),
    /// CSV in either the record schema or the raw exchange listing schema.
    Csv(String),
    /// A `.json` or `.csv` file, optionally gzip-compressed.
    File(PathBuf),
    /// The bundled Nifty 50 listing.
    Embedded,
}

impl CatalogSource {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        CatalogSource::File(path.as_ref().to_path_buf())
    }

    /// Reads and parses every record of the source.
    ///
    /// Either the whole source parses or an error is returned; no partial
    /// record set is ever produced.
    pub fn read_records(
        &self,
        listing_config: &ListingConfig,
    ) -> Result<Vec<CompanyRecord>, Error> {
        match self {
            CatalogSource::Json(json) => read_company_records_from_json(json, listing_config),
            CatalogSource::Csv(csv) => read_company_records_from_csv(csv, listing_config),
            CatalogSource::Embedded => {
                read_company_records_from_csv(EMBEDDED_COMPANY_LISTING_CSV, listing_config)
            }
            CatalogSource::File(path) => {
                let raw_bytes = fs::read(path)?;
                let bytes = decompress_if_gzipped(raw_bytes)?;
                let text = String::from_utf8(bytes).map_err(|e| {
                    Error::ParserError(format!("{} is not valid UTF-8: {}", path.display(), e))
                })?;

                if is_json_path(path) {
                    read_company_records_from_json(&text, listing_config)
                } else {
                    read_company_records_from_csv(&text, listing_config)
                }
            }
        }
    }

    /// Short human-readable description, used in log lines.
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Json(_) => "inline JSON".to_string(),
            CatalogSource::Csv(_) => "inline CSV".to_string(),
            CatalogSource::File(path) => path.display().to_string(),
            CatalogSource::Embedded => "embedded listing".to_string(),
        }
    }
}

/// Looks through a trailing `.gz` to find the payload format.
fn is_json_path(path: &Path) -> bool {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    file_name.trim_end_matches(".gz").ends_with(".json")
}
