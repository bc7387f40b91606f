use crate::constants::{LISTING_NAME_HEADER, LISTING_SYMBOL_HEADER};
use crate::models::{CompanyRecord, Error, ListingConfig};
use csv::{ReaderBuilder, Trim};
use log::debug;
use serde::Deserialize;
use std::io::Cursor;

/// A row of a raw exchange listing, e.g. the NSE equity list.
#[derive(Deserialize)]
struct ListingRow {
    #[serde(rename = "SYMBOL")]
    symbol: String,
    #[serde(rename = "NAME OF COMPANY", default)]
    name: Option<String>,
}

/// Parses a JSON array of company records.
///
/// Records without a search key get one derived from their symbol and name.
pub fn read_company_records_from_json(
    json: &str,
    listing_config: &ListingConfig,
) -> Result<Vec<CompanyRecord>, Error> {
    let records: Vec<CompanyRecord> = serde_json::from_str(json)?;

    Ok(records
        .into_iter()
        .map(|record| record.with_derived_search_key(listing_config))
        .collect())
}

/// Parses CSV in either the record schema (`name,symbol,ticker,searchKey`)
/// or the raw exchange listing schema (`SYMBOL,NAME OF COMPANY`).
pub fn read_company_records_from_csv(
    csv: &str,
    listing_config: &ListingConfig,
) -> Result<Vec<CompanyRecord>, Error> {
    // Use a cursor to simulate a file reader from the string
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(Cursor::new(csv));

    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .clone();

    let is_listing = headers.iter().any(|header| header == LISTING_SYMBOL_HEADER);

    if is_listing {
        let has_names = headers.iter().any(|header| header == LISTING_NAME_HEADER);
        if !has_names {
            debug!(
                "Listing has no '{}' column; names fall back to symbols",
                LISTING_NAME_HEADER
            );
        }

        reader
            .deserialize::<ListingRow>()
            .map(|row| -> Result<CompanyRecord, Error> {
                let row = row?;
                let name = row.name.unwrap_or_default();

                Ok(CompanyRecord::from_listing(&row.symbol, &name, listing_config))
            })
            .collect()
    } else {
        for required in ["name", "symbol", "ticker"] {
            if !headers.iter().any(|header| header == required) {
                return Err(Error::ParserError(format!(
                    "Missing '{}' column in catalog CSV",
                    required
                )));
            }
        }

        reader
            .deserialize::<CompanyRecord>()
            .map(|record| -> Result<CompanyRecord, Error> {
                Ok(record?.with_derived_search_key(listing_config))
            })
            .collect()
    }
}
