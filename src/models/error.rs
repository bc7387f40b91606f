use crate::types::TickerSymbol;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    ParserError(String),
    InvalidRecord(String),
    DuplicateTicker(TickerSymbol),
    IoError(std::io::Error),
    ContractViolation(String),
}

impl Error {
    /// Returns `true` for errors raised while loading a catalog.
    ///
    /// Load errors are recoverable by reloading; a contract violation is a
    /// programming error.
    pub fn is_load_error(&self) -> bool {
        !matches!(self, Error::ContractViolation(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::InvalidRecord(msg) => write!(f, "Invalid Record: {}", msg),
            Error::DuplicateTicker(ticker) => write!(f, "Duplicate Ticker: {}", ticker),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::ContractViolation(msg) => write!(f, "Contract Violation: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::ParserError(format!("Failed to read CSV record: {}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::ParserError(format!("Failed to read JSON catalog: {}", err))
    }
}
