/// Controls how a raw exchange listing row becomes a `CompanyRecord`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ListingConfig {
    /// Appended to the exchange symbol to form the ticker (e.g. `.NS`).
    pub ticker_suffix: &'static str,
    /// Appended to the derived search key (e.g. the listing country).
    pub search_key_suffix: &'static str,
}
