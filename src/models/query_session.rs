use crate::config::DEFAULT_SEARCH_CONFIG;
use crate::constants::{PROMPT_NO_MATCHES, PROMPT_START_TYPING};
use crate::models::{CatalogStore, CompanyRecord, SessionState};
use crate::types::TickerSymbol;
use log::debug;

/// Receives the ticker of a selected company.
pub type SelectionHandler = Box<dyn FnMut(&str)>;

/// Interaction state of a single search box.
///
/// Every event is handled to completion through `&mut self`, so events are
/// processed one at a time in the order they arrive. The session never owns
/// the catalog; each event that needs to search is handed the store.
pub struct QuerySession {
    query: String,
    results: Vec<CompanyRecord>,
    state: SessionState,
    is_focused: bool,
    limit: usize,
    suggestions: Vec<TickerSymbol>,
    selection_handler: Option<SelectionHandler>,
}

impl QuerySession {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            state: SessionState::Closed,
            is_focused: false,
            limit: DEFAULT_SEARCH_CONFIG.limit,
            suggestions: Vec::new(),
            selection_handler: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Tickers listed while the session is `OpenEmpty`.
    pub fn with_suggestions(mut self, suggestions: Vec<TickerSymbol>) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Injects the callback that receives the selected ticker.
    pub fn with_selection_handler<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&str) + 'static,
    {
        self.selection_handler = Some(Box::new(handler));
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[CompanyRecord] {
        &self.results
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Hint text for the open states that show no results.
    pub fn prompt(&self) -> Option<&'static str> {
        match self.state {
            SessionState::OpenEmpty => Some(PROMPT_START_TYPING),
            SessionState::OpenNoMatch => Some(PROMPT_NO_MATCHES),
            SessionState::Closed | SessionState::OpenResults => None,
        }
    }

    /// Curated suggestions resolved against the store, for `OpenEmpty`.
    ///
    /// Tickers not present in the current catalog are skipped.
    pub fn suggested_records<'a>(&self, store: &'a CatalogStore) -> Vec<&'a CompanyRecord> {
        if self.state != SessionState::OpenEmpty {
            return Vec::new();
        }

        self.suggestions
            .iter()
            .filter_map(|ticker| store.find_by_ticker(ticker))
            .collect()
    }

    /// Text input changed: re-run the search and open the list.
    pub fn on_query_changed(&mut self, store: &CatalogStore, text: &str) -> SessionState {
        self.query = text.to_string();
        self.refresh(store);

        self.state
    }

    /// Focus gained. An empty query opens the hint; a persisted query is
    /// searched again against the current index.
    pub fn on_focus(&mut self, store: &CatalogStore) -> SessionState {
        self.is_focused = true;
        self.refresh(store);

        self.state
    }

    /// Focus lost. The query text is kept for when the list reopens.
    pub fn on_blur(&mut self) -> SessionState {
        self.is_focused = false;
        self.state = SessionState::Closed;

        self.state
    }

    /// A pointer or selection event landed outside the component.
    pub fn on_outside_interaction(&mut self) -> SessionState {
        self.state = SessionState::Closed;

        self.state
    }

    /// Selects the result at `position`.
    ///
    /// Commits the canonical `"{name} ({symbol})"` label as the query, closes
    /// the list and hands the ticker to the selection handler. Returns `None`
    /// when the list is closed or `position` is out of range.
    pub fn on_select(&mut self, position: usize) -> Option<TickerSymbol> {
        if !self.is_open() {
            return None;
        }

        let record = self.results.get(position)?.clone();
        self.commit(&record);

        Some(record.ticker)
    }

    /// Selects a record directly, e.g. one of the curated suggestions.
    pub fn on_select_record(&mut self, record: &CompanyRecord) -> TickerSymbol {
        self.commit(record);

        record.ticker.clone()
    }

    fn commit(&mut self, record: &CompanyRecord) {
        self.query = record.display_label();
        self.state = SessionState::Closed;

        debug!("Selected {} as {:?}", record.ticker, self.query);

        if let Some(handler) = self.selection_handler.as_mut() {
            handler(&record.ticker);
        }
    }

    fn refresh(&mut self, store: &CatalogStore) {
        self.results = store
            .search(&self.query, self.limit)
            .into_iter()
            .cloned()
            .collect();

        let min_query_length = store.search_config().min_query_length;

        self.state = if self.query.chars().count() < min_query_length {
            SessionState::OpenEmpty
        } else if self.results.is_empty() {
            SessionState::OpenNoMatch
        } else {
            SessionState::OpenResults
        };
    }
}

impl Default for QuerySession {
    fn default() -> Self {
        Self::new()
    }
}
