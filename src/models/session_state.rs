/// Visibility of the suggestion list and what it currently shows.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No suggestion list is visible.
    Closed,
    /// Visible, with no query or a query too short to search.
    OpenEmpty,
    /// Visible, showing ranked matches.
    OpenResults,
    /// Visible, the query qualified for a search but nothing matched.
    OpenNoMatch,
}

impl SessionState {
    pub fn is_open(self) -> bool {
        self != SessionState::Closed
    }
}
