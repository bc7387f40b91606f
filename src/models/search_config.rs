use crate::types::MatchScore;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SearchConfig {
    /// Matches scoring above this value are discarded.
    pub threshold: MatchScore,
    /// Default number of results returned by convenience entry points.
    pub limit: usize,
    /// Queries with fewer characters than this return no results.
    pub min_query_length: usize,
    /// Added to the score of an alignment that does not begin at a token start.
    pub mid_token_penalty: MatchScore,
}
