use crate::models::SearchMatch;

/// Sorts matches ascending by score, best match first.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by score in ascending order (`0.0` is an exact match).
/// - **Secondary:** If two matches have the same score, sorts by catalog
///   position so identical input always yields identical output.
pub fn sort_matches(matches: &mut [SearchMatch<'_>]) {
    matches.sort_by(|a, b| {
        a.score
            .partial_cmp(&b.score) // Sort by score (ascending)
            .unwrap_or(std::cmp::Ordering::Equal) // Handle NaN gracefully
            .then_with(|| a.catalog_index.cmp(&b.catalog_index)) // Secondary sort by catalog order
    });
}
