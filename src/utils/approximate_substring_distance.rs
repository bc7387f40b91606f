use crate::types::EditDistance;

/// Smallest optimal-string-alignment distance between `query` and any
/// substring of `key`.
///
/// Insertions, deletions, substitutions and transpositions of adjacent
/// characters each cost one edit. An alignment may begin at any key
/// position, or only at the positions flagged in `anchors` when given (see
/// `token_start_positions`). The result never exceeds `query.len()`.
///
/// ```rust
/// use company_lookup::approximate_substring_distance;
///
/// let key: Vec<char> = "reliance industries".chars().collect();
/// let query: Vec<char> = "relaince".chars().collect();
/// assert_eq!(approximate_substring_distance(&query, &key, None), 1);
/// ```
pub fn approximate_substring_distance(
    query: &[char],
    key: &[char],
    anchors: Option<&[bool]>,
) -> EditDistance {
    if query.is_empty() {
        return 0;
    }

    let key_len = key.len();

    // Row 0 is the cost of opening an alignment before each key position.
    // Unanchored positions are reached by skipping key characters.
    let mut previous: Vec<EditDistance> = Vec::with_capacity(key_len + 1);
    for position in 0..=key_len {
        let is_anchor =
            position == 0 || anchors.map_or(true, |anchors| anchors.get(position) == Some(&true));

        if is_anchor {
            previous.push(0);
        } else {
            let skipped = previous[position - 1] + 1;
            previous.push(skipped);
        }
    }

    let mut before_previous: Vec<EditDistance> = vec![0; key_len + 1];
    let mut current: Vec<EditDistance> = vec![0; key_len + 1];

    for query_idx in 1..=query.len() {
        let query_char = query[query_idx - 1];
        current[0] = query_idx;

        for key_idx in 1..=key_len {
            let key_char = key[key_idx - 1];
            let substitution_cost = if query_char == key_char { 0 } else { 1 };

            let mut distance = (previous[key_idx] + 1)
                .min(current[key_idx - 1] + 1)
                .min(previous[key_idx - 1] + substitution_cost);

            if query_idx > 1
                && key_idx > 1
                && query_char == key[key_idx - 2]
                && query[query_idx - 2] == key_char
            {
                distance = distance.min(before_previous[key_idx - 2] + 1);
            }

            current[key_idx] = distance;
        }

        std::mem::swap(&mut before_previous, &mut previous);
        std::mem::swap(&mut previous, &mut current);
    }

    // Alignments may end anywhere in the key
    previous.into_iter().min().unwrap_or(query.len())
}
