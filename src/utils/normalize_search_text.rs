/// Lowercases the text and collapses every run of whitespace into a single
/// space, trimming both ends.
///
/// Both search keys and queries go through this so matching is
/// case-insensitive and indifferent to spacing.
///
/// ```rust
/// use company_lookup::normalize_search_text;
///
/// let normalized: String = normalize_search_text("  Tata   MOTORS\t").into_iter().collect();
/// assert_eq!(normalized, "tata motors");
/// ```
pub fn normalize_search_text(text: &str) -> Vec<char> {
    let mut normalized = Vec::with_capacity(text.len());

    for word in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.extend(word.chars().flat_map(char::to_lowercase));
    }

    normalized
}

/// Marks the positions of `chars` at which a whitespace-delimited token begins.
///
/// The result has `chars.len() + 1` entries; entry `j` is `true` when an
/// alignment may start just before `chars[j]`. Entry `0` is always `true`.
pub fn token_start_positions(chars: &[char]) -> Vec<bool> {
    (0..=chars.len())
        .map(|position| position == 0 || chars[position - 1].is_whitespace())
        .collect()
}
