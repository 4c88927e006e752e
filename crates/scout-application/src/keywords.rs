//! Keyword tags shown under the search box.
//!
//! The discovery view echoes a few salient words of the free-text query back
//! to the user as tags while the search runs.

/// Words shorter than this are treated as filler ("con", "en", "de").
const MIN_KEYWORD_CHARS: usize = 4;
const MAX_KEYWORDS: usize = 3;

/// Picks up to three words of at least four characters, in query order.
pub fn extract_keywords(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_KEYWORD_CHARS)
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}
