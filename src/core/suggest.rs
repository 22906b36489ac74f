//! Header search box autocomplete
//!
//! Suggestions come from a fixed list and are matched by case-insensitive
//! substring once the query is long enough.

/// Autocomplete entries offered by the header search box
pub const SEARCH_SUGGESTIONS: &[&str] = &[
    "Aadhaar Card",
    "Passport Application",
    "Income Tax",
    "Driving License",
    "PAN Card",
    "Voter ID",
    "Birth Certificate",
    "Marriage Certificate",
    "Property Registration",
    "Business License",
];

/// Returns the suggestions matching `query`
///
/// The raw query (not trimmed) must have at least `min_chars` characters,
/// otherwise nothing is suggested.
pub fn suggest(query: &str, min_chars: usize) -> Vec<&'static str> {
    if query.chars().count() < min_chars {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    SEARCH_SUGGESTIONS
        .iter()
        .copied()
        .filter(|item| item.to_lowercase().contains(&needle))
        .collect()
}

/// Returns the mock search notice for a submitted query
///
/// Blank queries perform no search.
pub fn search_notice(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        None
    } else {
        Some(format!(
            "Searching for: \"{}\"\n\nThis would redirect to search results page in a real implementation.",
            query
        ))
    }
}
