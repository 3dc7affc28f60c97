use strsim::jaro_winkler;

use crate::models::{Catalog, MenuItem};

/// Minimum Jaro-Winkler similarity for a fuzzy suggestion.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Most suggestions offered for one lookup.
pub const MAX_SUGGESTIONS: usize = 5;

/// Result of looking up a menu item by typed name.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemMatch<'a> {
    Exact(&'a MenuItem),
    /// Close names, best first.
    Suggestions(Vec<&'a MenuItem>),
    NotFound,
}

/// Find a menu item by name, optionally restricted to one category.
///
/// Exact (case-insensitive) matches win; otherwise names above the
/// similarity threshold are suggested.
pub fn find_item<'a>(catalog: &'a Catalog, name: &str, category: Option<&str>) -> ItemMatch<'a> {
    let wanted = name.trim().to_lowercase();
    let candidates: Vec<&MenuItem> = catalog
        .menu
        .iter()
        .filter(|item| category.is_none_or(|c| item.category.matches(c)))
        .collect();

    if let Some(&item) = candidates
        .iter()
        .find(|item| item.name.to_lowercase() == wanted)
    {
        return ItemMatch::Exact(item);
    }

    let mut scored: Vec<(&MenuItem, f64)> = candidates
        .into_iter()
        .map(|item| (item, jaro_winkler(&item.name.to_lowercase(), &wanted)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    if scored.is_empty() {
        return ItemMatch::NotFound;
    }

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    ItemMatch::Suggestions(
        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(item, _)| item)
            .collect(),
    )
}
