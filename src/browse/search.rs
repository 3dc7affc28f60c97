use crate::models::{Catalog, MenuItem};
use crate::shopping::constants::MEAT_AND_FISH_CATEGORY;

/// Items whose name or any ingredient contains the query (case-insensitive).
///
/// An empty query matches nothing. Catalog order is kept.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a MenuItem> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    catalog
        .menu
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&query)
                || item
                    .all_ingredients()
                    .any(|ing| ing.to_lowercase().contains(&query))
        })
        .collect()
}

/// Items listed under one category (display name, case-insensitive).
pub fn by_category<'a>(catalog: &'a Catalog, category: &str) -> Vec<&'a MenuItem> {
    catalog
        .menu
        .iter()
        .filter(|item| item.category.matches(category))
        .collect()
}

/// Dishes without any meat or fish.
///
/// An item is excluded when one of its ingredients is listed in the catalog
/// under the meat and fish category. Ingredients the catalog does not know
/// do not exclude an item.
pub fn veggie_favorites(catalog: &Catalog) -> Vec<&MenuItem> {
    catalog
        .menu
        .iter()
        .filter(|item| !contains_meat_or_fish(catalog, item))
        .collect()
}

fn contains_meat_or_fish(catalog: &Catalog, item: &MenuItem) -> bool {
    item.all_ingredients().any(|name| {
        catalog
            .ingredient(name)
            .map(|ing| ing.category.trim().eq_ignore_ascii_case(MEAT_AND_FISH_CATEGORY))
            .unwrap_or(false)
    })
}
