use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use crate::models::{AggregatedIngredient, Ingredient, ShoppingList};
use crate::shopping::constants::{FALLBACK_CATEGORY, SMART_INGREDIENTS, SMART_INGREDIENT_BASELINE};
use crate::state::CartEntry;

/// Derive the shopping list for a cart.
///
/// Steps:
/// 1. Index the catalog by lowercase name, every record starting at zero
/// 2. If any roll is in the cart, set the smart ingredients to the baseline
/// 3. Add each entry's quantity once per ingredient mention (inside and on top)
/// 4. Synthesize an `Other` record for names the catalog does not know
/// 5. Drop untouched records, group by category and sort
///
/// The function is total: malformed input degrades to fallback records.
pub fn aggregate(cart: &[CartEntry], catalog: &[Ingredient]) -> ShoppingList {
    let mut lookup: HashMap<String, AggregatedIngredient> = HashMap::with_capacity(catalog.len());
    for ingredient in catalog {
        lookup.insert(ingredient.key(), AggregatedIngredient::from_ingredient(ingredient));
    }

    let has_rolls = cart.iter().any(|entry| entry.item.category.is_roll());
    if has_rolls {
        for name in SMART_INGREDIENTS {
            // Assignment, not addition: recipe mentions are added on top below.
            if let Some(record) = lookup.get_mut(&name.to_lowercase()) {
                record.total_qty = SMART_INGREDIENT_BASELINE;
            }
        }
    }

    for entry in cart {
        let qty = entry.quantity_or_default();
        for name in entry.item.all_ingredients() {
            lookup
                .entry(name.to_lowercase())
                .and_modify(|record| record.total_qty = record.total_qty.saturating_add(qty))
                .or_insert_with(|| AggregatedIngredient::fallback(name, FALLBACK_CATEGORY, qty));
        }
    }

    let mut groups: BTreeMap<String, Vec<AggregatedIngredient>> = BTreeMap::new();
    for record in lookup.into_values().filter(|r| r.total_qty > 0) {
        let category = if record.category.trim().is_empty() {
            FALLBACK_CATEGORY.to_string()
        } else {
            record.category.clone()
        };
        groups.entry(category).or_default().push(record);
    }

    for items in groups.values_mut() {
        items.sort_by(|a, b| locale_cmp(&a.name, &b.name));
    }

    let categories: Vec<String> = groups.keys().cloned().collect();

    tracing::debug!(
        entries = cart.len(),
        has_rolls,
        categories = categories.len(),
        "aggregated shopping list"
    );

    ShoppingList { groups, categories }
}

/// Alphabetical order the way a reader expects it: case folded first, raw
/// string as a tie-break so the order stays total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
