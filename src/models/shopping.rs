use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::Ingredient;

/// An ingredient with the total quantity the cart calls for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedIngredient {
    pub name: String,
    pub category: String,
    pub store: String,
    pub cost: Option<f64>,
    pub unit_cost: Option<f64>,
    pub uses_per_purchase: Option<u32>,
    /// Package size as sold, e.g. "1 lb". Empty when unknown.
    pub package_size: String,
    pub total_qty: u32,
}

impl AggregatedIngredient {
    /// Working record for a catalog ingredient, starting at zero.
    pub fn from_ingredient(ingredient: &Ingredient) -> Self {
        Self {
            name: ingredient.name.clone(),
            category: ingredient.category.clone(),
            store: ingredient.store.clone(),
            cost: ingredient.cost,
            unit_cost: ingredient.unit_cost,
            uses_per_purchase: ingredient.uses_per_purchase,
            package_size: ingredient.package_size.clone(),
            total_qty: 0,
        }
    }

    /// Record for a name the catalog does not know.
    pub fn fallback(name: &str, category: &str, qty: u32) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            store: String::new(),
            cost: None,
            unit_cost: None,
            uses_per_purchase: None,
            package_size: String::new(),
            total_qty: qty,
        }
    }
}

/// Aggregated ingredients grouped by category.
///
/// `categories` holds the group keys in display order; every key has a
/// non-empty group.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShoppingList {
    pub groups: BTreeMap<String, Vec<AggregatedIngredient>>,
    pub categories: Vec<String>,
}

impl ShoppingList {
    /// Iterate groups in category order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[AggregatedIngredient])> {
        self.categories.iter().filter_map(|category| {
            self.groups
                .get(category)
                .map(|items| (category.as_str(), items.as_slice()))
        })
    }

    /// All ingredients in display order.
    pub fn items(&self) -> impl Iterator<Item = &AggregatedIngredient> {
        self.iter().flat_map(|(_, items)| items.iter())
    }

    /// Find an ingredient by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&AggregatedIngredient> {
        let key = name.to_lowercase();
        self.items().find(|item| item.name.to_lowercase() == key)
    }

    /// Number of distinct ingredients.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
