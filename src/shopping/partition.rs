use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{AggregatedIngredient, ShoppingList};
use crate::shopping::constants::ALREADY_HAVE_SEPARATOR;

/// Composite key marking an aggregated ingredient as already in the pantry.
pub fn already_have_key(name: &str, store: &str, category: &str) -> String {
    format!(
        "{name}{sep}{store}{sep}{category}",
        sep = ALREADY_HAVE_SEPARATOR
    )
}

impl AggregatedIngredient {
    pub fn already_have_key(&self) -> String {
        already_have_key(&self.name, &self.store, &self.category)
    }
}

/// Ingredients the user marked as not needing to buy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlreadyHaveSet {
    keys: BTreeSet<String>,
}

impl AlreadyHaveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a key. Returns true if the key is now marked.
    pub fn toggle(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn has(&self, ingredient: &AggregatedIngredient) -> bool {
        self.contains(&ingredient.already_have_key())
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

/// A shopping list split into what to buy and what is already on hand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingPartition {
    pub need: Vec<AggregatedIngredient>,
    pub have: Vec<AggregatedIngredient>,
}

impl ShoppingPartition {
    pub fn is_empty(&self) -> bool {
        self.need.is_empty() && self.have.is_empty()
    }
}

/// Split an aggregated list by the already-have keys, keeping display order.
pub fn partition(list: &ShoppingList, already_have: &AlreadyHaveSet) -> ShoppingPartition {
    let (have, need): (Vec<_>, Vec<_>) = list
        .items()
        .cloned()
        .partition(|item| already_have.has(item));

    ShoppingPartition { need, have }
}
