use serde::{Deserialize, Serialize};

/// An ingredient from the catalog.
///
/// `name` is the lookup key and is compared case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub store: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses_per_purchase: Option<u32>,

    /// Package size as printed by the store, e.g. "2 lb bag".
    #[serde(default, rename = "quantity", skip_serializing_if = "String::is_empty")]
    pub package_size: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            ..Default::default()
        }
    }

    pub fn with_store(mut self, store: impl Into<String>) -> Self {
        self.store = store.into();
        self
    }

    pub fn with_cost(mut self, cost: f64, uses_per_purchase: u32) -> Self {
        self.cost = Some(cost);
        self.uses_per_purchase = Some(uses_per_purchase);
        self
    }

    pub fn with_unit_cost(mut self, unit_cost: f64) -> Self {
        self.unit_cost = Some(unit_cost);
        self
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
