use std::fmt;

use serde::{Deserialize, Serialize};

/// Menu section a dish is listed under.
///
/// Catalog files carry the display string; anything outside the four known
/// sections is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MenuCategory {
    Appetizer,
    Nigiri,
    MakiRolls,
    SpecialityRolls,
    Other(String),
}

impl MenuCategory {
    pub fn as_str(&self) -> &str {
        match self {
            MenuCategory::Appetizer => "Appetizer",
            MenuCategory::Nigiri => "Nigiri",
            MenuCategory::MakiRolls => "Maki Rolls",
            MenuCategory::SpecialityRolls => "Speciality Rolls",
            MenuCategory::Other(name) => name,
        }
    }

    /// Rolls pull the smart ingredients into the shopping list.
    #[inline]
    pub fn is_roll(&self) -> bool {
        matches!(self, MenuCategory::MakiRolls | MenuCategory::SpecialityRolls)
    }

    /// True for the placeholder left by a catalog item without a category.
    pub fn is_unset(&self) -> bool {
        matches!(self, MenuCategory::Other(name) if name.trim().is_empty())
    }

    /// Case-insensitive match against a display name.
    pub fn matches(&self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name.trim())
    }
}

impl Default for MenuCategory {
    fn default() -> Self {
        MenuCategory::Other(String::new())
    }
}

impl From<String> for MenuCategory {
    fn from(value: String) -> Self {
        match value.trim() {
            "Appetizer" => MenuCategory::Appetizer,
            "Nigiri" => MenuCategory::Nigiri,
            "Maki Rolls" => MenuCategory::MakiRolls,
            "Speciality Rolls" => MenuCategory::SpecialityRolls,
            other => MenuCategory::Other(other.to_string()),
        }
    }
}

impl From<&str> for MenuCategory {
    fn from(value: &str) -> Self {
        MenuCategory::from(value.to_string())
    }
}

impl From<MenuCategory> for String {
    fn from(value: MenuCategory) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dish on the menu. Reference data, never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,

    #[serde(default)]
    pub category: MenuCategory,

    #[serde(default)]
    pub ingredients_inside: Vec<String>,

    #[serde(default)]
    pub ingredients_on_top: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl MenuItem {
    /// Inside ingredients followed by on-top ingredients, trimmed, empties dropped.
    ///
    /// Duplicates are kept: a name listed in both places is yielded twice.
    pub fn all_ingredients(&self) -> impl Iterator<Item = &str> {
        self.ingredients_inside
            .iter()
            .chain(self.ingredients_on_top.iter())
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
    }

    /// Identity used by the cart: (name, category).
    pub fn key(&self) -> MenuItemRef {
        MenuItemRef {
            name: self.name.clone(),
            category: self.category.clone(),
        }
    }

    pub fn same_item(&self, other: &MenuItem) -> bool {
        self.name == other.name && self.category == other.category
    }
}

/// Lightweight reference to a menu item, used in share links.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItemRef {
    pub name: String,
    pub category: MenuCategory,
}

impl MenuItemRef {
    pub fn refers_to(&self, item: &MenuItem) -> bool {
        self.name == item.name && self.category == item.category
    }
}
