use indexmap::IndexMap;
use serde::Deserialize;

use crate::models::{Ingredient, MenuCategory, MenuItem, RunbookItem};

/// On-disk shape of `sushi_data.json`: menu and ingredients grouped by
/// category, runbook as a flat list.
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    menu: IndexMap<String, Vec<MenuItem>>,

    #[serde(default)]
    ingredients: IndexMap<String, Vec<Ingredient>>,

    #[serde(default)]
    runbook: Vec<RunbookItem>,
}

/// Reference data loaded once per session.
///
/// Groups are flattened in file order. Items without their own category
/// inherit the key of the group they were listed under.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "CatalogFile")]
pub struct Catalog {
    pub menu: Vec<MenuItem>,
    pub ingredients: Vec<Ingredient>,
    pub runbook: Vec<RunbookItem>,
}

impl From<CatalogFile> for Catalog {
    fn from(file: CatalogFile) -> Self {
        let menu = file
            .menu
            .into_iter()
            .flat_map(|(group, items)| {
                items.into_iter().map(move |mut item| {
                    if item.category.is_unset() {
                        item.category = MenuCategory::from(group.as_str());
                    }
                    item
                })
            })
            .collect();

        let ingredients = file
            .ingredients
            .into_iter()
            .flat_map(|(group, items)| {
                items.into_iter().map(move |mut ing| {
                    if ing.category.trim().is_empty() {
                        ing.category = group.clone();
                    }
                    ing
                })
            })
            .collect();

        Self {
            menu,
            ingredients,
            runbook: file.runbook,
        }
    }
}

impl Catalog {
    pub fn new(menu: Vec<MenuItem>, ingredients: Vec<Ingredient>, runbook: Vec<RunbookItem>) -> Self {
        Self {
            menu,
            ingredients,
            runbook,
        }
    }

    /// Menu items grouped by category, in order of first appearance.
    pub fn menu_groups(&self) -> IndexMap<&MenuCategory, Vec<&MenuItem>> {
        let mut groups: IndexMap<&MenuCategory, Vec<&MenuItem>> = IndexMap::new();
        for item in &self.menu {
            groups.entry(&item.category).or_default().push(item);
        }
        groups
    }

    /// Find an ingredient by name (case-insensitive). Last listing wins.
    pub fn ingredient(&self, name: &str) -> Option<&Ingredient> {
        let key = name.trim().to_lowercase();
        self.ingredients.iter().rev().find(|ing| ing.key() == key)
    }

    /// Find a menu item by exact (name, category).
    pub fn menu_item(&self, name: &str, category: &MenuCategory) -> Option<&MenuItem> {
        self.menu
            .iter()
            .find(|item| item.name == name && &item.category == category)
    }

    pub fn is_empty(&self) -> bool {
        self.menu.is_empty() && self.ingredients.is_empty() && self.runbook.is_empty()
    }
}
