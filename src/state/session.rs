use serde::{Deserialize, Serialize};

use crate::models::{Catalog, MenuItem, MenuItemRef, ShoppingList};
use crate::shopping::{self, AlreadyHaveSet, ShoppingPartition};
use crate::state::{Cart, CartEntry};

/// Everything one user changes while planning: the cart and the
/// already-have marks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub cart: Cart,
    pub already_have: AlreadyHaveSet,
}

/// A cart line as saved on disk: the dish by (name, category) and its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCartEntry {
    pub item: MenuItemRef,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

/// On-disk form of a [`Session`]. Dishes are stored as references and
/// looked up in the catalog again on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionFile {
    #[serde(default)]
    pub cart: Vec<SavedCartEntry>,

    #[serde(default)]
    pub already_have: AlreadyHaveSet,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a session against the current catalog.
    ///
    /// Dishes no longer in the catalog are dropped with a warning. The cart
    /// rules (unique keys, quantity range) are applied to what remains.
    pub fn restore(file: SessionFile, catalog: &Catalog) -> Self {
        let entries = file.cart.into_iter().filter_map(|saved| {
            match catalog.menu.iter().find(|item| saved.item.refers_to(item)) {
                Some(item) => Some(CartEntry {
                    item: item.clone(),
                    quantity: saved.quantity,
                }),
                None => {
                    tracing::warn!(
                        item = %saved.item.name,
                        category = %saved.item.category,
                        "saved cart item not in catalog, dropping"
                    );
                    None
                }
            }
        });

        Self {
            cart: Cart::from_entries(entries),
            already_have: file.already_have,
        }
    }

    /// The on-disk form of this session.
    pub fn to_file(&self) -> SessionFile {
        SessionFile {
            cart: self
                .cart
                .entries()
                .iter()
                .map(|entry| SavedCartEntry {
                    item: entry.item.key(),
                    quantity: entry.quantity,
                })
                .collect(),
            already_have: self.already_have.clone(),
        }
    }

    pub fn add_to_cart(&mut self, item: &MenuItem) {
        self.cart.add(item);
    }

    pub fn remove_from_cart(&mut self, item: &MenuItem) {
        self.cart.remove(item);
    }

    pub fn set_cart_quantity(&mut self, item: &MenuItem, qty: i64) {
        self.cart.set_quantity(item, qty);
    }

    /// Replace the cart with the given items at quantity one each.
    pub fn replace_cart<'a, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'a MenuItem>,
    {
        self.cart.clear();
        for item in items {
            self.cart.add(item);
        }
    }

    /// Recompute the shopping list from the current cart.
    pub fn shopping_list(&self, catalog: &Catalog) -> ShoppingList {
        shopping::aggregate(self.cart.entries(), &catalog.ingredients)
    }

    /// Shopping list split by the already-have marks.
    pub fn shopping_partition(&self, catalog: &Catalog) -> ShoppingPartition {
        shopping::partition(&self.shopping_list(catalog), &self.already_have)
    }

    /// Toggle the already-have mark for a shopping list ingredient by name.
    ///
    /// Returns `Some(marked)` or `None` if the ingredient is not on the list.
    pub fn toggle_already_have(&mut self, list: &ShoppingList, name: &str) -> Option<bool> {
        let item = list.get(name.trim())?;
        Some(self.already_have.toggle(item.already_have_key()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ingredient, MenuCategory};

    fn catalog() -> Catalog {
        let roll = MenuItem {
            name: "Cucumber Roll".to_string(),
            category: MenuCategory::MakiRolls,
            ingredients_inside: vec!["Cucumber".to_string()],
            ingredients_on_top: Vec::new(),
            description: None,
            price: None,
        };
        Catalog::new(
            vec![roll],
            vec![
                Ingredient::new("Cucumber", "Produce"),
                Ingredient::new("Rice", "Grain"),
                Ingredient::new("Soy Sauce", "Condiment"),
                Ingredient::new("Wasabi", "Condiment"),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn test_toggle_moves_item_between_partitions() {
        let catalog = catalog();
        let mut session = Session::new();
        session.add_to_cart(&catalog.menu[0]);

        let list = session.shopping_list(&catalog);
        assert_eq!(session.shopping_partition(&catalog).need.len(), 4);

        assert_eq!(session.toggle_already_have(&list, "wasabi"), Some(true));
        let split = session.shopping_partition(&catalog);
        assert_eq!(split.need.len(), 3);
        assert_eq!(split.have.len(), 1);
        assert_eq!(split.have[0].name, "Wasabi");

        assert_eq!(session.toggle_already_have(&list, "Wasabi"), Some(false));
        assert!(session.shopping_partition(&catalog).have.is_empty());
    }

    #[test]
    fn test_restore_uses_current_recipe_and_drops_missing() {
        let catalog = catalog();
        let file: SessionFile = serde_json::from_str(
            r#"{
                "cart": [
                    {"item": {"name": "Cucumber Roll", "category": "Maki Rolls"}, "quantity": 2},
                    {"item": {"name": "Volcano Roll", "category": "Speciality Rolls"}, "quantity": 1}
                ],
                "already_have": ["Rice--Grain"]
            }"#,
        )
        .unwrap();

        let session = Session::restore(file, &catalog);
        assert_eq!(session.cart.len(), 1);
        assert_eq!(session.cart.entries()[0].item, catalog.menu[0]);
        assert_eq!(session.cart.total_items(), 2);
        assert!(session.already_have.contains("Rice--Grain"));
    }

    #[test]
    fn test_to_file_keeps_only_references() {
        let catalog = catalog();
        let mut session = Session::new();
        session.add_to_cart(&catalog.menu[0]);

        let json = serde_json::to_string(&session.to_file()).unwrap();
        assert!(json.contains("Cucumber Roll"));
        assert!(!json.contains("ingredients_inside"));
        assert_eq!(Session::restore(session.to_file(), &catalog), session);
    }

    #[test]
    fn test_toggle_unknown_ingredient() {
        let catalog = catalog();
        let mut session = Session::new();
        let list = session.shopping_list(&catalog);
        assert_eq!(session.toggle_already_have(&list, "Tuna"), None);
        assert!(session.already_have.is_empty());
    }
}
