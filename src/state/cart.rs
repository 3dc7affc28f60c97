use serde::{Deserialize, Serialize};

use crate::models::MenuItem;
use crate::shopping::constants::{MAX_CART_QUANTITY, MIN_CART_QUANTITY};

/// A menu item in the cart with its quantity.
///
/// A missing quantity reads as one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub item: MenuItem,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

impl CartEntry {
    pub fn new(item: MenuItem, quantity: u32) -> Self {
        Self {
            item,
            quantity: Some(quantity),
        }
    }

    #[inline]
    pub fn quantity_or_default(&self) -> u32 {
        self.quantity.unwrap_or(MIN_CART_QUANTITY)
    }
}

/// The user's selection, unique by (name, category), in insertion order.
///
/// Deserialized entries go through [`Cart::from_entries`], so a hand-edited
/// file cannot break the key or quantity rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CartEntry>", into = "Vec<CartEntry>")]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl From<Vec<CartEntry>> for Cart {
    fn from(entries: Vec<CartEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<Cart> for Vec<CartEntry> {
    fn from(cart: Cart) -> Self {
        cart.entries
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from raw entries.
    ///
    /// Repeated (name, category) keys are merged into the first one, explicit
    /// zero quantities are dropped and totals are clamped to the cart range.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = CartEntry>,
    {
        let mut cart = Self::new();
        for entry in entries {
            if entry.quantity == Some(0) {
                tracing::debug!(item = %entry.item.name, "dropping cart entry with zero quantity");
                continue;
            }

            let qty = entry.quantity_or_default();
            match cart.position(&entry.item) {
                Some(idx) => {
                    let existing = &mut cart.entries[idx];
                    let merged = existing.quantity_or_default().saturating_add(qty);
                    existing.quantity = Some(merged.min(MAX_CART_QUANTITY));
                }
                None => {
                    let clamped = qty.clamp(MIN_CART_QUANTITY, MAX_CART_QUANTITY);
                    cart.entries.push(CartEntry::new(entry.item, clamped));
                }
            }
        }
        cart
    }

    fn position(&self, item: &MenuItem) -> Option<usize> {
        self.entries.iter().position(|e| e.item.same_item(item))
    }

    /// Add one of an item; existing entries go up by one, capped at the maximum.
    pub fn add(&mut self, item: &MenuItem) {
        match self.position(item) {
            Some(idx) => {
                let entry = &mut self.entries[idx];
                let current = entry.quantity_or_default();
                if current < MAX_CART_QUANTITY {
                    entry.quantity = Some(current + 1);
                }
                tracing::debug!(item = %item.name, quantity = entry.quantity_or_default(), "cart add");
            }
            None => {
                self.entries.push(CartEntry::new(item.clone(), MIN_CART_QUANTITY));
                tracing::debug!(item = %item.name, "cart insert");
            }
        }
    }

    /// Remove an item entirely. No-op if absent.
    pub fn remove(&mut self, item: &MenuItem) {
        if let Some(idx) = self.position(item) {
            self.entries.remove(idx);
            tracing::debug!(item = %item.name, "cart remove");
        }
    }

    /// Set the quantity of an item already in the cart.
    ///
    /// Anything below one removes the entry; larger values are clamped to
    /// the allowed range. Items not in the cart are left alone.
    pub fn set_quantity(&mut self, item: &MenuItem, qty: i64) {
        if qty < i64::from(MIN_CART_QUANTITY) {
            self.remove(item);
            return;
        }

        let clamped = qty.clamp(i64::from(MIN_CART_QUANTITY), i64::from(MAX_CART_QUANTITY)) as u32;
        if let Some(idx) = self.position(item) {
            self.entries[idx].quantity = Some(clamped);
            tracing::debug!(item = %item.name, quantity = clamped, "cart set quantity");
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Quantity of an item, if present.
    pub fn quantity_of(&self, item: &MenuItem) -> Option<u32> {
        self.position(item)
            .map(|idx| self.entries[idx].quantity_or_default())
    }

    pub fn contains(&self, item: &MenuItem) -> bool {
        self.position(item).is_some()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Sum of all quantities.
    pub fn total_items(&self) -> u32 {
        self.entries.iter().map(CartEntry::quantity_or_default).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuCategory;

    fn dish(name: &str, category: MenuCategory) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            category,
            ingredients_inside: vec!["Rice".to_string()],
            ingredients_on_top: Vec::new(),
            description: None,
            price: None,
        }
    }

    #[test]
    fn test_add_inserts_then_increments() {
        let mut cart = Cart::new();
        let roll = dish("California Roll", MenuCategory::MakiRolls);

        cart.add(&roll);
        assert_eq!(cart.quantity_of(&roll), Some(1));

        cart.add(&roll);
        assert_eq!(cart.quantity_of(&roll), Some(2));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_add_caps_at_five() {
        let mut cart = Cart::new();
        let roll = dish("California Roll", MenuCategory::MakiRolls);
        for _ in 0..8 {
            cart.add(&roll);
        }
        assert_eq!(cart.quantity_of(&roll), Some(5));
    }

    #[test]
    fn test_same_name_different_category_are_distinct() {
        let mut cart = Cart::new();
        cart.add(&dish("Salmon", MenuCategory::Nigiri));
        cart.add(&dish("Salmon", MenuCategory::Appetizer));
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_remove_is_noop_when_absent() {
        let mut cart = Cart::new();
        let roll = dish("California Roll", MenuCategory::MakiRolls);
        cart.remove(&roll);
        assert!(cart.is_empty());

        cart.add(&roll);
        cart.remove(&roll);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_clamps_and_removes() {
        let mut cart = Cart::new();
        let roll = dish("California Roll", MenuCategory::MakiRolls);
        cart.add(&roll);

        cart.set_quantity(&roll, 9);
        assert_eq!(cart.quantity_of(&roll), Some(5));

        cart.set_quantity(&roll, 3);
        assert_eq!(cart.quantity_of(&roll), Some(3));

        cart.set_quantity(&roll, 0);
        assert!(!cart.contains(&roll));
    }

    #[test]
    fn test_set_quantity_does_not_insert() {
        let mut cart = Cart::new();
        let roll = dish("California Roll", MenuCategory::MakiRolls);
        cart.set_quantity(&roll, 3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_from_entries_merges_and_clamps() {
        let roll = dish("Tuna Roll", MenuCategory::MakiRolls);
        let nigiri = dish("Tuna Roll", MenuCategory::Nigiri);
        let cart = Cart::from_entries(vec![
            CartEntry::new(roll.clone(), 9),
            CartEntry::new(roll.clone(), 0),
            CartEntry::new(nigiri.clone(), u32::MAX),
            CartEntry::new(roll.clone(), 2),
        ]);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.quantity_of(&roll), Some(5));
        assert_eq!(cart.quantity_of(&nigiri), Some(5));
        assert_eq!(cart.total_items(), 10);
    }

    #[test]
    fn test_deserialize_enforces_cart_rules() {
        let json = r#"[
            {"item": {"name": "Tuna Roll", "category": "Maki Rolls"}, "quantity": 9},
            {"item": {"name": "Tuna Roll", "category": "Maki Rolls"}, "quantity": 0},
            {"item": {"name": "Edamame", "category": "Appetizer"}, "quantity": 0}
        ]"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), 5);
    }

    #[test]
    fn test_entry_without_quantity_deserializes_as_one() {
        let json = r#"[{"item": {"name": "Edamame", "category": "Appetizer"}}]"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.total_items(), 1);
    }
}
