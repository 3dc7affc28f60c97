pub mod catalog;
pub mod ingredient;
pub mod menu;
pub mod runbook;
pub mod shopping;

pub use catalog::Catalog;
pub use ingredient::Ingredient;
pub use menu::{MenuCategory, MenuItem, MenuItemRef};
pub use runbook::RunbookItem;
pub use shopping::{AggregatedIngredient, ShoppingList};
