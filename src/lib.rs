#[cfg(test)]
#[macro_use]
extern crate assert_float_eq;

pub mod browse;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod runbook;
pub mod share;
pub mod shopping;
pub mod state;

pub use error::{Result, SushiError};
pub use models::{AggregatedIngredient, Catalog, Ingredient, MenuCategory, MenuItem, ShoppingList};
pub use shopping::aggregate;
pub use state::{Cart, CartEntry, Session};
