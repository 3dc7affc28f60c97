pub mod lookup;
pub mod recipe;
pub mod search;

pub use lookup::{find_item, ItemMatch};
pub use recipe::{recipe, Placement, Recipe, RecipeLine};
pub use search::{by_category, search, veggie_favorites};
