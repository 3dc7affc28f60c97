/// Ingredients every roll needs on the table, whatever the recipe says.
pub const SMART_INGREDIENTS: [&str; 3] = ["Rice", "Soy Sauce", "Wasabi"];

/// Baseline quantity assigned to each smart ingredient when a roll is in the cart.
pub const SMART_INGREDIENT_BASELINE: u32 = 1;

/// Category given to ingredients the catalog does not list, and to
/// ingredients with an empty category.
pub const FALLBACK_CATEGORY: &str = "Other";

/// Smallest quantity a cart entry can hold.
pub const MIN_CART_QUANTITY: u32 = 1;

/// Largest quantity a cart entry can hold.
pub const MAX_CART_QUANTITY: u32 = 5;

/// Ingredient category that disqualifies a dish from the veggie filter.
pub const MEAT_AND_FISH_CATEGORY: &str = "Meat & Fish";

/// Separator for already-have keys (`name-store-category`).
pub const ALREADY_HAVE_SEPARATOR: char = '-';
