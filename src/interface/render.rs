use crate::browse::{Recipe, RecipeLine};
use crate::models::{MenuItem, RunbookItem};
use crate::share::ResolvedEvent;
use crate::shopping::{estimate_cost, estimate_total, unpriced_count, ShoppingPartition};
use crate::state::Cart;

fn price_tag(price: Option<f64>) -> String {
    price.map(|p| format!(" (${:.2})", p)).unwrap_or_default()
}

/// Display menu items grouped by category, marking what is in the cart.
pub fn display_menu(items: &[&MenuItem], title: &str, cart: &Cart) {
    if items.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, items.len());

    let mut current_category: Option<&str> = None;
    for item in items {
        let category = item.category.as_str();
        if current_category != Some(category) {
            println!();
            println!("--- {} ---", category);
            current_category = Some(category);
        }

        let in_cart = cart
            .quantity_of(item)
            .map(|q| format!("  [in cart x{}]", q))
            .unwrap_or_default();

        println!("  {}{}{}", item.name, price_tag(item.price), in_cart);

        let ingredients: Vec<&str> = item.all_ingredients().collect();
        if !ingredients.is_empty() {
            println!("      {}", ingredients.join(", "));
        }
    }

    println!();
}

fn recipe_line(line: &RecipeLine) -> String {
    let mut out = format!("  - {} [{}]", line.name, line.category);
    if !line.store.is_empty() {
        out.push_str(&format!(" @ {}", line.store));
    }
    if !line.in_catalog {
        out.push_str(" (not in catalog)");
    }
    out
}

/// Display a recipe card.
pub fn display_recipe(recipe: &Recipe) {
    let item = recipe.item;
    println!();
    println!("=== {} ({}) ===", item.name, item.category);
    if let Some(description) = item.description.as_deref().filter(|d| !d.trim().is_empty()) {
        println!("{}", description);
    }

    println!();
    println!("Inside:");
    let mut any = false;
    for line in recipe.inside() {
        println!("{}", recipe_line(line));
        any = true;
    }
    if !any {
        println!("  (nothing)");
    }

    println!();
    println!("On top:");
    any = false;
    for line in recipe.on_top() {
        println!("{}", recipe_line(line));
        any = true;
    }
    if !any {
        println!("  (nothing)");
    }
    println!();
}

/// Display the cart contents.
pub fn display_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("Cart is empty. Use 'cart add <name>' to add dishes.");
        return;
    }

    println!();
    println!("=== Cart ===");
    println!();

    let max_name_len = cart
        .entries()
        .iter()
        .map(|e| e.item.name.len())
        .max()
        .unwrap_or(10);

    for (i, entry) in cart.entries().iter().enumerate() {
        println!(
            "{:>3}. {:<width$}  x{}  ({})",
            i + 1,
            entry.item.name,
            entry.quantity_or_default(),
            entry.item.category,
            width = max_name_len
        );
    }

    println!();
    println!("Total dishes: {}", cart.total_items());
    println!();
}

/// Display the shopping list: what to buy by category, then what is on hand.
pub fn display_shopping_list(split: &ShoppingPartition) {
    if split.is_empty() {
        println!("Shopping list is empty. Add dishes to the cart first.");
        return;
    }

    println!();
    println!("=== Shopping List ===");

    let max_name_len = split
        .need
        .iter()
        .map(|i| i.name.len())
        .max()
        .unwrap_or(10);

    let mut current_category: Option<&str> = None;
    for item in &split.need {
        if current_category != Some(item.category.as_str()) {
            println!();
            println!("--- {} ---", item.category);
            current_category = Some(item.category.as_str());
        }

        let store = if item.store.is_empty() {
            String::new()
        } else {
            format!(" @ {}", item.store)
        };
        let cost = estimate_cost(item)
            .map(|c| format!("  ~${:.2}", c))
            .unwrap_or_default();
        let package = if item.package_size.is_empty() {
            String::new()
        } else {
            format!(" ({})", item.package_size)
        };
        println!(
            "  [ ] {:<width$}  x{}{}{}{}",
            item.name,
            item.total_qty,
            store,
            cost,
            package,
            width = max_name_len
        );
    }

    if !split.have.is_empty() {
        println!();
        println!("--- Already have ---");
        for item in &split.have {
            println!("  [x] {}  x{}", item.name, item.total_qty);
        }
    }

    println!();
    println!("--- Summary ---");
    println!("To buy: {} ingredients", split.need.len());
    println!("Already have: {} ingredients", split.have.len());
    println!("Estimated cost: ${:.2}", estimate_total(&split.need));
    let unpriced = unpriced_count(&split.need);
    if unpriced > 0 {
        println!("({} ingredients without price data)", unpriced);
    }
    println!();
}

/// Display the runbook in the given order.
pub fn display_runbook(items: &[&RunbookItem], advanced: bool, progress: (usize, usize)) {
    if items.is_empty() {
        println!("Runbook is empty.");
        return;
    }

    let level = if advanced { "advanced" } else { "beginner" };
    println!();
    println!("=== Runbook ({} steps) ===", level);
    println!();

    let max_timeline_len = items.iter().map(|i| i.timeline.len()).max().unwrap_or(8);

    for item in items {
        let mark = if item.completed { "x" } else { " " };
        let duration = if item.estimated_duration.is_empty() {
            String::new()
        } else {
            format!("  ({})", item.estimated_duration)
        };
        println!(
            "[{}] {:<width$}  {}{}",
            mark,
            item.timeline,
            item.activity,
            duration,
            width = max_timeline_len
        );

        let steps = item.steps(advanced);
        if steps != item.activity {
            for step in steps.lines().filter(|s| !s.trim().is_empty()) {
                println!("      {}", step.trim());
            }
        }
        if !item.notes.is_empty() {
            println!("      Note: {}", item.notes);
        }
    }

    println!();
    println!("Completed: {}/{}", progress.0, progress.1);
    println!();
}

/// Display a shared event menu.
pub fn display_event(event: &ResolvedEvent) {
    println!();
    println!("=== {} ===", event.title);
    println!();

    for item in &event.items {
        println!("  {} ({})", item.name, item.category);
    }

    if !event.missing.is_empty() {
        println!();
        println!("No longer on the menu:");
        for item in &event.missing {
            println!("  {} ({})", item.name, item.category);
        }
    }
    println!();
}
