use std::path::Path;

use clap::Parser;

use sushi_planner_rs::browse::{self, ItemMatch};
use sushi_planner_rs::cli::{CartAction, Cli, Command};
use sushi_planner_rs::config::AppConfig;
use sushi_planner_rs::error::{Result, SushiError};
use sushi_planner_rs::interface::{
    display_cart, display_event, display_menu, display_recipe, display_runbook,
    display_shopping_list, is_interactive, prompt_already_have, prompt_menu_item, prompt_yes_no,
    write_shopping_csv,
};
use sushi_planner_rs::logging::init_logging;
use sushi_planner_rs::models::{Catalog, MenuItem};
use sushi_planner_rs::runbook::{progress, sorted_runbook};
use sushi_planner_rs::share::{self, EventMenu};
use sushi_planner_rs::state::{load_catalog, load_session, save_session, Session};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.catalog {
        config.catalog_path = path;
    }
    if let Some(path) = cli.session {
        config.session_path = path;
    }

    init_logging(&config.log_level, cli.verbose);
    tracing::debug!(?config, "configuration loaded");

    if !config.catalog_path.exists() {
        eprintln!("Catalog file not found: {}", config.catalog_path.display());
        eprintln!("Pass --catalog <path> or set catalog_path in sushi.toml.");
        return Ok(());
    }
    let catalog = load_catalog(&config.catalog_path)?;

    let command = cli.command.unwrap_or_default();
    let ctx = Context {
        catalog: &catalog,
        config: &config,
    };

    match command {
        Command::Menu {
            category,
            search,
            veggie,
        } => cmd_menu(&ctx, category.as_deref(), search.as_deref(), veggie),
        Command::Recipe { name, category } => cmd_recipe(&ctx, &name, category.as_deref()),
        Command::Cart { action } => cmd_cart(&ctx, action.unwrap_or_default()),
        Command::Shopping { csv } => cmd_shopping(&ctx, csv.as_deref()),
        Command::Have {
            names,
            interactive,
            clear,
        } => cmd_have(&ctx, &names, interactive, clear),
        Command::Runbook { advanced, pending } => cmd_runbook(&ctx, advanced, pending),
        Command::Share { title } => cmd_share(&ctx, &title),
        Command::Open { link, load } => cmd_open(&ctx, &link, load),
    }
}

struct Context<'a> {
    catalog: &'a Catalog,
    config: &'a AppConfig,
}

impl Context<'_> {
    fn session(&self) -> Result<Session> {
        load_session(&self.config.session_path, self.catalog)
    }

    fn save(&self, session: &Session) -> Result<()> {
        save_session(&self.config.session_path, session)
    }
}

/// Resolve a typed dish name, asking the user when only close matches exist.
fn resolve_item<'a>(catalog: &'a Catalog, name: &str, category: Option<&str>) -> Result<&'a MenuItem> {
    match browse::find_item(catalog, name, category) {
        ItemMatch::Exact(item) => Ok(item),
        ItemMatch::Suggestions(items) if is_interactive() => {
            prompt_menu_item(name, &items)?.ok_or_else(|| SushiError::MenuItemNotFound(name.to_string()))
        }
        ItemMatch::Suggestions(items) => {
            let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
            Err(SushiError::MenuItemNotFound(format!(
                "{} (did you mean: {}?)",
                name,
                names.join(", ")
            )))
        }
        ItemMatch::NotFound => Err(SushiError::MenuItemNotFound(name.to_string())),
    }
}

/// List the menu with optional search, category, and veggie filters.
fn cmd_menu(ctx: &Context, category: Option<&str>, search: Option<&str>, veggie: bool) -> Result<()> {
    let catalog = ctx.catalog;

    let mut items: Vec<&MenuItem> = match (search, category) {
        (Some(query), _) => browse::search(catalog, query),
        (None, Some(category)) => browse::by_category(catalog, category),
        (None, None) => catalog.menu.iter().collect(),
    };

    if let (Some(_), Some(category)) = (search, category) {
        items.retain(|item| item.category.matches(category));
    }

    if veggie {
        let veggie_items = browse::veggie_favorites(catalog);
        items.retain(|item| veggie_items.iter().any(|v| v.same_item(item)));
    }

    let title = match (search, veggie) {
        (Some(query), _) => format!("Search results for '{}'", query),
        (None, true) => "Veggie favorites".to_string(),
        (None, false) => "Menu".to_string(),
    };

    let session = ctx.session()?;
    display_menu(&items, &title, &session.cart);
    Ok(())
}

/// Show the recipe card of one dish.
fn cmd_recipe(ctx: &Context, name: &str, category: Option<&str>) -> Result<()> {
    let item = resolve_item(ctx.catalog, name, category)?;
    display_recipe(&browse::recipe(ctx.catalog, item));
    Ok(())
}

/// Apply a cart action and save the session.
fn cmd_cart(ctx: &Context, action: CartAction) -> Result<()> {
    let mut session = ctx.session()?;

    let changed = match action {
        CartAction::Show => false,
        CartAction::Add { name, category } => {
            let item = resolve_item(ctx.catalog, &name, category.as_deref())?;
            session.add_to_cart(item);
            println!("Added: {}", item.name);
            true
        }
        CartAction::Remove { name, category } => {
            let item = resolve_item(ctx.catalog, &name, category.as_deref())?;
            if session.cart.contains(item) {
                session.remove_from_cart(item);
                println!("Removed: {}", item.name);
            } else {
                println!("{} is not in the cart.", item.name);
            }
            true
        }
        CartAction::Set {
            name,
            quantity,
            category,
        } => {
            let item = resolve_item(ctx.catalog, &name, category.as_deref())?;
            if !session.cart.contains(item) {
                println!("{} is not in the cart. Use 'cart add' first.", item.name);
                return Ok(());
            }
            session.set_cart_quantity(item, quantity);
            true
        }
        CartAction::Clear => {
            session.cart.clear();
            println!("Cart cleared.");
            true
        }
    };

    if changed {
        ctx.save(&session)?;
    }

    display_cart(&session.cart);
    Ok(())
}

/// Show the shopping list, optionally exporting it.
fn cmd_shopping(ctx: &Context, csv: Option<&Path>) -> Result<()> {
    let session = ctx.session()?;
    let split = session.shopping_partition(ctx.catalog);

    display_shopping_list(&split);

    if let Some(path) = csv {
        write_shopping_csv(&split, path)?;
        println!("Shopping list written to {}", path.display());
    }

    Ok(())
}

/// Toggle already-have marks.
fn cmd_have(ctx: &Context, names: &[String], interactive: bool, clear: bool) -> Result<()> {
    let mut session = ctx.session()?;
    let list = session.shopping_list(ctx.catalog);

    if clear {
        session.already_have.clear();
        println!("Cleared all already-have marks.");
    } else if interactive || names.is_empty() {
        if list.is_empty() {
            println!("Shopping list is empty. Add dishes to the cart first.");
            return Ok(());
        }
        if !is_interactive() {
            return Err(SushiError::InvalidInput(
                "no ingredient names given and stdin is not a terminal".to_string(),
            ));
        }
        session.already_have = prompt_already_have(&list, &session.already_have)?;
    } else {
        for name in names {
            match session.toggle_already_have(&list, name) {
                Some(true) => println!("Marked as already have: {}", name),
                Some(false) => println!("Back on the list: {}", name),
                None => eprintln!("Not on the shopping list: {}", name),
            }
        }
    }

    ctx.save(&session)?;
    display_shopping_list(&session.shopping_partition(ctx.catalog));
    Ok(())
}

/// Show the runbook in timeline order.
fn cmd_runbook(ctx: &Context, advanced: bool, pending: bool) -> Result<()> {
    let runbook = &ctx.catalog.runbook;
    let mut items = sorted_runbook(runbook);
    if pending {
        items.retain(|item| !item.completed);
    }

    display_runbook(&items, advanced, progress(runbook));
    Ok(())
}

/// Print a share link for the current cart.
fn cmd_share(ctx: &Context, title: &str) -> Result<()> {
    let session = ctx.session()?;
    if session.cart.is_empty() {
        println!("Cart is empty. Add dishes before sharing an event menu.");
        return Ok(());
    }

    let event = EventMenu::from_cart(title, &session.cart);
    let link = share::encode_link(&ctx.config.share_base_url, &event)?;
    println!("{}", link);
    Ok(())
}

/// Show a shared event menu and optionally load it into the cart.
fn cmd_open(ctx: &Context, link: &str, load: bool) -> Result<()> {
    let event = share::decode_link(link)?;
    let resolved = share::resolve(ctx.catalog, &event);
    display_event(&resolved);

    if !load {
        return Ok(());
    }

    let mut session = ctx.session()?;
    if !session.cart.is_empty() && is_interactive() {
        let replace = prompt_yes_no("Replace the current cart with this event menu?", true)?;
        if !replace {
            return Ok(());
        }
    }

    session.replace_cart(resolved.items.iter().copied());
    ctx.save(&session)?;
    println!("Loaded {} dishes into the cart.", session.cart.len());
    Ok(())
}
