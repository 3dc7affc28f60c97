#[macro_use]
extern crate assert_float_eq;

use std::path::PathBuf;

use sushi_planner_rs::browse::{self, ItemMatch};
use sushi_planner_rs::models::{Catalog, MenuItem};
use sushi_planner_rs::runbook::sorted_runbook;
use sushi_planner_rs::share::{self, EventMenu};
use sushi_planner_rs::shopping::estimate_total;
use sushi_planner_rs::state::{load_catalog, load_session, save_session, Session};
use tempfile::TempDir;

fn sample_catalog() -> Catalog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("sushi_data.json");
    load_catalog(path).unwrap()
}

fn dish<'a>(catalog: &'a Catalog, name: &str) -> &'a MenuItem {
    match browse::find_item(catalog, name, None) {
        ItemMatch::Exact(item) => item,
        other => panic!("{name} not found: {other:?}"),
    }
}

#[test]
fn test_sample_catalog_loads() {
    let catalog = sample_catalog();
    assert_eq!(catalog.menu.len(), 8);
    assert_eq!(catalog.menu_groups().len(), 4);
    assert!(catalog.ingredient("wasabi").is_some());
    assert_eq!(catalog.runbook.len(), 7);
}

#[test]
fn test_cart_to_shopping_list() {
    let catalog = sample_catalog();
    let mut session = Session::new();

    let dragon = dish(&catalog, "Dragon Roll");
    let edamame = dish(&catalog, "Edamame");
    session.add_to_cart(dragon);
    session.add_to_cart(dragon);
    session.add_to_cart(edamame);

    let list = session.shopping_list(&catalog);

    // Rice: baseline 1 + 2 dragon rolls
    assert_eq!(list.get("Rice").unwrap().total_qty, 3);
    assert_eq!(list.get("Wasabi").unwrap().total_qty, 1);
    assert_eq!(list.get("Soy Sauce").unwrap().total_qty, 1);
    assert_eq!(list.get("Avocado").unwrap().total_qty, 2);
    assert_eq!(list.get("Edamame").unwrap().total_qty, 1);
    assert!(list.get("Tuna").is_none());

    let rice = list.get("Rice").unwrap();
    assert_eq!(rice.store, "H Mart");
    assert_eq!(rice.category, "Pantry");
}

#[test]
fn test_already_have_changes_what_to_buy() {
    let catalog = sample_catalog();
    let mut session = Session::new();
    session.add_to_cart(dish(&catalog, "Spicy Tuna Roll"));

    let list = session.shopping_list(&catalog);
    let before = session.shopping_partition(&catalog);
    let cost_before = estimate_total(&before.need);

    assert_eq!(session.toggle_already_have(&list, "Tuna"), Some(true));
    let after = session.shopping_partition(&catalog);

    assert_eq!(after.need.len(), before.need.len() - 1);
    assert_eq!(after.have.len(), 1);
    assert!(estimate_total(&after.need) < cost_before);
}

#[test]
fn test_spicy_tuna_roll_estimate_buys_whole_packages() {
    let catalog = sample_catalog();
    let mut session = Session::new();
    session.add_to_cart(dish(&catalog, "Spicy Tuna Roll"));

    let split = session.shopping_partition(&catalog);
    // Tuna 32 + Rice 18 + Nori 6 + Spicy Mayo 5 + Soy Sauce 4 + Wasabi 3
    assert_float_absolute_eq!(estimate_total(&split.need), 68.0, 1e-9);
}

#[test]
fn test_share_link_round_trip_into_new_session() {
    let catalog = sample_catalog();
    let mut host = Session::new();
    host.add_to_cart(dish(&catalog, "Rainbow Roll"));
    host.add_to_cart(dish(&catalog, "Miso Soup"));

    let event = EventMenu::from_cart("Birthday Sushi", &host.cart);
    let link = share::encode_link("https://sushi.example/", &event).unwrap();

    let decoded = share::decode_link(&link).unwrap();
    assert_eq!(decoded, event);

    let resolved = share::resolve(&catalog, &decoded);
    assert_eq!(resolved.title, "Birthday Sushi");
    assert!(resolved.missing.is_empty());

    let mut guest = Session::new();
    guest.replace_cart(resolved.items.iter().copied());
    assert_eq!(guest.cart.len(), 2);
    assert_eq!(guest.cart.total_items(), 2);
}

#[test]
fn test_shared_item_missing_from_catalog_is_reported() {
    let catalog = sample_catalog();
    let mut event = EventMenu::from_cart("Old Menu", &Session::new().cart);
    event.items.push(dish(&catalog, "Edamame").key());
    event.items.push(sushi_planner_rs::models::MenuItemRef {
        name: "Volcano Roll".to_string(),
        category: "Speciality Rolls".into(),
    });

    let resolved = share::resolve(&catalog, &event);
    assert_eq!(resolved.items.len(), 1);
    assert_eq!(resolved.missing.len(), 1);
    assert_eq!(resolved.missing[0].name, "Volcano Roll");
}

#[test]
fn test_session_persists_between_runs() {
    let catalog = sample_catalog();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    let mut session = load_session(&path, &catalog).unwrap();
    session.add_to_cart(dish(&catalog, "Salmon Nigiri"));
    session.set_cart_quantity(dish(&catalog, "Salmon Nigiri"), 4);
    let list = session.shopping_list(&catalog);
    session.toggle_already_have(&list, "Rice");
    save_session(&path, &session).unwrap();

    let reloaded = load_session(&path, &catalog).unwrap();
    let split = reloaded.shopping_partition(&catalog);
    assert_eq!(split.have.len(), 1);
    assert_eq!(split.have[0].name, "Rice");
    assert_eq!(split.need[0].name, "Salmon");
    assert_eq!(split.need[0].total_qty, 4);
}

#[test]
fn test_sample_runbook_order() {
    let catalog = sample_catalog();
    let order: Vec<&str> = sorted_runbook(&catalog.runbook)
        .iter()
        .map(|item| item.timeline.as_str())
        .collect();
    assert_eq!(
        order,
        vec!["T-5 days", "T-2 days", "T-1 day", "T-0", "T-1.5 hours", "T-4 hours", "T-30 min"]
    );
}

#[test]
fn test_sample_veggie_favorites() {
    let catalog = sample_catalog();
    let names: Vec<&str> = browse::veggie_favorites(&catalog)
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(names, vec!["Edamame", "Miso Soup", "Cucumber Roll"]);
}
