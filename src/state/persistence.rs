use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::Catalog;
use crate::state::{Session, SessionFile};

/// Load the catalog (`sushi_data.json`).
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let catalog: Catalog = serde_json::from_str(&content)?;

    tracing::info!(
        path = %path.display(),
        menu_items = catalog.menu.len(),
        ingredients = catalog.ingredients.len(),
        runbook_items = catalog.runbook.len(),
        "catalog loaded"
    );

    Ok(catalog)
}

/// Load a saved session and match its cart against the catalog.
///
/// A missing file is a fresh session.
pub fn load_session<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<Session> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no session file, starting fresh");
        return Ok(Session::new());
    }

    let content = fs::read_to_string(path)?;
    let file: SessionFile = serde_json::from_str(&content)?;
    Ok(Session::restore(file, catalog))
}

/// Save a session as pretty JSON, creating parent directories as needed.
pub fn save_session<P: AsRef<Path>>(path: P, session: &Session) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(&session.to_file())?;
    fs::write(path, json)?;

    tracing::debug!(
        path = %path.display(),
        cart_entries = session.cart.len(),
        already_have = session.already_have.len(),
        "session saved"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::models::MenuItem;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_catalog() {
        let json = r#"{
            "menu": {"Appetizer": [{"name": "Edamame", "ingredients_inside": ["Edamame", "Salt"]}]},
            "ingredients": {"Produce": [{"name": "Edamame", "category": "Produce", "store": "Costco", "cost": 4.0}]},
            "runbook": []
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.menu.len(), 1);
        assert_eq!(catalog.menu[0].category.as_str(), "Appetizer");
        assert_eq!(catalog.ingredients[0].store, "Costco");
    }

    fn tuna_roll_catalog(inside: &str) -> Catalog {
        let item: MenuItem = serde_json::from_str(&format!(
            r#"{{"name": "Tuna Roll", "category": "Maki Rolls", "ingredients_inside": ["{inside}"]}}"#
        ))
        .unwrap();
        Catalog::new(vec![item], Vec::new(), Vec::new())
    }

    #[test]
    fn test_missing_session_is_fresh() {
        let dir = TempDir::new().unwrap();
        let session = load_session(dir.path().join("nope.json"), &Catalog::default()).unwrap();
        assert!(session.cart.is_empty());
        assert!(session.already_have.is_empty());
    }

    #[test]
    fn test_session_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("session.json");
        let catalog = tuna_roll_catalog("Tuna");

        let mut session = Session::new();
        session.add_to_cart(&catalog.menu[0]);
        session.add_to_cart(&catalog.menu[0]);
        session.already_have.toggle("Rice--Grain");

        save_session(&path, &session).unwrap();
        let reloaded = load_session(&path, &catalog).unwrap();
        assert_eq!(reloaded, session);
        assert_eq!(reloaded.cart.total_items(), 2);
    }

    #[test]
    fn test_reload_picks_up_recipe_changes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let before = tuna_roll_catalog("Tuna");
        let mut session = Session::new();
        session.add_to_cart(&before.menu[0]);
        save_session(&path, &session).unwrap();

        let after = tuna_roll_catalog("Salmon");
        let list = load_session(&path, &after).unwrap().shopping_list(&after);
        assert!(list.get("Tuna").is_none());
        assert_eq!(list.get("Salmon").unwrap().total_qty, 1);
    }

    #[test]
    fn test_hand_edited_session_is_normalized() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"cart": [
                {"item": {"name": "Tuna Roll", "category": "Maki Rolls", "ingredients_inside": ["Tuna"]}, "quantity": 9},
                {"item": {"name": "Tuna Roll", "category": "Maki Rolls"}, "quantity": 0},
                {"item": {"name": "Tuna Roll", "category": "Maki Rolls"}, "quantity": 4294967295}
            ]}"#,
        )
        .unwrap();

        let session = load_session(file.path(), &tuna_roll_catalog("Tuna")).unwrap();
        assert_eq!(session.cart.len(), 1);
        assert_eq!(session.cart.total_items(), 5);
    }

    #[test]
    fn test_malformed_catalog_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(load_catalog(file.path()).is_err());
    }
}
